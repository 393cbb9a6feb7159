// Render sink trait - Where adapter output goes to be drawn
use crate::domain::charts::{BarChart, Chart, ChartKind, PieChart, RecipeRow};
use crate::domain::pagination::PageItem;
use serde::Serialize;

/// Everything the recipe table needs to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeTable {
    pub rows: Vec<RecipeRow>,
    pub page: u32,
    pub total_pages: u32,
    pub total_recipes: Option<u64>,
    pub page_window: Vec<PageItem>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Macro averages over the rows on this page.
    pub page_averages: BarChart,
    /// Diet-type breakdown of the rows on this page.
    pub page_breakdown: PieChart,
}

/// Owner of chart instances. At most one live instance exists per
/// [`ChartKind`]; callers destroy before creating a replacement.
pub trait RenderSink: Send {
    fn has_chart(&self, kind: ChartKind) -> bool;

    /// Release the instance for `kind`. Returns false if there was none.
    fn destroy(&mut self, kind: ChartKind) -> bool;

    fn create(&mut self, chart: Chart);

    /// Swap the data of the live bar chart in place. Returns false if no bar
    /// chart exists.
    fn update_bar(&mut self, chart: BarChart) -> bool;

    fn render_table(&mut self, table: RecipeTable);

    fn show_api_response(&mut self, endpoint: &str, body: serde_json::Value);

    fn set_loading(&mut self, loading: bool);

    fn show_error(&mut self, message: String);

    fn clear_error(&mut self);
}

/// Destroy-then-create for charts whose dataset identity changes on refresh.
pub fn replace_chart<S: RenderSink + ?Sized>(sink: &mut S, chart: Chart) {
    sink.destroy(chart.kind());
    sink.create(chart);
}
