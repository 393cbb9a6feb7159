// Serializable snapshots of the session and render sink
use crate::application::dashboard_service::DashboardService;
use crate::application::render_sink::RecipeTable;
use crate::infrastructure::chart_registry::{ApiResponse, ChartInstance, ChartRegistry};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FilterView {
    pub selected: String,
    pub search_text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub api_base_url: String,
    pub filter: FilterView,
    pub loading: bool,
    pub error: Option<String>,
    pub last_refresh_ms: Option<u64>,
    pub charts: Vec<ChartInstance>,
    pub charts_released: u64,
    pub api_response: Option<ApiResponse>,
}

impl DashboardView {
    pub fn from_service(dashboard: &DashboardService<ChartRegistry>) -> Self {
        let session = dashboard.session();
        let registry = dashboard.sink();
        Self {
            api_base_url: session.api_base_url.clone(),
            filter: FilterView {
                selected: session.filter.selected().to_string(),
                search_text: session.filter.search_text().to_string(),
                options: session.filter.options().to_vec(),
            },
            loading: registry.is_loading(),
            error: registry.error().map(str::to_string),
            last_refresh_ms: session.last_refresh_ms,
            charts: registry.charts().cloned().collect(),
            charts_released: registry.destroyed_count(),
            api_response: registry.api_response().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipesView {
    pub visible: bool,
    pub diet_type: String,
    pub error: Option<String>,
    pub table: Option<RecipeTable>,
}

impl RecipesView {
    pub fn from_service(dashboard: &DashboardService<ChartRegistry>) -> Self {
        let session = dashboard.session();
        let registry = dashboard.sink();
        Self {
            visible: session.table_visible,
            diet_type: session.filter.selected().to_string(),
            error: registry.error().map(str::to_string),
            table: registry.table().cloned(),
        }
    }
}
