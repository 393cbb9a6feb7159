// Renderer-ready chart structures produced by the chart adapters
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Scatter,
    Heatmap,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterDataset {
    /// Raw category key the points were grouped by.
    pub category: String,
    /// Display name shown in the legend.
    pub label: String,
    pub points: Vec<PlotPoint>,
    pub background_color: &'static str,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    /// Hover text, parallel to `points`.
    pub tooltips: Vec<String>,
}

impl ScatterDataset {
    pub fn tooltip_text(&self, point: &PlotPoint) -> String {
        format!("{}: Protein {}g, Carbs {}g", self.label, point.y, point.x)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub datasets: Vec<ScatterDataset>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|d| d.points.len()).sum()
    }
}

/// One bubble of the correlation heatmap. Axes are numeric: `x` is the column
/// index and `y` the row index into [`HeatmapChart::labels`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPoint {
    pub x: usize,
    pub y: usize,
    pub r: f64,
    pub correlation: f64,
    pub background_color: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapChart {
    pub labels: Vec<String>,
    pub points: Vec<HeatmapPoint>,
    pub axis_min: f64,
    pub axis_max: f64,
}

impl HeatmapChart {
    /// Maps a numeric axis tick back to its label. Ticks between positions
    /// round to the nearest one; ticks outside the label range are blank.
    pub fn tick_label(&self, value: f64) -> &str {
        let rounded = value.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return "";
        }
        self.labels
            .get(rounded as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn tooltip_text(&self, point: &HeatmapPoint) -> String {
        format!(
            "{} vs {}: {:.2}",
            self.tick_label(point.x as f64),
            self.tick_label(point.y as f64),
            point.correlation
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the reported total, one decimal. Always finite.
    pub percentage: f64,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub tooltip: String,
}

impl PieSlice {
    pub fn tooltip_text(&self) -> String {
        format!("{}: {} ({:.1}%)", self.label, self.value, self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: f64,
}

/// Any adapter output, tagged by chart type for the render sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Chart {
    Bar(BarChart),
    Scatter(ScatterChart),
    Heatmap(HeatmapChart),
    Pie(PieChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Bar(_) => ChartKind::Bar,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Heatmap(_) => ChartKind::Heatmap,
            Chart::Pie(_) => ChartKind::Pie,
        }
    }
}

/// A recipe formatted for the table. Numbers are pre-rendered so a missing
/// value never reaches the view as anything but a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeRow {
    pub name: String,
    pub diet_type: String,
    pub cuisine_type: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
