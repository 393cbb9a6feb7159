// Chart adapters - Pure reshaping of API payloads into renderer-ready charts
use crate::domain::charts::{
    round1, BarChart, BarSeries, HeatmapChart, HeatmapPoint, PieChart, PieSlice, PlotPoint,
    RecipeRow, ScatterChart, ScatterDataset,
};
use crate::domain::payloads::{
    Amount, CorrelationMatrix, Distribution, NutritionalInsight, Recipe, ScatterPoint,
};
use std::collections::HashMap;

const PROTEIN_FILL: &str = "rgba(59, 130, 246, 0.7)";
const PROTEIN_BORDER: &str = "rgba(59, 130, 246, 1)";
const CARBS_FILL: &str = "rgba(16, 185, 129, 0.7)";
const CARBS_BORDER: &str = "rgba(16, 185, 129, 1)";
const FAT_FILL: &str = "rgba(251, 146, 60, 0.7)";
const FAT_BORDER: &str = "rgba(251, 146, 60, 1)";
const BAR_BORDER_WIDTH: u32 = 2;

const SCATTER_FALLBACK_COLOR: &str = "rgba(107, 114, 128, 0.6)";
const SCATTER_POINT_RADIUS: u32 = 5;
const SCATTER_HOVER_RADIUS: u32 = 7;

const STRONG_POSITIVE: &str = "rgba(239, 68, 68, 0.7)";
const WEAK_POSITIVE: &str = "rgba(251, 146, 60, 0.7)";
const WEAK_NEGATIVE: &str = "rgba(59, 130, 246, 0.7)";
const STRONG_NEGATIVE: &str = "rgba(16, 185, 129, 0.7)";

const PIE_PALETTE: [(&str, &str); 5] = [
    ("rgba(59, 130, 246, 0.7)", "rgba(59, 130, 246, 1)"),
    ("rgba(16, 185, 129, 0.7)", "rgba(16, 185, 129, 1)"),
    ("rgba(251, 146, 60, 0.7)", "rgba(251, 146, 60, 1)"),
    ("rgba(139, 92, 246, 0.7)", "rgba(139, 92, 246, 1)"),
    ("rgba(239, 68, 68, 0.7)", "rgba(239, 68, 68, 1)"),
];

const MISSING_NUMBER: &str = "-";
const UNKNOWN_CATEGORY: &str = "unknown";

// ---------------------------------------------------------------------------
// Bar
// ---------------------------------------------------------------------------

pub fn bar_chart(insight: &NutritionalInsight) -> BarChart {
    let len = insight.diet_types.len();
    BarChart {
        labels: insight.diet_types.clone(),
        series: vec![
            bar_series("Protein (g)", aligned(&insight.protein, len), PROTEIN_FILL, PROTEIN_BORDER),
            bar_series("Carbs (g)", aligned(&insight.carbs, len), CARBS_FILL, CARBS_BORDER),
            bar_series("Fat (g)", aligned(&insight.fat, len), FAT_FILL, FAT_BORDER),
        ],
    }
}

fn bar_series(
    label: &str,
    data: Vec<f64>,
    background_color: &'static str,
    border_color: &'static str,
) -> BarSeries {
    BarSeries {
        label: label.to_string(),
        data,
        background_color,
        border_color,
        border_width: BAR_BORDER_WIDTH,
    }
}

/// Truncate or zero-pad a series so it lines up with the label sequence.
fn aligned(values: &[f64], len: usize) -> Vec<f64> {
    let mut out: Vec<f64> = values.iter().copied().take(len).collect();
    out.resize(len, 0.0);
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroAverages {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Mean of each macro over the rows where it is numeric, one decimal.
/// A field with no numeric values averages to 0.
pub fn average_macros(rows: &[Recipe]) -> MacroAverages {
    MacroAverages {
        protein: mean_of(rows.iter().map(|r| r.protein.value())),
        carbs: mean_of(rows.iter().map(|r| r.carbs.value())),
        fat: mean_of(rows.iter().map(|r| r.fat.value())),
    }
}

fn mean_of(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round1(sum / count as f64)
    }
}

/// Single-series bar chart of the macro averages across `rows`.
pub fn macro_average_chart(rows: &[Recipe]) -> BarChart {
    let averages = average_macros(rows);
    BarChart {
        labels: vec!["Protein".to_string(), "Carbs".to_string(), "Fat".to_string()],
        series: vec![bar_series(
            "Average (g)",
            vec![averages.protein, averages.carbs, averages.fat],
            PROTEIN_FILL,
            PROTEIN_BORDER,
        )],
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

pub fn scatter_chart(points: &[ScatterPoint]) -> ScatterChart {
    let mut datasets: Vec<ScatterDataset> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for point in points {
        let idx = *index_by_category
            .entry(point.diet_type.as_str())
            .or_insert_with(|| {
                datasets.push(ScatterDataset {
                    category: point.diet_type.clone(),
                    label: capitalize(&point.diet_type),
                    points: Vec::new(),
                    background_color: scatter_color(&point.diet_type),
                    point_radius: SCATTER_POINT_RADIUS,
                    point_hover_radius: SCATTER_HOVER_RADIUS,
                    tooltips: Vec::new(),
                });
                datasets.len() - 1
            });
        let dataset = &mut datasets[idx];
        let plotted = PlotPoint {
            x: point.carbs,
            y: point.protein,
        };
        let tooltip = dataset.tooltip_text(&plotted);
        dataset.tooltips.push(tooltip);
        dataset.points.push(plotted);
    }

    ScatterChart { datasets }
}

fn scatter_color(category: &str) -> &'static str {
    match category {
        "paleo" => "rgba(239, 68, 68, 0.6)",
        "keto" => "rgba(59, 130, 246, 0.6)",
        "vegan" => "rgba(16, 185, 129, 0.6)",
        "mediterranean" => "rgba(251, 146, 60, 0.6)",
        "dash" => "rgba(139, 92, 246, 0.6)",
        _ => SCATTER_FALLBACK_COLOR,
    }
}

/// Upper-case the first character, leave the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

/// Bubble-chart rendition of a correlation matrix: every cell, including
/// the diagonal and both halves, becomes one point.
pub fn heatmap_chart(matrix: &CorrelationMatrix) -> HeatmapChart {
    let points = matrix
        .data
        .iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values.iter().enumerate().map(move |(col, &value)| HeatmapPoint {
                x: col,
                y: row,
                r: heatmap_radius(value),
                correlation: value,
                background_color: correlation_color(value),
                tooltip: String::new(),
            })
        })
        .collect();

    let mut chart = HeatmapChart {
        labels: matrix.labels.clone(),
        points,
        axis_min: -0.5,
        axis_max: matrix.labels.len() as f64 - 0.5,
    };
    let tooltips: Vec<String> = chart.points.iter().map(|p| chart.tooltip_text(p)).collect();
    for (point, tooltip) in chart.points.iter_mut().zip(tooltips) {
        point.tooltip = tooltip;
    }
    chart
}

pub fn heatmap_radius(value: f64) -> f64 {
    value.abs() * 20.0 + 10.0
}

pub fn correlation_color(value: f64) -> &'static str {
    if value > 0.5 {
        STRONG_POSITIVE
    } else if value > 0.0 {
        WEAK_POSITIVE
    } else if value > -0.5 {
        WEAK_NEGATIVE
    } else {
        STRONG_NEGATIVE
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

pub fn pie_chart(distribution: &Distribution) -> PieChart {
    let slices = distribution
        .labels
        .iter()
        .zip(&distribution.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let (background_color, border_color) = PIE_PALETTE[i % PIE_PALETTE.len()];
            let mut slice = PieSlice {
                label: label.clone(),
                value,
                percentage: percentage(value, distribution.total),
                background_color,
                border_color,
                tooltip: String::new(),
            };
            slice.tooltip = slice.tooltip_text();
            slice
        })
        .collect();

    PieChart {
        slices,
        total: distribution.total,
    }
}

fn percentage(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    let pct = round1(value / total * 100.0);
    if pct.is_finite() { pct } else { 0.0 }
}

/// Count recipes per lower-cased diet type, in first-seen order.
pub fn distribution_from_recipes(rows: &[Recipe]) -> Distribution {
    let mut labels: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();

    for recipe in rows {
        let key = recipe
            .diet_type
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_CATEGORY)
            .to_lowercase();
        match labels.iter().position(|l| *l == key) {
            Some(idx) => values[idx] += 1.0,
            None => {
                labels.push(key);
                values.push(1.0);
            }
        }
    }

    Distribution {
        labels,
        values,
        total: rows.len() as f64,
    }
}

// ---------------------------------------------------------------------------
// Recipe table
// ---------------------------------------------------------------------------

pub fn recipe_rows(recipes: &[Recipe]) -> Vec<RecipeRow> {
    recipes.iter().map(recipe_row).collect()
}

fn recipe_row(recipe: &Recipe) -> RecipeRow {
    RecipeRow {
        name: recipe.recipe_name.clone(),
        diet_type: recipe.diet_type.clone().unwrap_or_default(),
        cuisine_type: recipe.cuisine_type.clone().unwrap_or_default(),
        protein: format_amount(&recipe.protein),
        carbs: format_amount(&recipe.carbs),
        fat: format_amount(&recipe.fat),
    }
}

/// Numbers and server text are shown as-is; absent or blank values as "-".
fn format_amount(amount: &Amount) -> String {
    match amount {
        Amount::Number(v) => v.to_string(),
        Amount::Text(text) if !text.trim().is_empty() => text.clone(),
        _ => MISSING_NUMBER.to_string(),
    }
}
