// In-memory render sink - Holds live chart instances for the HTTP layer
use crate::application::render_sink::{RecipeTable, RenderSink};
use crate::domain::charts::{BarChart, Chart, ChartKind};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct ChartInstance {
    pub id: u64,
    pub chart: Chart,
    pub created_at: String,
    pub updated_at: String,
    /// In-place data swaps since creation.
    pub updates: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub endpoint: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct ChartRegistry {
    instances: BTreeMap<ChartKind, ChartInstance>,
    next_id: u64,
    destroyed: u64,
    table: Option<RecipeTable>,
    api_response: Option<ApiResponse>,
    loading: bool,
    error: Option<String>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartInstance> {
        self.instances.values()
    }

    /// Instances released over the registry's lifetime.
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    pub fn table(&self) -> Option<&RecipeTable> {
        self.table.as_ref()
    }

    pub fn api_response(&self) -> Option<&ApiResponse> {
        self.api_response.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl RenderSink for ChartRegistry {
    fn has_chart(&self, kind: ChartKind) -> bool {
        self.instances.contains_key(&kind)
    }

    fn destroy(&mut self, kind: ChartKind) -> bool {
        match self.instances.remove(&kind) {
            Some(instance) => {
                self.destroyed += 1;
                tracing::debug!("Destroyed {:?} chart #{}", kind, instance.id);
                true
            }
            None => false,
        }
    }

    fn create(&mut self, chart: Chart) {
        let kind = chart.kind();
        if self.destroy(kind) {
            tracing::warn!("{:?} chart was recreated without being destroyed first", kind);
        }

        self.next_id += 1;
        let timestamp = now();
        tracing::debug!("Created {:?} chart #{}", kind, self.next_id);
        self.instances.insert(
            kind,
            ChartInstance {
                id: self.next_id,
                chart,
                created_at: timestamp.clone(),
                updated_at: timestamp,
                updates: 0,
            },
        );
    }

    fn update_bar(&mut self, chart: BarChart) -> bool {
        match self.instances.get_mut(&ChartKind::Bar) {
            Some(instance) => {
                instance.chart = Chart::Bar(chart);
                instance.updated_at = now();
                instance.updates += 1;
                true
            }
            None => false,
        }
    }

    fn render_table(&mut self, table: RecipeTable) {
        self.table = Some(table);
    }

    fn show_api_response(&mut self, endpoint: &str, body: serde_json::Value) {
        self.api_response = Some(ApiResponse {
            endpoint: endpoint.to_string(),
            body,
        });
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}
