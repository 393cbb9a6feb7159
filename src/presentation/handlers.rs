// HTTP request handlers
use crate::application::dashboard_service::{DashboardError, DashboardService};
use crate::application::nutrition_api::ExploreEndpoint;
use crate::infrastructure::chart_registry::ChartRegistry;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{DashboardView, RecipesView};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FilterRequest {
    pub diet_type: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub text: String,
}

/// Failed fetches still return the view, which carries the error banner.
fn status_for(ok: bool) -> StatusCode {
    if ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    }
}

fn dashboard_response(dashboard: &DashboardService<ChartRegistry>, ok: bool) -> Response {
    (status_for(ok), Json(DashboardView::from_service(dashboard))).into_response()
}

fn recipes_response(dashboard: &DashboardService<ChartRegistry>, ok: bool) -> Response {
    (status_for(ok), Json(RecipesView::from_service(dashboard))).into_response()
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Served from the last snapshot, so it answers while an action is running.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Response {
    Json(state.snapshot().dashboard).into_response()
}

/// Re-fetch all four charts
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let mut dashboard = state.begin_action().await;
    let ok = dashboard.load_dashboard().await.is_ok();
    dashboard_response(&dashboard, ok)
}

pub async fn select_filter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> Response {
    let mut dashboard = state.begin_action().await;
    match dashboard.select_filter(&request.diet_type).await {
        Ok(_) => dashboard_response(&dashboard, true),
        Err(DashboardError::Filter(e)) => bad_request(e.to_string()),
        Err(_) => dashboard_response(&dashboard, false),
    }
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let mut dashboard = state.begin_action().await;
    let ok = dashboard.search(&request.text).await.is_ok();
    dashboard_response(&dashboard, ok)
}

pub async fn get_recipes(State(state): State<Arc<AppState>>) -> Response {
    Json(state.snapshot().recipes).into_response()
}

pub async fn load_recipes(State(state): State<Arc<AppState>>) -> Response {
    let mut dashboard = state.begin_action().await;
    let ok = dashboard.fetch_recipes().await.is_ok();
    recipes_response(&dashboard, ok)
}

pub async fn prev_recipe_page(State(state): State<Arc<AppState>>) -> Response {
    let mut dashboard = state.begin_action().await;
    let ok = dashboard.prev_page().await.is_ok();
    recipes_response(&dashboard, ok)
}

pub async fn next_recipe_page(State(state): State<Arc<AppState>>) -> Response {
    let mut dashboard = state.begin_action().await;
    let ok = dashboard.next_page().await.is_ok();
    recipes_response(&dashboard, ok)
}

pub async fn jump_to_recipe_page(
    Path(page): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let mut dashboard = state.begin_action().await;
    match dashboard.jump_to_page(page).await {
        Ok(()) => recipes_response(&dashboard, true),
        Err(e @ DashboardError::PageOutOfRange { .. }) => bad_request(e.to_string()),
        Err(_) => recipes_response(&dashboard, false),
    }
}

/// Raw JSON of one of the explorer endpoints
pub async fn explore(
    Path(endpoint): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(endpoint) = ExploreEndpoint::from_path(&endpoint) else {
        tracing::warn!("Rejected explorer request for {}", endpoint);
        return bad_request(format!("unknown endpoint '{}'", endpoint));
    };

    let mut dashboard = state.begin_action().await;
    let ok = dashboard.explore(endpoint).await.is_ok();
    dashboard_response(&dashboard, ok)
}
