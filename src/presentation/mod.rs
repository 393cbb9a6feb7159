// Presentation layer - JSON view of the dashboard session over HTTP
pub mod app_state;
pub mod handlers;
pub mod views;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    explore, get_dashboard, get_recipes, health_check, jump_to_recipe_page, load_recipes,
    next_recipe_page, prev_recipe_page, refresh_dashboard, search, select_filter,
};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .route("/filter", post(select_filter))
        .route("/search", post(search))
        .route("/recipes", get(get_recipes))
        .route("/recipes/load", post(load_recipes))
        .route("/recipes/prev", post(prev_recipe_page))
        .route("/recipes/next", post(next_recipe_page))
        .route("/recipes/page/:page", post(jump_to_recipe_page))
        .route("/explore/:endpoint", get(explore))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
