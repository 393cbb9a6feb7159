// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::io::{self, Write};
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::{DashboardService, DashboardSession, DashboardSettings};
use crate::infrastructure::chart_registry::ChartRegistry;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::nutrition_client::HttpNutritionApi;
use crate::infrastructure::settings_store::{resolve_base_url, SettingsStore};
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_dashboard_config("config/dashboard")?;

    // Remembered URL first, then config, then ask
    let store = SettingsStore::new(&config.settings.path);
    let base_url = resolve_base_url(&store, config.api.base_url.as_deref(), prompt_for_base_url)
        .context("An API base URL is required to start the dashboard")?;

    let api = Arc::new(
        HttpNutritionApi::new(&base_url, config.api.timeout())
            .context("Failed to build HTTP client")?,
    );
    let settings = DashboardSettings {
        scatter_limit: config.api.scatter_limit,
        recipes_page_size: config.api.recipes_page_size,
    };

    let mut dashboard = DashboardService::new(
        api,
        ChartRegistry::new(),
        DashboardSession::new(base_url),
        settings,
    );
    // A failed first load is shown in the error banner; the server still starts
    if let Err(e) = dashboard.load_dashboard().await {
        tracing::warn!("Initial dashboard load failed: {}", e);
    }

    let state = Arc::new(AppState::new(dashboard));
    let router = presentation::router(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind))?;
    tracing::info!("Starting nutrition dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

fn prompt_for_base_url() -> Option<String> {
    print!("Nutrition API base URL: ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    Some(line)
}
