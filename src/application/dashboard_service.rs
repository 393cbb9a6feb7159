// Dashboard service - Fetches analytics, runs adapters, drives the render sink
use crate::application::adapters::{
    bar_chart, distribution_from_recipes, heatmap_chart, macro_average_chart, pie_chart,
    recipe_rows, scatter_chart,
};
use crate::application::nutrition_api::{ExploreEndpoint, FetchError, NutritionApi};
use crate::application::render_sink::{replace_chart, RecipeTable, RenderSink};
use crate::domain::charts::{Chart, ChartKind};
use crate::domain::filter::{FilterController, FilterError, SearchOutcome};
use crate::domain::pagination::PaginationController;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

const RECIPES_ENDPOINT: &str = "recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refresh {
    Full,
    Filter,
}

impl Refresh {
    fn describe(self) -> &'static str {
        match self {
            Refresh::Full => "Dashboard load",
            Refresh::Filter => "Filter refresh",
        }
    }

    fn error_prefix(self) -> &'static str {
        match self {
            Refresh::Full => "Failed to load dashboard data",
            Refresh::Filter => "Failed to apply filter",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSettings {
    pub scatter_limit: u32,
    pub recipes_page_size: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            scatter_limit: 100,
            recipes_page_size: 20,
        }
    }
}

/// View-state that lives for the whole session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSession {
    pub api_base_url: String,
    pub filter: FilterController,
    pub pagination: PaginationController,
    pub table_visible: bool,
    pub last_refresh_ms: Option<u64>,
}

impl DashboardSession {
    pub fn new(api_base_url: String) -> Self {
        Self {
            api_base_url,
            ..Self::default()
        }
    }
}

pub struct DashboardService<S: RenderSink> {
    api: Arc<dyn NutritionApi>,
    sink: S,
    session: DashboardSession,
    settings: DashboardSettings,
}

impl<S: RenderSink> DashboardService<S> {
    pub fn new(
        api: Arc<dyn NutritionApi>,
        sink: S,
        session: DashboardSession,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            api,
            sink,
            session,
            settings,
        }
    }

    pub fn session(&self) -> &DashboardSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetch all four analytic payloads concurrently and rebuild every chart.
    /// Nothing is applied unless all four fetches succeed.
    pub async fn load_dashboard(&mut self) -> Result<(), FetchError> {
        self.refresh_charts(Refresh::Full).await
    }

    /// Dropdown selection. Unknown values are rejected before any fetch.
    pub async fn select_filter(&mut self, value: &str) -> Result<bool, DashboardError> {
        let changed = self.session.filter.select(value).inspect_err(|e| {
            tracing::warn!("Rejected filter selection: {}", e);
        })?;
        if changed {
            self.apply_filter().await?;
        }
        Ok(changed)
    }

    /// Search box input. Only a changed selection triggers a re-fetch.
    pub async fn search(&mut self, text: &str) -> Result<SearchOutcome, FetchError> {
        let outcome = self.session.filter.resolve_search(text);
        tracing::debug!("Search '{}' resolved to {:?}", text, outcome);
        if outcome.changed() {
            self.apply_filter().await?;
        }
        Ok(outcome)
    }

    async fn apply_filter(&mut self) -> Result<(), FetchError> {
        self.refresh_charts(Refresh::Filter).await?;
        if self.session.table_visible {
            self.fetch_recipes().await?;
        }
        Ok(())
    }

    /// Joins the four analytic fetches. On a filter refresh the bar chart
    /// keeps its instance and swaps data; every other chart is rebuilt.
    async fn refresh_charts(&mut self, refresh: Refresh) -> Result<(), FetchError> {
        let filter = self.session.filter.active_filter().map(str::to_string);
        let started = Instant::now();
        self.sink.set_loading(true);

        let api = &self.api;
        let result = futures::try_join!(
            api.nutritional_insights(filter.as_deref()),
            api.scatter_data(self.settings.scatter_limit, filter.as_deref()),
            api.heatmap_data(),
            api.pie_chart_data(),
        );

        let elapsed_ms = started.elapsed().as_millis() as u64;
        self.session.last_refresh_ms = Some(elapsed_ms);

        let outcome = match result {
            Ok((insight, scatter, matrix, distribution)) => {
                let bar = bar_chart(&insight);
                if refresh == Refresh::Filter && self.sink.has_chart(ChartKind::Bar) {
                    self.sink.update_bar(bar);
                } else {
                    replace_chart(&mut self.sink, Chart::Bar(bar));
                }
                let scatter = scatter_chart(&scatter.data);
                let scatter_points = scatter.point_count();
                replace_chart(&mut self.sink, Chart::Scatter(scatter));
                replace_chart(&mut self.sink, Chart::Heatmap(heatmap_chart(&matrix)));
                replace_chart(&mut self.sink, Chart::Pie(pie_chart(&distribution)));
                self.sink.clear_error();

                tracing::info!(
                    "{} in {}ms (filter {}, {} categories, {} scatter points, {} slices)",
                    refresh.describe(),
                    elapsed_ms,
                    filter.as_deref().unwrap_or(crate::domain::filter::ALL),
                    insight.diet_types.len(),
                    scatter_points,
                    distribution.labels.len()
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("{} failed after {}ms: {}", refresh.describe(), elapsed_ms, e);
                self.sink
                    .show_error(format!("{}: {}", refresh.error_prefix(), e));
                Err(e)
            }
        };

        self.sink.set_loading(false);
        outcome
    }

    /// Fetch the current page of recipes for the selected diet type.
    pub async fn fetch_recipes(&mut self) -> Result<(), FetchError> {
        let page = self.session.pagination.current_page();
        let diet_type = self.session.filter.selected().to_string();
        self.sink.set_loading(true);

        let result = self
            .api
            .recipes(&diet_type, page, self.settings.recipes_page_size)
            .await;

        let outcome = match result {
            Ok(response) => {
                if response.page != page {
                    tracing::debug!("Requested page {} but server answered {}", page, response.page);
                }
                let pagination = &mut self.session.pagination;
                pagination.set_total_pages(response.total_pages);

                let table = RecipeTable {
                    rows: recipe_rows(&response.recipes),
                    page: pagination.current_page(),
                    total_pages: pagination.total_pages(),
                    total_recipes: response.total_recipes,
                    page_window: pagination.page_window(),
                    prev_disabled: pagination.prev_disabled(),
                    next_disabled: pagination.next_disabled(),
                    page_averages: macro_average_chart(&response.recipes),
                    page_breakdown: pie_chart(&distribution_from_recipes(&response.recipes)),
                };
                tracing::debug!(
                    "Recipes page {}/{}: {} rows",
                    table.page,
                    table.total_pages,
                    table.rows.len()
                );
                self.sink.render_table(table);
                match serde_json::to_value(&response) {
                    Ok(body) => self.sink.show_api_response(RECIPES_ENDPOINT, body),
                    Err(e) => tracing::warn!("Could not re-encode recipes page: {}", e),
                }
                self.sink.clear_error();
                self.session.table_visible = true;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Recipe fetch failed: {}", e);
                self.sink.show_error(format!("Failed to fetch recipes: {}", e));
                Err(e)
            }
        };

        self.sink.set_loading(false);
        outcome
    }

    /// No-op on the first page.
    pub async fn prev_page(&mut self) -> Result<(), FetchError> {
        if self.session.pagination.prev_disabled() {
            return Ok(());
        }
        self.session.pagination.prev();
        self.fetch_recipes().await
    }

    pub async fn next_page(&mut self) -> Result<(), FetchError> {
        self.session.pagination.next();
        self.fetch_recipes().await
    }

    /// Only pages the pagination window can offer are accepted.
    pub async fn jump_to_page(&mut self, page: u32) -> Result<(), DashboardError> {
        let pagination = &mut self.session.pagination;
        if !pagination.contains(page) {
            tracing::warn!("Rejected jump to page {} of {}", page, pagination.total_pages());
            return Err(DashboardError::PageOutOfRange {
                page,
                total_pages: pagination.total_pages(),
            });
        }
        pagination.jump_to(page);
        Ok(self.fetch_recipes().await?)
    }

    /// Pass an endpoint's raw JSON through to the sink for inspection.
    pub async fn explore(&mut self, endpoint: ExploreEndpoint) -> Result<(), FetchError> {
        self.sink.set_loading(true);
        let outcome = match self.api.raw(endpoint).await {
            Ok(body) => {
                self.sink.show_api_response(endpoint.path(), body);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Explorer fetch of {} failed: {}", endpoint.path(), e);
                self.sink.show_error(format!("Failed to fetch data: {}", e));
                Err(e)
            }
        };
        self.sink.set_loading(false);
        outcome
    }
}
