// Gateway trait for the nutrition analytics API
use crate::domain::payloads::{
    CorrelationMatrix, Distribution, NutritionalInsight, RecipePage, ScatterData,
};
use async_trait::async_trait;
use thiserror::Error;

/// Why a fetch failed. Callers report these uniformly; the variants exist
/// for logging, not for user-facing classification.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Endpoints whose raw JSON can be shown in the API explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreEndpoint {
    NutritionalInsights,
    Clusters,
    Stats,
}

impl ExploreEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ExploreEndpoint::NutritionalInsights => "nutritional-insights",
            ExploreEndpoint::Clusters => "clusters",
            ExploreEndpoint::Stats => "stats",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "nutritional-insights" => Some(ExploreEndpoint::NutritionalInsights),
            "clusters" => Some(ExploreEndpoint::Clusters),
            "stats" => Some(ExploreEndpoint::Stats),
            _ => None,
        }
    }
}

#[async_trait]
pub trait NutritionApi: Send + Sync {
    /// Per-category macro averages, optionally restricted to one diet type
    async fn nutritional_insights(
        &self,
        diet_type: Option<&str>,
    ) -> Result<NutritionalInsight, FetchError>;

    /// Protein/carbs points, at most `limit`
    async fn scatter_data(
        &self,
        limit: u32,
        diet_type: Option<&str>,
    ) -> Result<ScatterData, FetchError>;

    async fn heatmap_data(&self) -> Result<CorrelationMatrix, FetchError>;

    async fn pie_chart_data(&self) -> Result<Distribution, FetchError>;

    /// One page of recipes; `diet_type` is sent as-is, including "all"
    async fn recipes(
        &self,
        diet_type: &str,
        page: u32,
        limit: u32,
    ) -> Result<RecipePage, FetchError>;

    /// Untyped response body for the API explorer
    async fn raw(&self, endpoint: ExploreEndpoint) -> Result<serde_json::Value, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explore_endpoint_paths_round_trip() {
        for endpoint in [
            ExploreEndpoint::NutritionalInsights,
            ExploreEndpoint::Clusters,
            ExploreEndpoint::Stats,
        ] {
            assert_eq!(ExploreEndpoint::from_path(endpoint.path()), Some(endpoint));
        }
        assert_eq!(ExploreEndpoint::from_path("recipes"), None);
    }
}
