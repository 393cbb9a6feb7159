// HTTP gateway to the nutrition analytics API
use crate::application::nutrition_api::{ExploreEndpoint, FetchError, NutritionApi};
use crate::domain::payloads::{
    CorrelationMatrix, Distribution, NutritionalInsight, RecipePage, ScatterData,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpNutritionApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNutritionApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return format!("{}/{}", self.base_url, path);
        }
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/{}?{}", self.base_url, path, query)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.build_url(path, params);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

fn diet_param(diet_type: Option<&str>) -> Vec<(&'static str, String)> {
    diet_type
        .map(|d| vec![("diet_type", d.to_string())])
        .unwrap_or_default()
}

#[async_trait]
impl NutritionApi for HttpNutritionApi {
    async fn nutritional_insights(
        &self,
        diet_type: Option<&str>,
    ) -> Result<NutritionalInsight, FetchError> {
        self.get_json("nutritional-insights", &diet_param(diet_type))
            .await
    }

    async fn scatter_data(
        &self,
        limit: u32,
        diet_type: Option<&str>,
    ) -> Result<ScatterData, FetchError> {
        let mut params = vec![("limit", limit.to_string())];
        params.extend(diet_param(diet_type));
        self.get_json("scatter-data", &params).await
    }

    async fn heatmap_data(&self) -> Result<CorrelationMatrix, FetchError> {
        self.get_json("heatmap-data", &[]).await
    }

    async fn pie_chart_data(&self) -> Result<Distribution, FetchError> {
        self.get_json("pie-chart-data", &[]).await
    }

    async fn recipes(
        &self,
        diet_type: &str,
        page: u32,
        limit: u32,
    ) -> Result<RecipePage, FetchError> {
        let params = [
            ("diet_type", diet_type.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get_json("recipes", &params).await
    }

    async fn raw(&self, endpoint: ExploreEndpoint) -> Result<serde_json::Value, FetchError> {
        self.get_json(endpoint.path(), &[]).await
    }
}
