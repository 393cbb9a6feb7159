use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub settings: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Used on first run when nothing has been remembered yet.
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_scatter_limit")]
    pub scatter_limit: u32,
    #[serde(default = "default_recipes_page_size")]
    pub recipes_page_size: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            scatter_limit: default_scatter_limit(),
            recipes_page_size: default_recipes_page_size(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// TOML file holding remembered values such as the API base URL
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_scatter_limit() -> u32 {
    100
}

fn default_recipes_page_size() -> u32 {
    20
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_store_path() -> String {
    ".nutrition-dashboard.toml".to_string()
}

/// Load `name` (optional, any format the config crate detects) overlaid with
/// `NUTRIDASH__SECTION__KEY` environment variables.
pub fn load_dashboard_config(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .add_source(config::Environment::with_prefix("NUTRIDASH").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_dashboard_config("does/not/exist").unwrap();
        assert_eq!(config.api.scatter_limit, 100);
        assert_eq!(config.api.recipes_page_size, 20);
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.settings.path, ".nutrition-dashboard.toml");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://example.test/api\"\nrecipes_page_size = 50\n\n[server]\nbind = \"127.0.0.1:9000\""
        )
        .unwrap();

        let config = load_dashboard_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://example.test/api"));
        assert_eq!(config.api.recipes_page_size, 50);
        assert_eq!(config.api.scatter_limit, 100);
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }
}
