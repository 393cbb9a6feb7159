// Remembered settings - A small TOML key-value file
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const API_BASE_URL_KEY: &str = "apiBaseUrl";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("no API base URL configured")]
    MissingBaseUrl,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&values)?;
        fs::write(&self.path, content).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}

/// Pick the API base URL: the remembered value, else `configured`, else
/// whatever `prompt` returns. A newly obtained URL is remembered.
pub fn resolve_base_url(
    store: &SettingsStore,
    configured: Option<&str>,
    prompt: impl FnOnce() -> Option<String>,
) -> Result<String, SettingsError> {
    if let Some(url) = store.get(API_BASE_URL_KEY)?.as_deref().and_then(normalize_url) {
        tracing::debug!("Using remembered API base URL {}", url);
        return Ok(url);
    }

    let url = configured
        .and_then(normalize_url)
        .or_else(|| prompt().as_deref().and_then(normalize_url))
        .ok_or(SettingsError::MissingBaseUrl)?;

    store.set(API_BASE_URL_KEY, &url)?;
    tracing::info!("Remembered API base URL {} in {}", url, store.path().display());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.toml"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let (_dir, store) = store();
        assert_eq!(store.get(API_BASE_URL_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let (_dir, store) = store();
        store.set("theme", "dark").unwrap();
        store.set(API_BASE_URL_KEY, "https://a.test/api").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            store.get(API_BASE_URL_KEY).unwrap().as_deref(),
            Some("https://a.test/api")
        );
    }

    #[test]
    fn test_remembered_url_wins_and_prompt_is_skipped() {
        let (_dir, store) = store();
        store.set(API_BASE_URL_KEY, "https://remembered.test/api/").unwrap();

        let url = resolve_base_url(&store, Some("https://configured.test"), || {
            panic!("prompt should not run")
        })
        .unwrap();
        assert_eq!(url, "https://remembered.test/api");
    }

    #[test]
    fn test_configured_url_is_remembered() {
        let (_dir, store) = store();
        let url = resolve_base_url(&store, Some(" https://configured.test/api "), || None).unwrap();
        assert_eq!(url, "https://configured.test/api");
        assert_eq!(store.get(API_BASE_URL_KEY).unwrap().as_deref(), Some(url.as_str()));
    }

    #[test]
    fn test_prompt_used_on_first_run() {
        let (_dir, store) = store();
        let url = resolve_base_url(&store, None, || Some("http://localhost:7071/api\n".to_string()))
            .unwrap();
        assert_eq!(url, "http://localhost:7071/api");
    }

    #[test]
    fn test_blank_prompt_is_rejected() {
        let (_dir, store) = store();
        let result = resolve_base_url(&store, Some("   "), || Some("  ".to_string()));
        assert!(matches!(result, Err(SettingsError::MissingBaseUrl)));
        assert_eq!(store.get(API_BASE_URL_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (_dir, store) = store();
        fs::write(store.path(), "apiBaseUrl = [").unwrap();
        assert!(matches!(
            store.get(API_BASE_URL_KEY),
            Err(SettingsError::Parse { .. })
        ));
    }
}
