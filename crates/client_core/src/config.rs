use std::{collections::HashMap, fs};

use url::Url;

use crate::error::FetchError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const CONFIG_FILE_NAME: &str = "recommender.toml";
pub const API_URL_ENV: &str = "RECOMMENDER_API_URL";
pub const API_URL_ENV_ALIAS: &str = "APP__API_URL";

/// Explicit client configuration; the only recognised option is the backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `<base>/api/v1/recommendations/<identifier>?limit=<limit>`, with the
    /// identifier encoded as a single path segment.
    ///
    /// `.` and `..` are rejected: URL parsing collapses them (and their `%2E`
    /// spellings) as dot segments, so no request could carry them.
    pub fn recommendations_url(&self, identifier: &str, limit: usize) -> Result<Url, FetchError> {
        if matches!(identifier, "." | "..") {
            return Err(FetchError::UnroutableIdentifier(identifier.to_string()));
        }
        let mut url = self.endpoint(&shared::protocol::RECOMMENDATIONS_PATH)?;
        url.path_segments_mut()
            .map_err(|()| self.invalid_base("base url cannot carry a path"))?
            .push(identifier);
        url.query_pairs_mut().append_pair(
            shared::protocol::LIMIT_QUERY_PARAM,
            &limit.to_string(),
        );
        Ok(url)
    }

    pub fn health_url(&self) -> Result<Url, FetchError> {
        self.endpoint(&shared::protocol::HEALTH_PATH)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|err| self.invalid_base(err.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| self.invalid_base("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn invalid_base(&self, reason: impl Into<String>) -> FetchError {
        FetchError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.into(),
        }
    }
}

pub fn load_client_config() -> ClientConfig {
    let file_contents = fs::read_to_string(CONFIG_FILE_NAME).ok();
    resolve_client_config(file_contents.as_deref(), |name| std::env::var(name).ok())
}

/// Layers the config file and then the environment over the defaults.
///
/// Blank values are ignored at every layer.
pub fn resolve_client_config(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = non_blank(file_cfg.get("api_url").cloned()) {
                    config.base_url = v;
                }
            }
            Err(err) => {
                tracing::warn!(file = CONFIG_FILE_NAME, "ignoring unreadable config file: {err}");
            }
        }
    }

    if let Some(v) = non_blank(env(API_URL_ENV)) {
        config.base_url = v;
    }
    if let Some(v) = non_blank(env(API_URL_ENV_ALIAS)) {
        config.base_url = v;
    }

    config
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
