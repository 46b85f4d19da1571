//! Remote call to the recommendation backend.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiErrorBody,
    protocol::{HealthReport, RecommendationItem},
};

use crate::{config::ClientConfig, error::FetchError};

/// Anything that can answer a recommendation request. Each call is a single
/// round trip: no retries, no caching.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch(
        &self,
        identifier: &str,
        limit: usize,
    ) -> Result<Vec<RecommendationItem>, FetchError>;
}

pub struct HttpRecommendationSource {
    http: Client,
    config: ClientConfig,
}

impl HttpRecommendationSource {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn health(&self) -> Result<HealthReport, FetchError> {
        let url = self.config.health_url()?;
        let body = self.get_success_body(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_success_body(&self, url: url::Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(%url, "requesting backend");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                detail: describe_error_body(&body),
            });
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationSource {
    async fn fetch(
        &self,
        identifier: &str,
        limit: usize,
    ) -> Result<Vec<RecommendationItem>, FetchError> {
        let url = self.config.recommendations_url(identifier, limit)?;
        let body = self.get_success_body(url).await?;
        let items: Vec<RecommendationItem> = serde_json::from_slice(&body)?;
        tracing::debug!(count = items.len(), "decoded recommendation payload");
        Ok(items)
    }
}

fn describe_error_body(body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ApiErrorBody>(body) {
        return envelope.detail_text();
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        "<empty body>".to_string()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
