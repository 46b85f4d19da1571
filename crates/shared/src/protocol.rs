use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ItemId;

/// Fixed number of results requested per submission.
pub const RECOMMENDATION_LIMIT: usize = 10;

/// Path segments of `GET <base>/api/v1/recommendations/<identifier>`.
pub const RECOMMENDATIONS_PATH: [&str; 3] = ["api", "v1", "recommendations"];

pub const HEALTH_PATH: [&str; 1] = ["health"];

pub const LIMIT_QUERY_PARAM: &str = "limit";

/// One ranked suggestion as returned by the recommendation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub item_id: ItemId,
    pub title: String,
    pub description: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
