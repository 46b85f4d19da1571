//! Session state and the request lifecycle that drives it.
//!
//! The controller is synchronous: `on_submit` moves the state to `Loading`
//! and hands back a [`PendingFetch`]. Whoever owns the async runtime runs it
//! and feeds the resulting [`Settlement`] back through `settle`.

use std::sync::Arc;

use shared::protocol::{RecommendationItem, RECOMMENDATION_LIMIT};

use crate::{
    config::ClientConfig,
    error::{FailureCategory, FetchError, EMPTY_IDENTIFIER_MESSAGE, FETCH_FAILED_MESSAGE},
    transport::{HttpRecommendationSource, RecommendationSource},
    view::Intent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    category: FailureCategory,
    message: String,
}

impl SessionError {
    fn empty_identifier() -> Self {
        Self {
            category: FailureCategory::Validation,
            message: EMPTY_IDENTIFIER_MESSAGE.to_string(),
        }
    }

    fn fetch_failed(category: FailureCategory) -> Self {
        Self {
            category,
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn category(&self) -> FailureCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Loading,
    Error(SessionError),
    Loaded,
}

/// Complete snapshot of the interface. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    identifier: String,
    status: SessionStatus,
    items: Vec<RecommendationItem>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            status: SessionStatus::Idle,
            items: Vec::new(),
        }
    }
}

impl SessionState {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Error(err) => Some(err.message()),
            _ => None,
        }
    }
}

/// A fetch that has been started by `on_submit` but not yet executed.
pub struct PendingFetch {
    generation: u64,
    identifier: String,
    limit: usize,
    source: Arc<dyn RecommendationSource>,
}

impl PendingFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Performs the single outbound call. Always yields exactly one settlement.
    pub async fn run(self) -> Settlement {
        let outcome = self.source.fetch(&self.identifier, self.limit).await;
        Settlement {
            generation: self.generation,
            outcome,
        }
    }

    /// Settles without issuing the call, e.g. when no worker can execute it.
    pub fn abandon(self, reason: impl Into<String>) -> Settlement {
        Settlement {
            generation: self.generation,
            outcome: Err(FetchError::Unavailable(reason.into())),
        }
    }
}

#[derive(Debug)]
pub struct Settlement {
    generation: u64,
    outcome: Result<Vec<RecommendationItem>, FetchError>,
}

impl Settlement {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn outcome(&self) -> &Result<Vec<RecommendationItem>, FetchError> {
        &self.outcome
    }
}

pub struct RequestController {
    state: SessionState,
    source: Arc<dyn RecommendationSource>,
    limit: usize,
    last_generation: u64,
    in_flight: Option<u64>,
}

impl RequestController {
    pub fn new(source: Arc<dyn RecommendationSource>) -> Self {
        Self {
            state: SessionState::default(),
            source,
            limit: RECOMMENDATION_LIMIT,
            last_generation: 0,
            in_flight: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(Arc::new(HttpRecommendationSource::new(config.clone())))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn handle(&mut self, intent: Intent) -> Option<PendingFetch> {
        match intent {
            Intent::IdentifierChanged(value) => {
                self.on_identifier_change(value);
                None
            }
            Intent::Submit => self.on_submit(),
        }
    }

    pub fn on_identifier_change(&mut self, value: impl Into<String>) {
        self.state = SessionState {
            identifier: value.into(),
            ..self.state.clone()
        };
    }

    /// Validates the identifier and, when it is non-empty, enters `Loading`
    /// and returns the fetch to execute.
    pub fn on_submit(&mut self) -> Option<PendingFetch> {
        if self.state.identifier.is_empty() {
            tracing::debug!("submit rejected: empty identifier");
            self.state = SessionState {
                status: SessionStatus::Error(SessionError::empty_identifier()),
                ..self.state.clone()
            };
            return None;
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        if let Some(superseded) = self.in_flight.replace(generation) {
            tracing::debug!(superseded, generation, "superseding in-flight request");
        }

        self.state = SessionState {
            identifier: self.state.identifier.clone(),
            status: SessionStatus::Loading,
            items: Vec::new(),
        };
        tracing::info!(
            identifier = %self.state.identifier,
            generation,
            limit = self.limit,
            "requesting recommendations"
        );

        Some(PendingFetch {
            generation,
            identifier: self.state.identifier.clone(),
            limit: self.limit,
            source: Arc::clone(&self.source),
        })
    }

    /// Applies a settlement. Returns `false` when it belongs to a superseded
    /// request and was discarded.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if self.in_flight != Some(settlement.generation) {
            tracing::debug!(
                generation = settlement.generation,
                current = ?self.in_flight,
                "discarding stale settlement"
            );
            return false;
        }
        self.in_flight = None;

        let identifier = self.state.identifier.clone();
        self.state = match settlement.outcome {
            Ok(items) => {
                tracing::info!(
                    generation = settlement.generation,
                    count = items.len(),
                    "recommendations loaded"
                );
                SessionState {
                    identifier,
                    status: SessionStatus::Loaded,
                    items,
                }
            }
            Err(err) => {
                let category = err.category();
                tracing::warn!(
                    generation = settlement.generation,
                    category = category.label(),
                    "failed to fetch recommendations: {err}"
                );
                SessionState {
                    identifier,
                    status: SessionStatus::Error(SessionError::fetch_failed(category)),
                    items: Vec::new(),
                }
            }
        };
        true
    }

    /// Runs one submission to completion on the caller's runtime.
    pub async fn submit_and_settle(&mut self) -> &SessionState {
        if let Some(pending) = self.on_submit() {
            let settlement = pending.run().await;
            self.settle(settlement);
        }
        &self.state
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
