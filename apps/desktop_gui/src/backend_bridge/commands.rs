//! Backend commands queued from UI to backend worker.

use client_core::PendingFetch;

pub enum BackendCommand {
    Fetch(PendingFetch),
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch_recommendations",
            Self::CheckHealth => "check_health",
        }
    }
}
