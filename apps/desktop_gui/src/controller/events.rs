//! Events flowing from the backend worker back to the UI thread.

use client_core::Settlement;
use shared::protocol::HealthReport;

pub enum UiEvent {
    Info(String),
    Settled(Settlement),
    Health(Result<HealthReport, String>),
    WorkerFailed(String),
}

/// One-line summary for the status footer.
pub fn describe_health(result: &Result<HealthReport, String>) -> String {
    match result {
        Ok(report) if report.is_healthy() => {
            let degraded: Vec<&str> = report
                .services
                .iter()
                .filter(|(_, state)| !state.eq_ignore_ascii_case("operational"))
                .map(|(name, _)| name.as_str())
                .collect();
            if degraded.is_empty() {
                "Backend healthy".to_string()
            } else {
                format!("Backend healthy; degraded: {}", degraded.join(", "))
            }
        }
        Ok(report) => format!("Backend reports status '{}'", report.status),
        Err(err) => format!("Backend unreachable: {err}"),
    }
}
