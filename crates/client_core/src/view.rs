//! Pure projection from [`SessionState`] to a technology-agnostic view tree.
//!
//! Painters (egui, terminal) consume [`PageView`] and report user input back
//! as [`Intent`]s; nothing here holds state of its own.

use shared::{domain::ItemId, protocol::RecommendationItem};

use crate::session::{SessionState, SessionStatus};

pub const PAGE_TITLE: &str = "AI Recommendation System";
pub const PAGE_TAGLINE: &str = "Powered by Vector Similarity Search & RAG";
pub const INPUT_PLACEHOLDER: &str = "Enter User ID (e.g., user_123)";
pub const SUBMIT_LABEL: &str = "Get Recommendations";
pub const SUBMIT_BUSY_LABEL: &str = "Loading...";
pub const RESULTS_HEADING: &str = "Recommended for You";

/// User input as reported by a painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    IdentifierChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderView,
    pub search: SearchBarView,
    pub error: Option<ErrorBannerView>,
    pub results: Option<ResultsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarView {
    pub identifier: String,
    pub placeholder: &'static str,
    pub submit: SubmitButtonView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBannerView {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub heading: &'static str,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub key: ItemId,
    pub title: String,
    pub description: String,
    pub score_text: String,
    pub explanation: Option<String>,
}

pub fn render(state: &SessionState) -> PageView {
    let busy = state.is_loading();

    let error = match state.status() {
        SessionStatus::Error(err) => Some(ErrorBannerView {
            message: err.message().to_string(),
        }),
        _ => None,
    };

    let results = if state.items().is_empty() {
        None
    } else {
        Some(ResultsView {
            heading: RESULTS_HEADING,
            cards: state.items().iter().map(render_card).collect(),
        })
    };

    PageView {
        header: HeaderView {
            title: PAGE_TITLE,
            tagline: PAGE_TAGLINE,
        },
        search: SearchBarView {
            identifier: state.identifier().to_string(),
            placeholder: INPUT_PLACEHOLDER,
            submit: SubmitButtonView {
                label: if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
                enabled: !busy,
            },
        },
        error,
        results,
    }
}

fn render_card(item: &RecommendationItem) -> CardView {
    CardView {
        key: item.item_id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        score_text: format_score(item.score),
        // An empty explanation renders the same as a missing one.
        explanation: item
            .explanation
            .as_ref()
            .filter(|text| !text.is_empty())
            .cloned(),
    }
}

/// Two decimals, rounded on the exact binary value with ties going away from
/// zero (`0.125` -> `0.13`).
pub fn format_score(score: f64) -> String {
    // The only doubles sitting exactly halfway between two hundredths are odd
    // multiples of 1/8, where `{:.2}` would round to even instead.
    let eighths = score * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() % 2.0 == 1.0 {
        let hundredths = (score.abs() * 100.0 + 0.5) as u64;
        let sign = if score < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{score:.2}")
}

/// Enter on the focused input behaves like the submit trigger, including
/// being inert while the trigger is disabled.
pub fn intent_for_enter(view: &PageView) -> Option<Intent> {
    view.search.submit.enabled.then_some(Intent::Submit)
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
