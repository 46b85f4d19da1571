//! Plain-text painter for the page view.

use std::fmt::Write as _;

use client_core::PageView;
use shared::protocol::HealthReport;

pub fn render_text(view: &PageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.header.title);
    let _ = writeln!(out, "{}", view.header.tagline);
    let _ = writeln!(out);

    let identifier = if view.search.identifier.is_empty() {
        view.search.placeholder
    } else {
        view.search.identifier.as_str()
    };
    let _ = writeln!(out, "User ID: {identifier}");

    if let Some(error) = &view.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "error: {}", error.message);
    }

    if let Some(results) = &view.results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", results.heading);
        for (rank, card) in results.cards.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}. {} [{}]", rank + 1, card.title, card.key);
            let _ = writeln!(out, "   {}", card.description);
            let _ = writeln!(out, "   Score: {}", card.score_text);
            if let Some(explanation) = &card.explanation {
                let _ = writeln!(out, "   > {explanation}");
            }
        }
    }

    out
}

pub fn render_health(report: &HealthReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "status: {}", report.status);
    if let Some(timestamp) = &report.timestamp {
        let _ = writeln!(out, "timestamp: {timestamp}");
    }
    for (service, state) in &report.services {
        let _ = writeln!(out, "  {service}: {state}");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use client_core::view::{
        CardView, ErrorBannerView, HeaderView, ResultsView, SearchBarView, SubmitButtonView,
    };
    use shared::domain::ItemId;

    use super::*;

    fn page(identifier: &str) -> PageView {
        PageView {
            header: HeaderView {
                title: "AI Recommendation System",
                tagline: "Powered by Vector Similarity Search & RAG",
            },
            search: SearchBarView {
                identifier: identifier.to_string(),
                placeholder: "Enter User ID (e.g., user_123)",
                submit: SubmitButtonView {
                    label: "Get Recommendations",
                    enabled: true,
                },
            },
            error: None,
            results: None,
        }
    }

    #[test]
    fn renders_cards_in_order_with_optional_explanation() {
        let mut view = page("user_123");
        view.results = Some(ResultsView {
            heading: "Recommended for You",
            cards: vec![
                CardView {
                    key: ItemId::from("a"),
                    title: "First".into(),
                    description: "one".into(),
                    score_text: "0.86".into(),
                    explanation: Some("Based on your viewing history".into()),
                },
                CardView {
                    key: ItemId::from("b"),
                    title: "Second".into(),
                    description: "two".into(),
                    score_text: "0.50".into(),
                    explanation: None,
                },
            ],
        });

        let text = render_text(&view);
        assert!(text.contains("User ID: user_123"));
        assert!(text.contains("1. First [a]\n   one\n   Score: 0.86\n   > Based on your viewing history\n"));
        assert!(text.contains("2. Second [b]\n   two\n   Score: 0.50\n"));
        assert!(!text.contains("error:"));
    }

    #[test]
    fn renders_error_region_without_results() {
        let mut view = page("");
        view.error = Some(ErrorBannerView {
            message: "Please enter a user ID".into(),
        });

        let text = render_text(&view);
        assert!(text.contains("User ID: Enter User ID (e.g., user_123)"));
        assert!(text.contains("error: Please enter a user ID"));
        assert!(!text.contains("Recommended for You"));
    }

    #[test]
    fn renders_health_services_sorted() {
        let report = HealthReport {
            status: "healthy".into(),
            timestamp: None,
            services: BTreeMap::from([
                ("vector_search".to_string(), "operational".to_string()),
                ("database".to_string(), "operational".to_string()),
            ]),
        };
        assert_eq!(
            render_health(&report),
            "status: healthy\n  database: operational\n  vector_search: operational\n"
        );
    }
}
