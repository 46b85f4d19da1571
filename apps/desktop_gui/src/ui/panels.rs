//! Painters for each region of [`PageView`]. They only read the view and
//! report user input as intents.

use client_core::{
    view::{
        intent_for_enter, CardView, ErrorBannerView, HeaderView, ResultsView, SearchBarView,
    },
    Intent, PageView,
};
use eframe::egui;

use crate::ui::theme::PALETTE;

const CARD_WIDTH: f32 = 300.0;

pub fn show_page(ui: &mut egui::Ui, view: &PageView) -> Vec<Intent> {
    let mut intents = Vec::new();

    ui.vertical_centered(|ui| {
        show_header(ui, &view.header);
        ui.add_space(16.0);
        show_search_bar(ui, view, &view.search, &mut intents);
    });

    if let Some(error) = &view.error {
        ui.add_space(12.0);
        show_error_banner(ui, error);
    }

    if let Some(results) = &view.results {
        ui.add_space(16.0);
        show_results(ui, results);
    }

    intents
}

fn show_header(ui: &mut egui::Ui, header: &HeaderView) {
    ui.heading(egui::RichText::new(header.title).size(28.0).strong());
    ui.label(egui::RichText::new(header.tagline).weak());
}

fn show_search_bar(
    ui: &mut egui::Ui,
    view: &PageView,
    search: &SearchBarView,
    intents: &mut Vec<Intent>,
) {
    ui.horizontal(|ui| {
        let mut identifier_buf = search.identifier.clone();
        let input = ui.add(
            egui::TextEdit::singleline(&mut identifier_buf)
                .hint_text(search.placeholder)
                .desired_width(280.0),
        );
        if input.changed() {
            intents.push(Intent::IdentifierChanged(identifier_buf));
        }

        // A single-line edit gives up focus when Enter is pressed.
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            intents.extend(intent_for_enter(view));
        }

        let button = egui::Button::new(egui::RichText::new(search.submit.label).strong());
        if ui.add_enabled(search.submit.enabled, button).clicked() {
            intents.push(Intent::Submit);
        }
    });
}

fn show_error_banner(ui: &mut egui::Ui, error: &ErrorBannerView) {
    egui::Frame::new()
        .fill(PALETTE.error_fill)
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&error.message).color(PALETTE.error_text));
        });
}

fn show_results(ui: &mut egui::Ui, results: &ResultsView) {
    ui.heading(results.heading);
    ui.add_space(8.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &results.cards {
                    ui.push_id(&card.key, |ui| show_card(ui, card));
                }
            });
        });
}

fn show_card(ui: &mut egui::Ui, card: &CardView) {
    egui::Frame::new()
        .fill(PALETTE.card_fill)
        .stroke(egui::Stroke::new(1.0, PALETTE.card_stroke))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&card.title).size(18.0).strong());
                ui.label(&card.description);
                ui.label(
                    egui::RichText::new(format!("Score: {}", card.score_text))
                        .color(PALETTE.score)
                        .strong(),
                );
                if let Some(explanation) = &card.explanation {
                    egui::Frame::new()
                        .fill(PALETTE.explanation_fill)
                        .corner_radius(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(explanation).italics());
                        });
                }
            });
        });
}
