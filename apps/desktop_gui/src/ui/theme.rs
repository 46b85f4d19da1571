use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub accent: egui::Color32,
    pub score: egui::Color32,
    pub error_fill: egui::Color32,
    pub error_text: egui::Color32,
    pub explanation_fill: egui::Color32,
}

pub const PALETTE: Palette = Palette {
    background: egui::Color32::from_rgb(40, 44, 52),
    card_fill: egui::Color32::from_rgb(52, 57, 68),
    card_stroke: egui::Color32::from_rgb(72, 78, 92),
    accent: egui::Color32::from_rgb(97, 218, 251),
    score: egui::Color32::from_rgb(76, 175, 80),
    error_fill: egui::Color32::from_rgb(92, 36, 40),
    error_text: egui::Color32::from_rgb(255, 138, 128),
    explanation_fill: egui::Color32::from_rgb(45, 62, 80),
};

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PALETTE.background;
    visuals.window_fill = PALETTE.background;
    visuals.selection.bg_fill = PALETTE.accent.gamma_multiply(0.6);
    visuals.hyperlink_color = PALETTE.accent;
    visuals
}
