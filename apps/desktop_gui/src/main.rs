use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_client_config, ClientConfig, RequestController};
use crossbeam_channel::{bounded, unbounded};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::RecommendationApp;

const APP_TITLE: &str = "AI Recommendation System";
const COMMAND_QUEUE_CAPACITY: usize = 64;

#[derive(Parser, Debug)]
struct Args {
    /// Backend origin; overrides recommender.toml and RECOMMENDER_API_URL.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let config = match args.api_url {
        Some(api_url) => ClientConfig::with_base_url(api_url),
        None => load_client_config(),
    };
    tracing::info!(api_url = %config.base_url, "starting recommendation gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = unbounded::<UiEvent>();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(
                cmd_rx,
                ui_tx,
                config.clone(),
                Arc::new(move || egui_ctx.request_repaint()),
            );
            let controller = RequestController::from_config(&config);
            Ok(Box::new(RecommendationApp::new(
                cmd_tx, ui_rx, controller, &config,
            )))
        }),
    )
}
