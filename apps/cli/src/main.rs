use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_client_config, render, ClientConfig, HttpRecommendationSource, RequestController,
    SessionStatus,
};

mod text_view;

#[derive(Parser, Debug)]
#[command(name = "recommend", about = "Query the recommendation backend")]
struct Cli {
    /// Backend origin; overrides recommender.toml and RECOMMENDER_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch recommendations for a user and print them.
    Fetch {
        user_id: String,
        /// Print the received items as JSON instead of the rendered page.
        #[arg(long)]
        json: bool,
    },
    /// Print the backend health report.
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(api_url) => ClientConfig::with_base_url(api_url),
        None => load_client_config(),
    };
    tracing::debug!(api_url = %config.base_url, "resolved backend origin");

    match cli.command {
        Command::Fetch { user_id, json } => {
            let mut controller = RequestController::from_config(&config);
            controller.on_identifier_change(user_id);
            let state = controller.submit_and_settle().await;

            if json && state.status() == &SessionStatus::Loaded {
                println!("{}", serde_json::to_string_pretty(state.items())?);
            } else {
                print!("{}", text_view::render_text(&render(state)));
            }

            if matches!(state.status(), SessionStatus::Error(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Health => {
            let source = HttpRecommendationSource::new(config);
            let report = source.health().await.with_context(|| {
                format!("health check against {} failed", source.config().base_url)
            })?;
            print!("{}", text_view::render_health(&report));
            if !report.is_healthy() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
