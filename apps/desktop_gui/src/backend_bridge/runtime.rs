//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientConfig, HttpRecommendationSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Spawns the worker thread. It owns a tokio runtime and runs every command
/// as its own task, so a slow fetch never blocks the queue.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    config: ClientConfig,
    repaint: RepaintHook,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                emit(
                    &ui_tx,
                    &repaint,
                    UiEvent::WorkerFailed(format!("backend worker startup failure: {err}")),
                );
                return;
            }
        };

        let health_source = Arc::new(HttpRecommendationSource::new(config));
        emit(&ui_tx, &repaint, UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend worker received command");
            let ui_tx = ui_tx.clone();
            let repaint = Arc::clone(&repaint);
            match cmd {
                BackendCommand::Fetch(pending) => {
                    runtime.spawn(async move {
                        let settlement = pending.run().await;
                        emit(&ui_tx, &repaint, UiEvent::Settled(settlement));
                    });
                }
                BackendCommand::CheckHealth => {
                    let source = Arc::clone(&health_source);
                    runtime.spawn(async move {
                        let report = source.health().await.map_err(|err| err.to_string());
                        emit(&ui_tx, &repaint, UiEvent::Health(report));
                    });
                }
            }
        }
        tracing::debug!("command queue closed; backend worker exiting");
    })
}

fn emit(ui_tx: &Sender<UiEvent>, repaint: &RepaintHook, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::debug!("ui event receiver dropped");
        return;
    }
    repaint();
}
