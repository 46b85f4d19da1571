use std::time::Duration;

use client_core::{render, ClientConfig, Intent, RequestController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{describe_health, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{panels, theme};

const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RecommendationApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: RequestController,
    api_url: String,
    status: String,
    visuals_applied: bool,
}

impl RecommendationApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        controller: RequestController,
        config: &ClientConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller,
            api_url: config.base_url.clone(),
            status: "Backend worker starting...".to_string(),
            visuals_applied: false,
        };
        app.queue(BackendCommand::CheckHealth);
        app
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Settled(settlement) => {
                    self.controller.settle(settlement);
                }
                UiEvent::Health(result) => {
                    self.status = describe_health(&result);
                }
                UiEvent::WorkerFailed(message) => {
                    tracing::error!("{message}");
                    self.status = message;
                }
            }
        }
    }

    pub fn apply_intents(&mut self, intents: Vec<Intent>) {
        for intent in intents {
            if let Some(pending) = self.controller.handle(intent) {
                self.queue(BackendCommand::Fetch(pending));
            }
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.controller, &mut self.status);
    }

    fn show_status_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_footer").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small(format!("Backend: {}", self.api_url));
                ui.separator();
                ui.small(egui::RichText::new(self.status()).weak());
            });
        });
    }
}

impl eframe::App for RecommendationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(theme::visuals());
            self.visuals_applied = true;
        }

        self.process_ui_events();

        let view = render(self.controller().state());
        self.show_status_footer(ctx);
        let intents = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_space(24.0);
                panels::show_page(ui, &view)
            })
            .inner;
        self.apply_intents(intents);

        if self.controller().state().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_core::{
        FetchError, RecommendationSource, SessionStatus, EMPTY_IDENTIFIER_MESSAGE,
    };
    use crossbeam_channel::{bounded, unbounded};
    use shared::{domain::ItemId, protocol::RecommendationItem};

    use super::*;

    struct OneItem;

    #[async_trait]
    impl RecommendationSource for OneItem {
        async fn fetch(
            &self,
            identifier: &str,
            _limit: usize,
        ) -> Result<Vec<RecommendationItem>, FetchError> {
            Ok(vec![RecommendationItem {
                item_id: ItemId::from(identifier),
                title: "T".into(),
                description: "D".into(),
                score: 0.856,
                explanation: Some("E".into()),
            }])
        }
    }

    fn app_with_queue() -> (RecommendationApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = unbounded();
        let controller = RequestController::new(Arc::new(OneItem));
        let app = RecommendationApp::new(cmd_tx, ui_rx, controller, &ClientConfig::default());
        (app, cmd_rx, ui_tx)
    }

    #[test]
    fn startup_queues_health_check() {
        let (_app, cmd_rx, _ui_tx) = app_with_queue();
        assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::CheckHealth)));
    }

    #[test]
    fn empty_submit_never_reaches_worker() {
        let (mut app, cmd_rx, _ui_tx) = app_with_queue();
        let _ = cmd_rx.try_recv();

        app.apply_intents(vec![Intent::Submit]);

        assert_eq!(
            app.controller().state().error_message(),
            Some(EMPTY_IDENTIFIER_MESSAGE)
        );
        assert!(cmd_rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn settlement_event_completes_submission() {
        let (mut app, cmd_rx, ui_tx) = app_with_queue();
        let _ = cmd_rx.try_recv();

        app.apply_intents(vec![
            Intent::IdentifierChanged("user_123".into()),
            Intent::Submit,
        ]);
        assert!(app.controller().state().is_loading());

        let pending = match cmd_rx.try_recv() {
            Ok(BackendCommand::Fetch(pending)) => pending,
            _ => panic!("expected queued fetch"),
        };
        ui_tx
            .send(UiEvent::Settled(pending.run().await))
            .expect("send settlement");
        ui_tx
            .send(UiEvent::Health(Err("connection refused".into())))
            .expect("send health");
        app.process_ui_events();

        let state = app.controller().state();
        assert_eq!(state.status(), &SessionStatus::Loaded);
        let cards = render(state).results.expect("results").cards;
        assert_eq!(cards[0].score_text, "0.86");
        assert_eq!(app.status(), "Backend unreachable: connection refused");
    }
}
