//! Command orchestration helpers from UI actions to backend command queue.

use client_core::RequestController;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the worker. A fetch that cannot be queued is
/// abandoned through the controller so the session never stays `Loading`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    controller: &mut RequestController,
    status: &mut String,
) {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");

    let (rejected, reason) = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            return;
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            (cmd, "UI command queue is full; please retry")
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            (
                cmd,
                "Backend worker disconnected (possible startup/runtime failure)",
            )
        }
    };

    *status = reason.to_string();
    if let BackendCommand::Fetch(pending) = rejected {
        controller.settle(pending.abandon(reason));
    }
}
