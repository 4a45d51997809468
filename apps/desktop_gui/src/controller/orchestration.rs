//! Queueing of UI actions onto the submission worker.

use crossbeam_channel::{Sender, TrySendError};
use tracing::debug;

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    QueueFull,
    WorkerGone,
}

impl DispatchError {
    pub fn message(self) -> &'static str {
        match self {
            DispatchError::QueueFull => "Too many pending submissions; please retry in a moment.",
            DispatchError::WorkerGone => {
                "The submission worker is unavailable; please restart the application."
            }
        }
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact(_) => "submit_contact",
        BackendCommand::SubmitNewsletter(_) => "submit_newsletter",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            debug!(command = cmd_name, "queued ui->worker command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
        Err(TrySendError::Disconnected(_)) => Err(DispatchError::WorkerGone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::protocol::NewsletterSubscription;

    fn subscribe_cmd() -> BackendCommand {
        BackendCommand::SubmitNewsletter(NewsletterSubscription {
            email: "user@example.com".to_string(),
        })
    }

    #[test]
    fn full_queue_is_reported_without_blocking() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, subscribe_cmd()).expect("first fits");
        let err = dispatch_backend_command(&tx, subscribe_cmd()).expect_err("queue full");
        assert_eq!(err, DispatchError::QueueFull);
    }

    #[test]
    fn dead_worker_is_reported_as_gone() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, subscribe_cmd()).expect_err("disconnected");
        assert_eq!(err, DispatchError::WorkerGone);
    }
}
