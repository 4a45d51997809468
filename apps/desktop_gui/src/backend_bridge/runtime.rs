//! Submission worker: a dedicated thread with a tokio runtime that turns
//! queued commands into HTTP requests and reports back as UI events. The
//! worker processes one command at a time; the per-form in-flight flags on
//! the UI side keep duplicate submissions from ever being queued.

use std::{thread, time::Duration};

use client_core::SubmissionClient;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{
    UiError, UiEvent, CONTACT_FAILURE_FALLBACK, NEWSLETTER_FAILURE_FALLBACK,
};

pub fn spawn_submission_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    base_url: Url,
    timeout: Duration,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(error = %err, "failed to build submission worker runtime");
                let _ = ui_tx.send(UiEvent::WorkerUnavailable(format!(
                    "The submission worker failed to start: {err}"
                )));
                return;
            }
        };

        let client = match SubmissionClient::with_timeout(&base_url, timeout) {
            Ok(client) => client,
            Err(err) => {
                error!(error = %err, "failed to build submission client");
                let _ = ui_tx.send(UiEvent::WorkerUnavailable(format!(
                    "The submission worker failed to start: {err}"
                )));
                return;
            }
        };

        info!(%base_url, "submission worker ready");
        while let Ok(command) = cmd_rx.recv() {
            let event = match command {
                BackendCommand::SubmitContact(submission) => {
                    match runtime.block_on(client.submit_contact(&submission)) {
                        Ok(()) => UiEvent::ContactAccepted,
                        Err(err) => UiEvent::ContactFailed(UiError::from_submission(
                            &err,
                            CONTACT_FAILURE_FALLBACK,
                        )),
                    }
                }
                BackendCommand::SubmitNewsletter(subscription) => {
                    match runtime.block_on(client.submit_newsletter(&subscription)) {
                        Ok(()) => UiEvent::NewsletterAccepted,
                        Err(err) => UiEvent::NewsletterFailed(UiError::from_submission(
                            &err,
                            NEWSLETTER_FAILURE_FALLBACK,
                        )),
                    }
                }
            };
            if ui_tx.send(event).is_err() {
                // UI gone; nothing left to report to.
                break;
            }
        }
    });
}
