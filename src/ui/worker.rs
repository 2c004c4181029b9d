use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::form::PendingSubmission;
use crate::service::SubmissionService;
use crate::ui::events::AppEvent;

#[derive(Debug)]
pub enum UiCommand {
    Submit(PendingSubmission),
    /// The form was reset; abort every request still running.
    CancelAll,
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Runs submissions on the tokio runtime and reports back to the event loop.
///
/// Every submission gets its own task, so a slow request never delays the
/// next one. The dispatcher ends once the UI drops its sender.
pub fn spawn_submit_worker(
    runtime: &Handle,
    service: Arc<dyn SubmissionService>,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::unbounded_channel::<UiCommand>();
    let spawner = runtime.clone();

    runtime.spawn(async move {
        let mut in_flight: Vec<AbortHandle> = Vec::new();
        while let Some(command) = rx.recv().await {
            in_flight.retain(|task| !task.is_finished());
            match command {
                UiCommand::Submit(pending) => {
                    let service = Arc::clone(&service);
                    let events = events.clone();
                    let task = spawner.spawn(async move {
                        let outcome = service.submit(&pending.fields).await;
                        let finished = AppEvent::SubmissionFinished {
                            attempt: pending.attempt,
                            outcome,
                        };
                        if events.send(finished).is_err() {
                            tracing::debug!("Event loop gone, dropping submission outcome");
                        }
                    });
                    in_flight.push(task.abort_handle());
                }
                UiCommand::CancelAll => {
                    tracing::debug!(count = in_flight.len(), "Aborting in-flight submissions");
                    for task in in_flight.drain(..) {
                        task.abort();
                    }
                }
            }
        }
        for task in in_flight {
            task.abort();
        }
    });

    tx
}
