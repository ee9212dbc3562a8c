//! Change-event binding
//!
//! Wires a sync engine to a source element: one refresh at load time if the
//! source already holds a value (edit forms arrive pre-filled), then one
//! refresh per change event until the host closes the channel.

use crate::element::{OptionsTarget, SourceElement};
use crate::provider::LookupError;
use crate::sync::{OptionSync, SyncOutcome, Ticket};
use log::{debug, warn};
use optsync_types::QuestionId;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Host-visible outcome of one selection change.
///
/// Every applied update and every failure reaches the host, so it can show
/// a loading or error state instead of silently keeping old entries.
#[derive(Debug)]
pub enum SyncEvent {
    /// The target now shows `count` options for `question`.
    Applied { question: QuestionId, count: usize },
    /// The lookup for `question` failed; the target keeps its previous
    /// entries.
    Failed {
        question: QuestionId,
        error: LookupError,
    },
}

/// A running binding: the driving task plus the outbound event stream.
pub struct SyncBinding {
    /// Task servicing the change stream. Completes when the stream closes.
    pub task: JoinHandle<()>,
    /// Applied/Failed notifications, in completion order.
    pub events: mpsc::UnboundedReceiver<SyncEvent>,
}

/// Binds an [`OptionSync`] engine to a source element's change stream.
pub struct SyncController;

impl SyncController {
    /// Attach the engine to `source`.
    ///
    /// Reads the source's current value once for the initial sync, then
    /// services `changes`. Each change spawns its own lookup so rapid
    /// reselection can overlap on the network, but its ticket is taken in
    /// the receive loop: ticket order must match selection order, and task
    /// scheduling must not be allowed to invert it.
    pub fn attach<T>(
        sync: Arc<OptionSync<T>>,
        source: &dyn SourceElement,
        mut changes: mpsc::UnboundedReceiver<Option<QuestionId>>,
    ) -> SyncBinding
    where
        T: OptionsTarget + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let initial = source.value();

        let task = tokio::spawn(async move {
            if let Some(question) = initial {
                let ticket = sync.issue_ticket();
                run_lookup(&sync, question, ticket, &events_tx).await;
            }

            while let Some(change) = changes.recv().await {
                // Blank row: no lookup, no ticket, entries stay as they are.
                let Some(question) = change else {
                    debug!("blank selection, leaving dependent entries untouched");
                    continue;
                };

                let ticket = sync.issue_ticket();
                let sync = sync.clone();
                let events_tx = events_tx.clone();
                tokio::spawn(async move {
                    run_lookup(&sync, question, ticket, &events_tx).await;
                });
            }
            debug!("change stream closed, sync binding ends");
        });

        SyncBinding {
            task,
            events: events_rx,
        }
    }
}

async fn run_lookup<T: OptionsTarget>(
    sync: &OptionSync<T>,
    question: QuestionId,
    ticket: Ticket,
    events: &mpsc::UnboundedSender<SyncEvent>,
) {
    match sync.refresh_with_ticket(&question, ticket).await {
        Ok(SyncOutcome::Applied(count)) => {
            debug!("applied {} options for question {}", count, question);
            let _ = events.send(SyncEvent::Applied { question, count });
        }
        Ok(SyncOutcome::Stale) | Ok(SyncOutcome::Skipped) => {}
        Err(error) => {
            warn!("options lookup for question {} failed: {}", question, error);
            let _ = events.send(SyncEvent::Failed { question, error });
        }
    }
}
