//! Generation-guarded sync engine
//!
//! A naive binding fires one lookup per change event and lets whichever
//! response resolves last win, even when it belongs to an older selection.
//! The engine prevents that: every non-empty refresh takes a monotonically
//! increasing ticket, and a response is applied only while its ticket is
//! still the newest one issued.

use crate::element::OptionsTarget;
use crate::provider::{LookupError, OptionsProvider};
use log::debug;
use optsync_types::QuestionId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Ordering token for one lookup.
///
/// A response is applied only while its ticket is still the newest one
/// issued, so tickets must be taken in the order selections happen: in the
/// event loop that observes them, not inside whatever task serves the
/// lookup, where scheduling could reorder the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// How a single refresh ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Empty selection: no lookup was issued, the target was left untouched.
    Skipped,
    /// The fetched options were installed; carries the entry count.
    Applied(usize),
    /// A newer refresh was issued while this one was in flight; its result
    /// (success or failure) was discarded.
    Stale,
}

/// Keeps a dependent option list synchronized with the selected question.
///
/// Holds the injected lookup backend and target handle. `refresh` may be
/// called concurrently; overlapping calls race on the network, but only the
/// newest one is allowed to mutate the target.
pub struct OptionSync<T: OptionsTarget> {
    provider: Arc<dyn OptionsProvider>,
    target: Arc<Mutex<T>>,
    generation: AtomicU64,
}

impl<T: OptionsTarget> OptionSync<T> {
    pub fn new(provider: Arc<dyn OptionsProvider>, target: T) -> Self {
        Self {
            provider,
            target: Arc::new(Mutex::new(target)),
            generation: AtomicU64::new(0),
        }
    }

    /// Shared handle to the target, for hosts that read it back.
    pub fn target(&self) -> Arc<Mutex<T>> {
        self.target.clone()
    }

    /// Take the next ticket.
    ///
    /// Callers that serve lookups on separate tasks must call this before
    /// handing off, so tickets carry selection order rather than task
    /// scheduling order.
    pub fn issue_ticket(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Synchronize the target with `question`.
    ///
    /// `None` is the blank selector row: the lookup is skipped entirely and
    /// the target keeps its previous entries. A blank selection takes no
    /// ticket, so it also cannot invalidate lookups already in flight.
    ///
    /// The ticket is taken at the first poll; callers that race several
    /// refreshes from different tasks should take tickets themselves via
    /// [`issue_ticket`](Self::issue_ticket) and use
    /// [`refresh_with_ticket`](Self::refresh_with_ticket).
    pub async fn refresh(
        &self,
        question: Option<&QuestionId>,
    ) -> Result<SyncOutcome, LookupError> {
        let Some(question) = question else {
            debug!("no question selected, skipping lookup");
            return Ok(SyncOutcome::Skipped);
        };

        let ticket = self.issue_ticket();
        self.refresh_with_ticket(question, ticket).await
    }

    /// Complete a lookup against a previously issued ticket.
    ///
    /// Errors propagate only when the failed lookup is still the newest one;
    /// a stale failure is as irrelevant as a stale success. Never returns
    /// `Skipped`.
    pub async fn refresh_with_ticket(
        &self,
        question: &QuestionId,
        ticket: Ticket,
    ) -> Result<SyncOutcome, LookupError> {
        let result = self.provider.fetch_options(question).await;

        // The target lock makes the ticket check and the apply atomic with
        // respect to other refresh calls.
        let mut target = self.target.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            debug!(
                "discarding stale response for question {} (ticket {})",
                question, ticket.0
            );
            return Ok(SyncOutcome::Stale);
        }

        let options = result?;
        target.replace_options(&options);
        Ok(SyncOutcome::Applied(options.len()))
    }
}
