//! optsync-core: Core traits and sync engine for optsync.
//!
//! This crate contains the seams the widget is built around
//! (OptionsProvider, SourceElement, OptionsTarget), the lookup error
//! taxonomy, the generation-guarded sync engine, and the change-event
//! binding that drives it.

mod controller;
mod element;
mod provider;
mod sync;

pub use controller::{SyncBinding, SyncController, SyncEvent};
pub use element::{BoxedTarget, OptionsTarget, SourceElement};
pub use provider::{BoxedProvider, LookupError, OptionsProvider};
pub use sync::{OptionSync, SyncOutcome, Ticket};

// Re-export types used in trait signatures for convenience
pub use optsync_types::{AnswerOption, OptionSet, QuestionId};
