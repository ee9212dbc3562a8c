//! optsync: dependent answer-option synchronization for quiz admin forms.
//!
//! When an administrator picks a question in a form, the dependent
//! "selected option" control must show that question's answer options.
//! This library provides:
//! - The sync engine and its seams (re-exported from `optsync-core`)
//! - Lookup backends: the real HTTP endpoint and an in-memory table
//! - In-memory select-element handles for hosts, demos and tests
//! - On-disk configuration for the demo binary

pub mod config;
pub mod elements;
pub mod providers;

// Re-export commonly used types
pub use optsync_core::{
    LookupError, OptionSync, OptionsProvider, OptionsTarget, SourceElement, SyncBinding,
    SyncController, SyncEvent, SyncOutcome, Ticket,
};
pub use optsync_types::{AnswerOption, OptionSet, QuestionId};
