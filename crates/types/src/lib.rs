//! optsync-types: Shared data types for optsync.
//!
//! This crate contains the vocabulary shared by every layer:
//! question identifiers and the ordered answer-option sets the
//! lookup endpoint returns.

mod options;
mod question;

pub use options::{AnswerOption, OptionSet};
pub use question::QuestionId;
