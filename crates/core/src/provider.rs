//! Options lookup trait and error taxonomy

use async_trait::async_trait;
use optsync_types::{OptionSet, QuestionId};
use thiserror::Error;

/// Failure of a single options lookup.
///
/// Failures are explicit so the host can show an error state instead of
/// silently keeping stale entries in the selector.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport-level failure: connection refused, timeout, broken stream.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The endpoint answered with a non-success status; unknown question
    /// ids come back as 404 with an empty object.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body was not a flat string-to-string JSON object.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Backend that resolves a question to its answer options.
///
/// Implementations cover the real HTTP endpoint as well as in-memory tables
/// for tests and offline use. One call per lookup; the engine layers request
/// ordering on top, so implementations stay stateless.
#[async_trait]
pub trait OptionsProvider: Send + Sync {
    /// Fetch the answer options for `question`.
    async fn fetch_options(&self, question: &QuestionId) -> Result<OptionSet, LookupError>;
}

/// Type-erased provider for dynamic dispatch
pub type BoxedProvider = std::sync::Arc<dyn OptionsProvider>;
