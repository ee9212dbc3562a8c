//! Lookup backends for the question-options endpoint

mod fixed;
mod http;

pub use fixed::FixedOptionsProvider;
pub use http::{client_with_timeout, HttpOptionsProvider};
