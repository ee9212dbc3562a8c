//! HTTP-backed options lookup
//!
//! Talks to the admin lookup endpoint:
//! `GET {base}/get-question-options/{id}/`, answering a flat JSON object of
//! option key to label. Authentication is the caller's business; a client
//! carrying ambient session cookies can be injected via `with_client`.

use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use optsync_core::{LookupError, OptionsProvider};
use optsync_types::{OptionSet, QuestionId};
use reqwest::{Client, Url};

/// Fetches answer options over HTTP.
pub struct HttpOptionsProvider {
    client: Client,
    base_url: Url,
}

impl HttpOptionsProvider {
    /// Create a provider with a default client.
    ///
    /// `base_url` is the path prefix in front of `get-question-options`,
    /// e.g. `http://127.0.0.1:8000/api/recrutement/admin`.
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a provider with a caller-supplied client, e.g. one configured
    /// with a request timeout or a cookie store holding the admin session.
    pub fn with_client(client: Client, base_url: Url) -> Result<Self> {
        ensure!(
            !base_url.cannot_be_a_base(),
            "base URL {} cannot carry path segments",
            base_url
        );
        Ok(Self { client, base_url })
    }

    /// Build the lookup URL for one question.
    ///
    /// Path segments are appended rather than concatenated so the id is
    /// percent-encoded; the trailing empty segment yields the trailing
    /// slash the endpoint routes on.
    fn options_url(&self, question: &QuestionId) -> Url {
        let mut url = self.base_url.clone();
        {
            // Cannot fail: the constructor rejected cannot-be-a-base URLs.
            let mut segments = url.path_segments_mut().unwrap_or_else(|_| unreachable!());
            segments.pop_if_empty();
            segments.push("get-question-options");
            segments.push(question.as_str());
            segments.push("");
        }
        url
    }
}

#[async_trait]
impl OptionsProvider for HttpOptionsProvider {
    async fn fetch_options(&self, question: &QuestionId) -> Result<OptionSet, LookupError> {
        let url = self.options_url(question);
        log::debug!("fetching options from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(Box::new(e)))?;
        serde_json::from_slice(&body).map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

/// Build a client that applies `timeout_ms` to every lookup.
pub fn client_with_timeout(timeout_ms: u64) -> Result<Client> {
    Client::builder()
        .timeout(std::time::Duration::from_millis(timeout_ms))
        .build()
        .context("failed to build HTTP client")
}
