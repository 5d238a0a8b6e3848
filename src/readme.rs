//! Best-effort retrieval of README markdown.

use std::time::Duration;

use tracing::warn;
use ureq::Agent;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 10;

/// Fetches raw markdown documents over HTTP.
///
/// Fetching is best effort: every failure (transport error, non-success
/// status, unreadable body) is logged and collapsed to `None` so page
/// rendering proceeds with an empty body. Nothing is cached or retried;
/// each request fetches fresh.
pub struct ReadmeFetcher {
    agent: Agent,
}

impl ReadmeFetcher {
    /// Creates fetcher with a pooled HTTP agent.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }

    /// Fetches the document at `url` as text.
    ///
    /// # Arguments
    ///
    /// * `url`: Document URL from the package configuration
    ///
    /// # Returns
    ///
    /// Document body, or None when the fetch fails in any way
    pub fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "README fetch failed");
                return None;
            }
        };

        let status = response.status().as_u16();
        if status >= 400 {
            warn!(url, status, "README fetch returned error status");
            return None;
        }

        match response.into_body().read_to_string() {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url, error = %e, "README body could not be read");
                None
            }
        }
    }
}

impl Default for ReadmeFetcher {
    fn default() -> Self {
        Self::new()
    }
}
