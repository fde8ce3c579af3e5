//! HTTP client construction shared by the Jisho and AnkiConnect clients.

use std::time::Duration;

/// Builds the `reqwest` client used for every request.
///
/// `timeout` comes from [`HttpConfig::timeout`](crate::config::HttpConfig::timeout),
/// which rejects values `reqwest` could not use.
pub fn create_http_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}
