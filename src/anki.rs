//! AnkiConnect client.
//!
//! Every action is a POST of `{"action", "version": 6, "params"}` to the
//! add-on's address. [`AnkiClient::send_request`] returns the raw decoded
//! response; [`AnkiClient::invoke`] and the typed wrappers unpack the
//! `{"result", "error"}` envelope.

use crate::config::{AnkiConfig, Config, HttpConfig};
use crate::error::AnkiError;
use crate::http::create_http_client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

/// AnkiConnect API version spoken by this client.
pub const API_VERSION: u32 = 6;

#[derive(Serialize)]
struct AnkiRequest<'a> {
    action: &'a str,
    version: u32,
    params: Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T, AnkiError> {
        if let Some(error) = self.error {
            return Err(AnkiError::Action(error));
        }

        self.result
            .ok_or_else(|| AnkiError::Action("AnkiConnect returned null result".to_string()))
    }
}

/// A note to be added through `addNote`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub deck_name: String,
    pub model_name: String,
    /// Field name to field content.
    pub fields: BTreeMap<String, String>,
    pub tags: Vec<String>,
}

/// Client for the AnkiConnect add-on.
#[derive(Clone)]
pub struct AnkiClient {
    client: reqwest::Client,
    address: Url,
}

impl AnkiClient {
    /// Creates a client talking to `anki.address`.
    pub fn new(anki: &AnkiConfig, http: &HttpConfig) -> Result<Self, AnkiError> {
        let address = Url::parse(&anki.address)
            .map_err(|e| AnkiError::InvalidUrl(format!("{}: {}", anki.address, e)))?;

        let timeout = http.timeout()?;

        Ok(Self {
            client: create_http_client(&http.user_agent, timeout)?,
            address,
        })
    }

    /// Creates a client from the full configuration.
    pub fn from_config(config: &Config) -> Result<Self, AnkiError> {
        Self::new(&config.anki, &config.http)
    }

    /// Checks whether AnkiConnect is reachable and answering.
    ///
    /// A non-200 status is logged and reported as `false`. Connection
    /// failures are returned as [`AnkiError::Http`].
    pub async fn check_connection(&self) -> Result<bool, AnkiError> {
        let response = self.client.get(self.address.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Error connecting to AnkiConnect");
            return Ok(false);
        }

        Ok(true)
    }

    /// Sends `action` with `params` and returns the decoded response body.
    ///
    /// The body is decoded whatever the status; a non-200 status is only
    /// logged. A body that is not JSON fails with [`AnkiError::MalformedResponse`].
    pub async fn send_request(&self, action: &str, params: Value) -> Result<Value, AnkiError> {
        let request = AnkiRequest {
            action,
            version: API_VERSION,
            params,
        };

        debug!(action, "AnkiConnect request");
        let response = self
            .client
            .post(self.address.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            warn!(%status, body = %text, "AnkiConnect error");
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Sends `action` and unpacks the result, turning a reported error into
    /// [`AnkiError::Action`].
    pub async fn invoke<T>(&self, action: &str, params: Value) -> Result<T, AnkiError>
    where
        T: DeserializeOwned,
    {
        let value = self.send_request(action, params).await?;
        let response: AnkiResponse<T> = serde_json::from_value(value)?;
        response.into_result()
    }

    /// Returns the AnkiConnect API version.
    pub async fn version(&self) -> Result<u32, AnkiError> {
        self.invoke("version", json!({})).await
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>, AnkiError> {
        self.invoke("deckNames", json!({})).await
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>, AnkiError> {
        self.invoke("modelNames", json!({})).await
    }

    /// Adds a note and returns its id.
    pub async fn add_note(&self, note: &Note) -> Result<u64, AnkiError> {
        self.invoke("addNote", json!({ "note": note })).await
    }
}
