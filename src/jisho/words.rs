//! Dictionary lookup through the Jisho word search API.

use super::JishoClient;
use crate::error::JishoError;
use serde_json::Value;

impl JishoClient {
    /// Looks `word` up in the Jisho word API and returns the response verbatim.
    ///
    /// Returns `None` on a non-200 status. A 200 response that is not valid
    /// JSON fails with [`JishoError::MalformedResponse`].
    pub async fn dictionary_entry(&self, word: &str) -> Result<Option<Value>, JishoError> {
        let url = self.words_url(word)?;
        let Some(body) = self.fetch(url, "dictionary entry").await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&body)?))
    }
}
