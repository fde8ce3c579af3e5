//! Kanji keyword lookup.

use super::JishoClient;
use crate::error::JishoError;
use crate::text::is_kanji_str;
use scraper::Html;

impl JishoClient {
    /// Fetches the English keywords for a single kanji, e.g. `"grove, forest"` for 林.
    ///
    /// `kanji` must be exactly one kanji character; anything else fails with
    /// [`JishoError::InvalidArgument`] before a request is made. Returns `None`
    /// if Jisho answers with a non-200 status.
    pub async fn kanji_keywords(&self, kanji: &str) -> Result<Option<String>, JishoError> {
        if !is_kanji_str(kanji)? {
            return Err(JishoError::InvalidArgument(format!(
                "{:?} is not a kanji character",
                kanji
            )));
        }

        let url = self.search_url(&format!("{} #kanji", kanji), None)?;
        let Some(body) = self.fetch(url, "kanji keywords").await? else {
            return Ok(None);
        };

        self.parse_main_meanings(&body).map(Some)
    }

    fn parse_main_meanings(&self, html: &str) -> Result<String, JishoError> {
        let doc = Html::parse_document(html);
        doc.select(&self.selectors.main_meanings)
            .next()
            .map(|elem| elem.text().collect::<String>().trim().to_string())
            .ok_or_else(|| JishoError::StructuralMismatch("kanji main meanings".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_server::{StubResponse, StubServer};

    const FIXTURE: &str = include_str!("../../fixtures/jisho/kanji_rin.html");
    const NO_RESULTS: &str = include_str!("../../fixtures/jisho/no_results.html");

    fn client_for(base_url: &str) -> JishoClient {
        let mut config = Config::default();
        config.jisho.base_url = base_url.to_string();
        JishoClient::new(&config).unwrap()
    }

    #[test]
    fn test_parse_fixture() {
        let client = client_for("https://jisho.org");
        assert_eq!(client.parse_main_meanings(FIXTURE).unwrap(), "grove, forest");
    }

    #[test]
    fn test_parse_missing_block_is_mismatch() {
        let client = client_for("https://jisho.org");
        assert!(matches!(
            client.parse_main_meanings(NO_RESULTS),
            Err(JishoError::StructuralMismatch(_))
        ));
    }

    #[tokio::test]
    async fn test_kanji_keywords() {
        let server = StubServer::start(|_| StubResponse::html(200, FIXTURE)).await;
        let client = client_for(&server.url);

        let keywords = client.kanji_keywords("林").await.unwrap();
        assert_eq!(keywords.as_deref(), Some("grove, forest"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, "/search/%E6%9E%97%20%23kanji");
    }

    #[tokio::test]
    async fn test_rejects_non_kanji_before_request() {
        let server = StubServer::start(|_| StubResponse::html(200, FIXTURE)).await;
        let client = client_for(&server.url);

        for input in ["x", "", "林森", "か"] {
            assert!(matches!(
                client.kanji_keywords(input).await,
                Err(JishoError::InvalidArgument(_))
            ));
        }
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bad_status_is_none() {
        let server = StubServer::start(|_| StubResponse::html(500, "oops")).await;
        let client = client_for(&server.url);

        assert_eq!(client.kanji_keywords("林").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_page_without_block_is_mismatch() {
        let server = StubServer::start(|_| StubResponse::html(200, NO_RESULTS)).await;
        let client = client_for(&server.url);

        assert!(matches!(
            client.kanji_keywords("林").await,
            Err(JishoError::StructuralMismatch(_))
        ));
    }
}
