//! Jisho.org client: example sentences, kanji keywords and word lookups.
//!
//! The sentence and kanji lookups scrape search result pages, the word lookup
//! uses the JSON API. The HTML shapes this module depends on are pinned by the
//! fixtures under `fixtures/jisho/`:
//!
//! - sentence results: one `div.sentence_content` per sentence, holding a
//!   `ul.japanese_sentence` (readings in `span.furigana`) and a
//!   `div.english_sentence span.english`
//! - kanji details: a single `div.kanji-details__main-meanings`

mod kanji;
mod sentences;
mod words;

pub use sentences::{DEFAULT_SENTENCE_COUNT, LangPair, SENTENCES_PER_PAGE};

use crate::config::Config;
use crate::error::JishoError;
use crate::http::create_http_client;
use reqwest::StatusCode;
use scraper::Selector;
use tracing::{debug, warn};
use url::Url;

/// CSS selectors used for parsing.
struct Selectors {
    /// One per example sentence.
    sentence: Selector,
    /// Japanese text inside a sentence container.
    japanese: Selector,
    /// English translation inside a sentence container.
    english: Selector,
    /// Keyword block on a kanji details page.
    main_meanings: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            sentence: Selector::parse("div.sentence_content").unwrap(),
            japanese: Selector::parse("ul.japanese_sentence").unwrap(),
            english: Selector::parse("div.english_sentence span.english").unwrap(),
            main_meanings: Selector::parse("div.kanji-details__main-meanings").unwrap(),
        }
    }
}

/// Client for jisho.org.
pub struct JishoClient {
    client: reqwest::Client,
    base_url: Url,
    selectors: Selectors,
}

impl JishoClient {
    /// Creates a new client from the `jisho` and `http` sections of `config`.
    pub fn new(config: &Config) -> Result<Self, JishoError> {
        let base_url = Url::parse(&config.jisho.base_url)
            .map_err(|e| JishoError::InvalidUrl(format!("{}: {}", config.jisho.base_url, e)))?;
        let timeout = config.http.timeout()?;
        let client = create_http_client(&config.http.user_agent, timeout)?;

        Ok(Self {
            client,
            base_url,
            selectors: Selectors::new(),
        })
    }

    /// Builds `<base>/search/<term>[?page=N]` with `term` as one encoded segment.
    fn search_url(&self, term: &str, page: Option<u32>) -> Result<Url, JishoError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| JishoError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("search")
            .push(term);

        if let Some(page) = page {
            url.set_query(Some(&format!("page={}", page)));
        }

        Ok(url)
    }

    /// Builds `<base>/api/v1/search/words?keyword=<word>`.
    fn words_url(&self, word: &str) -> Result<Url, JishoError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| JishoError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v1", "search", "words"]);
        url.query_pairs_mut().append_pair("keyword", word);

        Ok(url)
    }

    /// Fetches `url` and returns its body, or `None` if the status is not 200.
    async fn fetch(&self, url: Url, what: &str) -> Result<Option<String>, JishoError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, %url, "Error loading {} from Jisho", what);
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }
}
