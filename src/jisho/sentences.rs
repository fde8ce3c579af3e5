//! Example sentence search.

use super::JishoClient;
use crate::error::JishoError;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use serde::Serialize;
use tracing::debug;

/// Number of sentences Jisho shows per result page.
pub const SENTENCES_PER_PAGE: usize = 20;

/// Sentence count used when the caller has no preference.
pub const DEFAULT_SENTENCE_COUNT: usize = 20;

/// A Japanese example sentence and its English translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LangPair {
    pub japanese: String,
    pub english: String,
}

impl JishoClient {
    /// Searches Jisho for up to `count` example sentences containing `word`.
    ///
    /// Result pages are fetched in order until `count` sentences have been
    /// collected or a page comes back short, meaning Jisho has no more. A
    /// non-200 page ends the search early and the sentences found so far are
    /// returned.
    pub async fn find_sentences(
        &self,
        word: &str,
        count: usize,
    ) -> Result<Vec<LangPair>, JishoError> {
        let mut sentences = Vec::new();
        if count == 0 {
            return Ok(sentences);
        }

        let term = format!("{} #sentences", word);
        let mut page = 1;
        loop {
            let url = self.search_url(&term, Some(page))?;
            let Some(body) = self.fetch(url, "sentences").await? else {
                return Ok(sentences);
            };

            let found = self.parse_sentences(&body)?;
            let found_on_page = found.len();
            let remaining = count - sentences.len();
            sentences.extend(found.into_iter().take(remaining));

            if sentences.len() == count {
                return Ok(sentences);
            }

            if found_on_page < SENTENCES_PER_PAGE {
                debug!(page, found_on_page, "sentence results exhausted");
                return Ok(sentences);
            }

            page += 1;
        }
    }

    /// Extracts every sentence pair from a search result page, in document order.
    fn parse_sentences(&self, html: &str) -> Result<Vec<LangPair>, JishoError> {
        let doc = Html::parse_document(html);

        doc.select(&self.selectors.sentence)
            .map(|container| {
                let japanese = container
                    .select(&self.selectors.japanese)
                    .next()
                    .ok_or_else(|| {
                        JishoError::StructuralMismatch("japanese sentence".to_string())
                    })?;
                let english = container
                    .select(&self.selectors.english)
                    .next()
                    .ok_or_else(|| {
                        JishoError::StructuralMismatch("english sentence".to_string())
                    })?;

                Ok(LangPair {
                    japanese: text_without_furigana(japanese).trim().to_string(),
                    english: english.text().collect::<String>().trim().to_string(),
                })
            })
            .collect()
    }
}

/// Extracts text from an element, skipping anything inside `span.furigana`.
fn text_without_furigana(elem: ElementRef) -> String {
    let mut text = String::new();

    for node in elem.descendants() {
        if let Node::Text(t) = node.value() {
            let in_furigana = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| e.name() == "span" && e.classes().any(|c| c == "furigana"))
            });

            if !in_furigana {
                text.push_str(t);
            }
        }
    }

    text
}
