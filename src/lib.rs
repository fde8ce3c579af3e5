//! jisho-anki - Jisho.org lookups and AnkiConnect plumbing for Japanese flashcards.
//!
//! This library provides functionality for:
//! - Scraping example sentences and kanji keywords from Jisho.org
//! - Fetching dictionary entries from the Jisho word API
//! - Sending actions to Anki through the AnkiConnect add-on
//! - Small text helpers for kanji extraction and note fields

pub mod anki;
pub mod config;
pub mod console;
pub mod error;
mod http;
pub mod jisho;
pub mod text;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use anki::{AnkiClient, Note};
pub use config::Config;
pub use console::Console;
pub use error::{AnkiError, ConfigError, JishoError, TextError};
pub use jisho::{JishoClient, LangPair};
pub use text::{is_kanji, join_field, kanji_from_word, uniqify};
