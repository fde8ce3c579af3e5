//! jisho-anki CLI - look words up on Jisho.org and talk to AnkiConnect.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jisho_anki::config::Config;
use jisho_anki::console::Console;
use jisho_anki::error::ConfigError;
use jisho_anki::jisho::DEFAULT_SENTENCE_COUNT;
use jisho_anki::{AnkiClient, JishoClient, kanji_from_word};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Jisho.org lookups and AnkiConnect requests for Japanese flashcards.
#[derive(Parser, Debug)]
#[command(name = "jisho-anki")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that AnkiConnect is reachable.
    Check,

    /// Send a raw AnkiConnect action and print the response.
    Request {
        /// Action name, e.g. deckNames.
        action: String,

        /// Action parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
    },

    /// Find example sentences containing a word.
    Sentences {
        word: String,

        /// Number of sentences to fetch.
        #[arg(long, default_value_t = DEFAULT_SENTENCE_COUNT)]
        count: usize,
    },

    /// Show keywords for every kanji in the text.
    Kanji { text: String },

    /// Print the dictionary entry for a word.
    Define { word: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let console = Console::new();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => match Config::load() {
            Err(ConfigError::NoConfigDir) => {
                console.warning("No config directory found, using defaults and environment");
                let config = Config::from_env();
                config.validate().map(|_| config)
            }
            loaded => loaded,
        },
    }
    .context("Failed to load configuration")?;

    match args.command {
        Command::Check => {
            let anki = AnkiClient::from_config(&config)?;
            if anki.check_connection().await? {
                console.success(&format!("AnkiConnect is up at {}", config.anki.address));
            } else {
                console.warning(&format!(
                    "AnkiConnect at {} is not answering",
                    config.anki.address
                ));
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Request { action, params } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).context("--params must be valid JSON")?;
            let anki = AnkiClient::from_config(&config)?;
            let response = anki.send_request(&action, params).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Sentences { word, count } => {
            let jisho = JishoClient::new(&config)?;
            let sentences = jisho
                .find_sentences(&word, count)
                .await
                .context("Failed to fetch sentences")?;

            console.section(&format!("Sentences for {}", word));
            if sentences.is_empty() {
                console.info("No sentences found");
            }
            for (i, pair) in sentences.iter().enumerate() {
                console.pair(i + 1, &pair.japanese, &pair.english);
            }
        }
        Command::Kanji { text } => {
            let kanji = kanji_from_word(&text);
            if kanji.is_empty() {
                console.warning(&format!("No kanji in {}", text));
                return Ok(ExitCode::FAILURE);
            }

            let jisho = JishoClient::new(&config)?;
            for c in kanji {
                let c = c.to_string();
                match jisho.kanji_keywords(&c).await {
                    Ok(Some(keywords)) => println!("{}  {}", console.headword(&c), keywords),
                    Ok(None) => println!("{}  {}", console.headword(&c), console.muted("-")),
                    Err(e) => console.error(&format!("{}: {}", c, e)),
                }
            }
        }
        Command::Define { word } => {
            let jisho = JishoClient::new(&config)?;
            match jisho.dictionary_entry(&word).await? {
                Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
                None => {
                    console.warning(&format!("No dictionary entry for {}", word));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
