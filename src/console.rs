//! Terminal output for the `jisho-anki` binary.
//!
//! Color is used only when stdout is a TTY and `NO_COLOR` is unset.

use std::io::{self, IsTerminal};

/// SGR attributes used by the binary's output.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Cyan => "36",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Status lines, lookup results and headers for the CLI.
#[derive(Debug)]
pub struct Console {
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Detects whether to color output from `NO_COLOR` and the stdout TTY.
    pub fn new() -> Self {
        let color = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { color }
    }

    /// Forces color on or off.
    pub fn with_colors(enabled: bool) -> Self {
        Self { color: enabled }
    }

    /// Wraps `text` in the given SGR attributes, or returns it unchanged
    /// when color is off.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.color || styles.is_empty() {
            return text.to_string();
        }

        let sgr: Vec<&str> = styles.iter().map(|s| s.sgr()).collect();
        format!("\x1b[{}m{}{}", sgr.join(";"), text, RESET)
    }

    fn tag(&self, tag: &str, color: Style) -> String {
        format!("[{}]", self.style(tag, &[color, Style::Bold]))
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", self.tag("INFO", Style::Blue), message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", self.tag("OK", Style::Green), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", self.tag("WARN", Style::Yellow), message);
    }

    /// Errors go to stderr so piped lookup output stays clean.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.tag("ERROR", Style::Red), message);
    }

    /// Blank line followed by a bold header, e.g. "Sentences for 水".
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.style(title, &[Style::Magenta, Style::Bold]));
    }

    /// Secondary text: translations, missing keywords.
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Japanese text being looked up or shown as a result.
    pub fn headword(&self, text: &str) -> String {
        self.style(text, &[Style::Cyan, Style::Bold])
    }

    /// Prints one numbered example sentence with its translation underneath.
    pub fn pair(&self, number: usize, japanese: &str, english: &str) {
        println!("{:>3}. {}", number, self.headword(japanese));
        println!("     {}", self.muted(english));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_color_off() {
        let console = Console::with_colors(false);
        assert_eq!(console.headword("林"), "林");
        assert_eq!(console.muted("grove, forest"), "grove, forest");
        assert_eq!(console.tag("WARN", Style::Yellow), "[WARN]");
    }

    #[test]
    fn test_headword_and_muted_codes() {
        let console = Console::with_colors(true);
        assert_eq!(console.headword("水"), "\x1b[36;1m水\x1b[0m");
        assert_eq!(console.muted("water"), "\x1b[90;2mwater\x1b[0m");
    }

    #[test]
    fn test_tag_keeps_brackets_unstyled() {
        let console = Console::with_colors(true);
        assert_eq!(console.tag("OK", Style::Green), "[\x1b[32;1mOK\x1b[0m]");
    }

    #[test]
    fn test_no_styles_is_identity() {
        let console = Console::with_colors(true);
        assert_eq!(console.style("今日", &[]), "今日");
    }
}
