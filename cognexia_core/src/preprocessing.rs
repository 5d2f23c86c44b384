//! Text normalization applied to document contents before inference

use once_cell::sync::Lazy;
use regex::Regex;

/// Common English words dropped when stopword removal is enabled
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}").expect("valid regex"));

/// Switches for [`preprocess_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessOptions {
    pub lowercase: bool,
    /// Replace Unicode punctuation with spaces
    pub remove_punctuation: bool,
    /// Drop words in [`DEFAULT_STOPWORDS`]
    pub remove_stopwords: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_punctuation: false,
            remove_stopwords: false,
        }
    }
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_remove_punctuation(mut self, remove: bool) -> Self {
        self.remove_punctuation = remove;
        self
    }

    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }
}

/// Clean and normalize raw text
///
/// Trims, optionally lowercases, optionally replaces punctuation with
/// spaces, collapses whitespace runs to a single space, and optionally
/// removes stopwords, in that order.
pub fn preprocess_text(text: &str, options: &PreprocessOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut normalized = text.trim().to_string();

    if options.lowercase {
        normalized = normalized.to_lowercase();
    }

    if options.remove_punctuation {
        normalized = PUNCTUATION.replace_all(&normalized, " ").into_owned();
    }

    normalized = collapse_whitespace(&normalized);

    if options.remove_stopwords {
        normalized = remove_stopwords(&normalized);
    }

    normalized
}

/// Split text into whitespace-delimited tokens
pub fn tokenize(text: &str) -> Vec<String> {
    collapse_whitespace(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn remove_stopwords(text: &str) -> String {
    text.split(' ')
        .filter(|token| !token.is_empty() && !DEFAULT_STOPWORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        preprocess_text(text, &PreprocessOptions::default())
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(clean("HELLO"), "hello");
    }

    #[test]
    fn test_lowercase_can_be_disabled() {
        let options = PreprocessOptions::new().with_lowercase(false);
        assert_eq!(preprocess_text("Hello World", &options), "Hello World");
    }

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(clean("  hello  "), "hello");
    }

    #[test]
    fn test_punctuation_removal() {
        let options = PreprocessOptions::new().with_remove_punctuation(true);
        assert_eq!(preprocess_text("Hello, world!", &options), "hello world");
    }

    #[test]
    fn test_unicode_punctuation_removal() {
        let options = PreprocessOptions::new().with_remove_punctuation(true);
        assert_eq!(preprocess_text("«Bonjour»—monde¿", &options), "bonjour monde");
    }

    #[test]
    fn test_punctuation_kept_by_default() {
        assert_eq!(clean("Hello, world!"), "hello, world!");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t "), "");
    }

    #[test]
    fn test_multiple_spaces() {
        assert_eq!(clean("a   b\n\n c"), "a b c");
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(clean("Café mañana"), "café mañana");
    }

    #[test]
    fn test_stopword_removal() {
        let options = PreprocessOptions::new().with_remove_stopwords(true);
        assert_eq!(preprocess_text("this is the test", &options), "this test");
    }

    #[test]
    fn test_stopwords_checked_after_lowercasing() {
        let options = PreprocessOptions::new().with_remove_stopwords(true);
        assert_eq!(preprocess_text("The Cat AND the Hat", &options), "cat hat");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  one\ttwo \n three  "), vec!["one", "two", "three"]);
        assert!(tokenize("   ").is_empty());
    }
}
