use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;

/// English function words dropped by the default tokenizer.
///
/// Entries with an apostrophe are kept for completeness even though they can
/// never match: apostrophes are stripped before stopword lookup, so `don't`
/// reaches the filter as `dont`.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "same", "so", "than", "too", "very", "can", "will", "just", "don't",
    "should", "should've", "now", "aren't", "couldn't", "didn't", "doesn't", "hasn't",
    "haven't", "isn't", "shouldn't", "wasn't", "weren't", "won't", "wouldn't",
];

lazy_static! {
    /// Shared, immutable copy of [`ENGLISH_STOPWORDS`] used by `Tokenizer::default()`.
    pub static ref DEFAULT_STOPWORDS: Arc<HashSet<String>> =
        Arc::new(ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect());
}

/// Turns a sentence into the content words the classifier counts.
///
/// The pipeline is fixed: lowercase, drop every character outside
/// `[a-z0-9 ]` without replacement, split on whitespace, then remove
/// stopwords. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<HashSet<String>>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stopwords: Arc::clone(&DEFAULT_STOPWORDS),
        }
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with its own stopword list.
    ///
    /// Entries are lowercased so they compare against normalized words.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: Arc::new(
                stopwords
                    .into_iter()
                    .map(|w| w.as_ref().trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect(),
            ),
        }
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Splits `sentence` into tokens.
    ///
    /// # Example
    /// ```
    /// use review_bayes::Tokenizer;
    ///
    /// let tokens = Tokenizer::default().tokenize("SERVICE was Great!!");
    /// assert_eq!(tokens, vec!["service", "great"]);
    /// ```
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        Self::normalize(sentence)
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    /// Lowercases and keeps only ASCII letters, digits and plain spaces.
    fn normalize(sentence: &str) -> String {
        sentence
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect()
    }
}
