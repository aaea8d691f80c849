//! Russian sentence tokenizer
//!
//! Unicode sentence boundaries (UAX #29) over-split legal Russian: every
//! `ст. 158` or `гр. Иванов` produces a break. Fragments that end with a
//! known abbreviation or a bare initial are glued back onto the next one.

use crate::NlpError;
use regex::Regex;
use std::sync::LazyLock;
use sudact_domain::traits::SentenceTokenizer;
use unicode_segmentation::UnicodeSegmentation;

static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{Lu}\.){1,2}$").expect("valid initials regex"));

/// Abbreviations common in court rulings, without the trailing period
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "ст", "ст.ст", "ч", "п", "пп", "г", "гг", "гр", "т.е", "т.к", "им", "ул", "д", "кв", "обл",
    "р-н", "руб", "коп", "см", "тел", "св-ва", "л.д",
];

/// Sentence tokenizer tuned for Russian legal prose
#[derive(Debug, Clone)]
pub struct RuSentenceTokenizer {
    abbreviations: Vec<String>,
}

impl RuSentenceTokenizer {
    /// Create a tokenizer with the default abbreviation list
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()))
    }

    /// Create a tokenizer with a custom abbreviation list
    pub fn with_abbreviations(abbreviations: impl IntoIterator<Item = String>) -> Self {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Split text into sentences without going through the trait
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut glue = false;

        for fragment in text.unicode_sentences() {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }

            match sentences.last_mut() {
                Some(last) if glue => {
                    last.push(' ');
                    last.push_str(fragment);
                }
                _ => sentences.push(fragment.to_string()),
            }

            glue = sentences
                .last()
                .is_some_and(|s| self.ends_with_abbreviation(s));
        }

        sentences
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        if !sentence.ends_with('.') {
            return false;
        }
        let Some(word) = sentence.split_whitespace().last() else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        if INITIALS.is_match(word) {
            return true;
        }
        let stem = word.trim_end_matches('.').to_lowercase();
        self.abbreviations.iter().any(|a| *a == stem)
    }
}

impl Default for RuSentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer for RuSentenceTokenizer {
    type Error = NlpError;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(self.split(text))
    }
}
