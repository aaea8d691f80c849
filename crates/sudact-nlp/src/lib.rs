//! Sudact NLP Capability Layer
//!
//! Pluggable implementations of the capability traits from `sudact-domain`.
//!
//! # Architecture
//!
//! The extraction pipeline consumes three opaque capabilities: a sentence
//! classifier, a sentence tokenizer and a person-name recognizer. This crate
//! provides real implementations and deterministic test doubles behind the
//! same interfaces.
//!
//! # Implementations
//!
//! - `MockClassifier`: Deterministic labels for testing
//! - `MockNameExtractor`: Fixed names for testing
//! - `MockTokenizer`: One sentence per non-empty line for testing
//! - `RuSentenceTokenizer`: Unicode sentence boundaries with Russian abbreviation repair
//! - `PatronymicNameExtractor`: Regex recognizer for full Russian names
//! - `HttpClassifier`: Client for a model server hosting the trained classifier
//!
//! # Examples
//!
//! ```
//! use sudact_nlp::MockClassifier;
//! use sudact_domain::{traits::SentenceClassifier, Label};
//!
//! let classifier = MockClassifier::new(Label::Fabula);
//! let labels = classifier.classify(&["Суд установил.".to_string()]).unwrap();
//! assert_eq!(labels, vec![Label::Fabula]);
//! ```

#![warn(missing_docs)]

pub mod http;
pub mod names;
pub mod tokenizer;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use sudact_domain::traits::{NameExtractor, SentenceClassifier, SentenceTokenizer};
use sudact_domain::{Label, PersonName};
use thiserror::Error;

pub use http::HttpClassifier;
pub use names::PatronymicNameExtractor;
pub use tokenizer::RuSentenceTokenizer;

/// Errors that can occur inside a capability
#[derive(Error, Debug)]
pub enum NlpError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("NLP error: {0}")]
    Other(String),
}

/// Mock classifier for deterministic testing
///
/// Labels each sentence from, in order: a per-sentence override, a scripted
/// label at the sentence's index, or the default label. No model is loaded.
///
/// # Examples
///
/// ```
/// use sudact_nlp::MockClassifier;
/// use sudact_domain::{traits::SentenceClassifier, Label};
///
/// let classifier = MockClassifier::new(Label::Fabula)
///     .with_label("Свидетель показал.", Label::Witness);
/// let labels = classifier
///     .classify(&["Свидетель показал.".to_string(), "Иное.".to_string()])
///     .unwrap();
/// assert_eq!(labels, vec![Label::Witness, Label::Fabula]);
/// ```
#[derive(Debug, Clone)]
pub struct MockClassifier {
    default_label: Label,
    overrides: HashMap<String, Label>,
    script: Vec<Label>,
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Create a classifier that assigns `label` to every sentence
    pub fn new(label: Label) -> Self {
        Self {
            default_label: label,
            overrides: HashMap::new(),
            script: Vec::new(),
            fail: false,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a classifier that returns `labels` by sentence index
    pub fn scripted(labels: Vec<Label>) -> Self {
        Self {
            script: labels,
            ..Self::new(Label::Unlabeled)
        }
    }

    /// Assign a specific label to an exact sentence
    pub fn with_label(mut self, sentence: impl Into<String>, label: Label) -> Self {
        self.overrides.insert(sentence.into(), label);
        self
    }

    /// Configure every call to fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get the number of times classify was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(Label::Fabula)
    }
}

impl SentenceClassifier for MockClassifier {
    type Error = NlpError;

    fn classify(&self, sentences: &[String]) -> Result<Vec<Label>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(NlpError::Other("Mock classifier error".to_string()));
        }

        Ok(sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                self.overrides
                    .get(sentence)
                    .or_else(|| self.script.get(i))
                    .copied()
                    .unwrap_or(self.default_label)
            })
            .collect())
    }
}

/// Mock tokenizer treating every non-empty line as one sentence
#[derive(Debug, Clone, Default)]
pub struct MockTokenizer {
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockTokenizer {
    /// Create a line-splitting tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every call to fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get the number of times tokenize was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl SentenceTokenizer for MockTokenizer {
    type Error = NlpError;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NlpError::Other("Mock tokenizer error".to_string()));
        }
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Mock name recognizer returning a fixed list for any text
#[derive(Debug, Clone, Default)]
pub struct MockNameExtractor {
    names: Vec<PersonName>,
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockNameExtractor {
    /// Create a recognizer that always returns `names`
    pub fn new(names: Vec<PersonName>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    /// Create a recognizer that never finds anything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Configure every call to fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get the number of times the recognizer was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl NameExtractor for MockNameExtractor {
    type Error = NlpError;

    fn extract_person_names(&self, _text: &str) -> Result<Vec<PersonName>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NlpError::Other("Mock recognizer error".to_string()));
        }
        Ok(self.names.clone())
    }
}
