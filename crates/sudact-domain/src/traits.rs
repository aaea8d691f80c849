//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the extraction pipeline and
//! the models it consumes. Implementations live in other crates; the pipeline
//! depends only on these interfaces, so test doubles can stand in for the
//! real models.

use crate::{Label, PersonName};

/// Trait for the pre-trained sentence classifier
///
/// Implemented by the infrastructure layer (sudact-nlp). Loaded once and
/// shared read-only; implementations must tolerate concurrent calls.
pub trait SentenceClassifier {
    /// Error type for classification
    type Error;

    /// Classify every sentence; the result has the same length and order
    fn classify(&self, sentences: &[String]) -> Result<Vec<Label>, Self::Error>;
}

/// Trait for a Russian sentence boundary detector
///
/// Implemented by the infrastructure layer (sudact-nlp)
pub trait SentenceTokenizer {
    /// Error type for tokenization
    type Error;

    /// Split text into sentences in document order
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}

/// Trait for a general-purpose person-name recognizer
///
/// Implemented by the infrastructure layer (sudact-nlp). Consulted only as
/// the last fallback of accused-name extraction.
pub trait NameExtractor {
    /// Error type for recognition
    type Error;

    /// Person names found in the text, in order of appearance
    fn extract_person_names(&self, text: &str) -> Result<Vec<PersonName>, Self::Error>;
}
