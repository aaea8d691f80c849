//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while parsing a document
///
/// Soft field failures never appear here; they become absent field values.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Date could not be extracted from the header
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Sentence classifier failed
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Sentence tokenizer failed
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Classifier returned a label sequence of the wrong length
    #[error("Classifier returned {labels} labels for {sentences} sentences")]
    LabelMismatch {
        /// Number of sentences sent
        sentences: usize,
        /// Number of labels received
        labels: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Batch worker failed to complete
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Hard failures of date extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Header has no "от " marker
    #[error("header has no 'от ' marker")]
    MissingFromMarker,

    /// Text after the marker holds no `D[D] <month> YYYY` date
    #[error("no date found in '{0}'")]
    NoDatePattern(String),

    /// Month word is not a genitive Russian month name
    #[error("unknown month '{0}'")]
    UnknownMonth(String),
}
