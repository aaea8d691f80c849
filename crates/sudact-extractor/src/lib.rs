//! Sudact Extractor
//!
//! Turns the HTML of a Russian criminal-court ruling into a metadata record
//! and a segmentation of its narrative body.
//!
//! # Overview
//!
//! Two pipelines share one normalized view of the page. The metadata
//! extractor runs seven field extractors (date, number, court, region,
//! judge, article, accused). The body classifier cuts out the main part
//! between "УСТАНОВИЛ" and the verdict verb, splits it into sentences,
//! labels each sentence and consolidates the labels into spans.
//!
//! # Architecture
//!
//! ```text
//! HTML → NormalizedDocument ─┬→ MetadataExtractor → MetadataRecord
//!                            └→ BodyClassifier → tokenizer → classifier → spans
//! ```
//!
//! The sentence classifier, sentence tokenizer and name recognizer are
//! capability traits from `sudact-domain`, injected at construction.
//!
//! # Example Usage
//!
//! ```
//! use sudact_extractor::{DocumentParser, ExtractorConfig};
//! use sudact_domain::{Label, RawDocument};
//! use sudact_nlp::{MockClassifier, MockNameExtractor, MockTokenizer};
//!
//! let parser = DocumentParser::new(
//!     MockClassifier::new(Label::Fabula),
//!     MockTokenizer::new(),
//!     MockNameExtractor::empty(),
//!     ExtractorConfig::default(),
//! )
//! .unwrap();
//!
//! let html = "<h1>Приговор № 1-15/2015 от 11 июля 2015 г.</h1>\
//!             <p>УСТАНОВИЛ:</p><p>Подсудимый совершил кражу.</p><p>ПРИГОВОРИЛ:</p>";
//! let raw = RawDocument::new(1, "Приговор № 1-15/2015", "https://example.org/1", html);
//!
//! let parsed = parser.parse(&raw).unwrap();
//! assert_eq!(parsed.metadata.date.value(), Some("2015-07-11"));
//! assert_eq!(parsed.metadata.number.value(), Some("1-15/2015"));
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod error;
mod metadata;
mod parser;

pub mod body;
pub mod fields;
pub mod html;
pub mod patterns;
pub mod regions;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use batch::{BatchRunner, DEFAULT_CONCURRENCY};
pub use config::ExtractorConfig;
pub use error::{DateError, ExtractorError};
pub use html::NormalizedDocument;
pub use metadata::MetadataExtractor;
pub use parser::DocumentParser;
