//! Sudact Domain Layer
//!
//! This crate contains the domain model for parsing Russian criminal-court
//! rulings. It has ZERO external dependencies and defines the value objects
//! and capability interfaces that every other crate depends upon.
//!
//! ## Key Concepts
//!
//! - **RawDocument**: A ruling as supplied by the document store (read-only)
//! - **MetadataRecord**: Seven fixed fields extracted from header and body
//! - **FieldValue / Accused**: Tagged results that keep "absent",
//!   "undetermined" and "ambiguous" apart instead of in-band strings
//! - **Segmentation**: Labeled spans of the narrative body, or the
//!   non-standard-document signal
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and rendering rules only
//! - Capability implementations (classifier, tokenizer, NER) live in `sudact-nlp`
//! - Extraction logic lives in `sudact-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod label;
pub mod metadata;
pub mod person;
pub mod segment;
pub mod traits;

// Re-exports for convenience
pub use document::{ParsedDocument, RawDocument};
pub use label::Label;
pub use metadata::{Accused, ArticleRefs, FieldValue, MetadataRecord, MetadataValue};
pub use person::PersonName;
pub use segment::{SegmentedBody, Segmentation, Span};
