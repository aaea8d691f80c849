//! Document module - input tuples and the merged parse result

use crate::metadata::MetadataRecord;
use crate::segment::Segmentation;

/// A ruling as supplied by the document store
///
/// Immutable input; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Store identifier
    pub id: i64,

    /// Header line as stored alongside the page (e.g. "Приговор № 1-15/2015 от 11 июля 2015 г.")
    pub header: String,

    /// Source URL of the ruling
    pub url: String,

    /// Raw HTML rendering
    pub html: String,
}

impl RawDocument {
    /// Create a new raw document
    pub fn new(
        id: i64,
        header: impl Into<String>,
        url: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Merged result for one document: metadata plus body segmentation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Store identifier of the source document
    pub id: i64,

    /// Header line of the source document
    pub header: String,

    /// Source URL
    pub url: String,

    /// Extracted metadata
    pub metadata: MetadataRecord,

    /// Segmented narrative body, or the non-standard signal
    pub segmentation: Segmentation,
}

impl ParsedDocument {
    /// File stem used when exporting this document as a spreadsheet
    ///
    /// First word of the court name, then the case designation from the
    /// header (text before " от ") with `№` dropped and `/` and spaces turned
    /// into `_`, all lowercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudact_domain::{ParsedDocument, MetadataRecord, FieldValue, Segmentation};
    ///
    /// let mut metadata = MetadataRecord::empty();
    /// metadata.court = FieldValue::from_text("Ленинский районный суд г. Пензы");
    /// let doc = ParsedDocument {
    ///     id: 1,
    ///     header: "Приговор № 1-15/2015 от 11 июля 2015 г.".to_string(),
    ///     url: String::new(),
    ///     metadata,
    ///     segmentation: Segmentation::NonStandardDocument,
    /// };
    /// assert_eq!(doc.export_stem(), "ленинский_приговор__1-15_2015");
    /// ```
    pub fn export_stem(&self) -> String {
        let court = self
            .metadata
            .court
            .as_legacy_str()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let designation = self
            .header
            .split("от")
            .next()
            .unwrap_or_default()
            .trim()
            .replace('№', "")
            .replace('/', "_")
            .replace(' ', "_");
        format!("{}_{}", court, designation).to_lowercase()
    }
}
