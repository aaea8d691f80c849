//! Metadata extractor: the seven field extractors over one document

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fields::{
    extract_accused, extract_articles, extract_court, extract_date, extract_judge,
    extract_number, extract_region,
};
use crate::html::NormalizedDocument;
use std::fmt::Display;
use sudact_domain::traits::NameExtractor;
use sudact_domain::{FieldValue, MetadataRecord};
use tracing::debug;

/// Extracts a `MetadataRecord` from a normalized page
///
/// The name recognizer is consulted only as the last accused-name fallback.
pub struct MetadataExtractor<N> {
    ner: N,
    config: ExtractorConfig,
}

impl<N> MetadataExtractor<N>
where
    N: NameExtractor,
    N::Error: Display,
{
    /// Create an extractor
    pub fn new(ner: N, config: ExtractorConfig) -> Self {
        Self { ner, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every field
    ///
    /// # Errors
    ///
    /// Only a missing or malformed date fails; every other field falls back
    /// to an absent value.
    pub fn extract(&self, doc: &NormalizedDocument) -> Result<MetadataRecord, ExtractorError> {
        let date = extract_date(doc.heading())?;
        let number = extract_number(doc.heading());
        let court = extract_court(doc);
        let region = extract_region(&court);
        let judge = extract_judge(doc, self.config.judge_max_chars);
        let article = extract_articles(doc);
        let accused = extract_accused(doc.header_lines(), &self.config, &self.ner);

        debug!(
            %date,
            %number,
            %court,
            %region,
            %judge,
            accused = accused.names().len(),
            "metadata extracted"
        );

        Ok(MetadataRecord {
            date: FieldValue::from_text(date),
            number,
            court,
            region,
            judge,
            article,
            accused,
        })
    }
}
