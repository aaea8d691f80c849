//! Document parser: metadata extraction and body classification combined

use crate::body::BodyClassifier;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::html::NormalizedDocument;
use crate::metadata::MetadataExtractor;
use std::fmt::Display;
use sudact_domain::traits::{NameExtractor, SentenceClassifier, SentenceTokenizer};
use sudact_domain::{MetadataRecord, ParsedDocument, RawDocument, Segmentation};
use tracing::info;

/// Parses raw ruling pages into `ParsedDocument`s
///
/// Stateless per call; one parser can serve many documents concurrently
/// when its capabilities allow it.
pub struct DocumentParser<C, T, N> {
    metadata: MetadataExtractor<N>,
    body: BodyClassifier<C, T>,
}

impl<C, T, N> DocumentParser<C, T, N>
where
    C: SentenceClassifier,
    C::Error: Display,
    T: SentenceTokenizer,
    T::Error: Display,
    N: NameExtractor,
    N::Error: Display,
{
    /// Create a parser
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::Config` if the configuration is invalid.
    pub fn new(
        classifier: C,
        tokenizer: T,
        ner: N,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let merge_chars = config.span_merge_chars;
        Ok(Self {
            metadata: MetadataExtractor::new(ner, config),
            body: BodyClassifier::new(classifier, tokenizer, merge_chars),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        self.metadata.config()
    }

    /// Extract metadata and segment the body
    ///
    /// # Errors
    ///
    /// Fails on a missing or malformed date and on capability failures.
    pub fn parse(&self, raw: &RawDocument) -> Result<ParsedDocument, ExtractorError> {
        let doc = NormalizedDocument::parse(&raw.html);
        let metadata = self.metadata.extract(&doc)?;
        let segmentation = self.body.segment(&doc.text())?;

        info!(
            id = raw.id,
            non_standard = segmentation.is_non_standard(),
            "document parsed"
        );

        Ok(ParsedDocument {
            id: raw.id,
            header: raw.header.clone(),
            url: raw.url.clone(),
            metadata,
            segmentation,
        })
    }

    /// Extract metadata only
    pub fn parse_metadata(&self, raw: &RawDocument) -> Result<MetadataRecord, ExtractorError> {
        let doc = NormalizedDocument::parse(&raw.html);
        let metadata = self.metadata.extract(&doc)?;
        info!(id = raw.id, "metadata extracted");
        Ok(metadata)
    }

    /// Segment the body only
    pub fn segment(&self, raw: &RawDocument) -> Result<Segmentation, ExtractorError> {
        let doc = NormalizedDocument::parse(&raw.html);
        self.body.segment(&doc.text())
    }
}
