//! Body classifier pipeline

use super::{consolidate, main_part};
use crate::error::ExtractorError;
use std::fmt::Display;
use sudact_domain::traits::{SentenceClassifier, SentenceTokenizer};
use sudact_domain::{SegmentedBody, Segmentation};
use tracing::debug;

/// Segments the main part of a ruling into labeled spans
///
/// # Examples
///
/// ```
/// use sudact_extractor::body::BodyClassifier;
/// use sudact_nlp::{MockClassifier, MockTokenizer};
/// use sudact_domain::Label;
///
/// let classifier = BodyClassifier::new(MockClassifier::new(Label::Fabula), MockTokenizer::new(), 30);
/// let segmentation = classifier
///     .segment("УСТАНОВИЛ:\nИванов совершил кражу.\nПРИГОВОРИЛ:")
///     .unwrap();
/// assert_eq!(segmentation.body().unwrap().sentence_count(), 1);
/// ```
pub struct BodyClassifier<C, T> {
    classifier: C,
    tokenizer: T,
    merge_chars: usize,
}

impl<C, T> BodyClassifier<C, T>
where
    C: SentenceClassifier,
    C::Error: Display,
    T: SentenceTokenizer,
    T::Error: Display,
{
    /// Create a body classifier
    pub fn new(classifier: C, tokenizer: T, merge_chars: usize) -> Self {
        Self {
            classifier,
            tokenizer,
            merge_chars,
        }
    }

    /// Segment the flat text of a ruling
    ///
    /// A page without its begin or end marker yields
    /// `Segmentation::NonStandardDocument`.
    ///
    /// # Errors
    ///
    /// Tokenizer and classifier failures propagate unchanged; so does a
    /// label sequence whose length differs from the sentence sequence.
    pub fn segment(&self, text: &str) -> Result<Segmentation, ExtractorError> {
        let Some(main) = main_part(text) else {
            debug!("body markers missing, document is non-standard");
            return Ok(Segmentation::NonStandardDocument);
        };

        let sentences = self
            .tokenizer
            .tokenize(main)
            .map_err(|e| ExtractorError::Tokenizer(e.to_string()))?;
        if sentences.is_empty() {
            return Ok(Segmentation::Segmented(SegmentedBody::default()));
        }

        let labels = self
            .classifier
            .classify(&sentences)
            .map_err(|e| ExtractorError::Classifier(e.to_string()))?;
        if labels.len() != sentences.len() {
            return Err(ExtractorError::LabelMismatch {
                sentences: sentences.len(),
                labels: labels.len(),
            });
        }

        let body = consolidate(sentences, &labels, self.merge_chars);
        debug!(
            spans = body.spans().len(),
            sentences = body.sentence_count(),
            "main part segmented"
        );
        Ok(Segmentation::Segmented(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudact_domain::Label;
    use sudact_nlp::{MockClassifier, MockTokenizer, NlpError};

    const TEXT: &str = "Приговор\nУСТАНОВИЛ:\nИванов совершил кражу имущества потерпевшего.\nСвидетель Петров показал.\nПРИГОВОРИЛ:\nпризнать виновным";

    struct ShortClassifier;

    impl SentenceClassifier for ShortClassifier {
        type Error = NlpError;

        fn classify(&self, sentences: &[String]) -> Result<Vec<Label>, Self::Error> {
            Ok(vec![Label::Fabula; sentences.len().saturating_sub(1)])
        }
    }

    #[test]
    fn test_segments_main_part_only() {
        let classifier = MockClassifier::new(Label::Fabula)
            .with_label("Свидетель Петров показал.", Label::Witness);
        let body_classifier = BodyClassifier::new(classifier, MockTokenizer::new(), 30);

        let segmentation = body_classifier.segment(TEXT).unwrap();
        let body = segmentation.body().unwrap();

        assert_eq!(body.sentence_count(), 2);
        assert_eq!(body.spans()[0].label, Label::Fabula);
        assert_eq!(body.spans()[1].label, Label::Witness);
        assert!(!body.spans().iter().any(|s| s.text().contains("виновным")));
    }

    #[test]
    fn test_missing_markers_are_non_standard() {
        let classifier = MockClassifier::default();
        let tokenizer = MockTokenizer::new();
        let body_classifier = BodyClassifier::new(classifier.clone(), tokenizer.clone(), 30);

        let segmentation = body_classifier.segment("УСТАНОВИЛ: текст без конца").unwrap();

        assert!(segmentation.is_non_standard());
        assert_eq!(tokenizer.call_count(), 0);
        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_empty_main_part_skips_classifier() {
        let classifier = MockClassifier::default();
        let body_classifier = BodyClassifier::new(classifier.clone(), MockTokenizer::new(), 30);

        let segmentation = body_classifier.segment("УСТАНОВИЛ:\nПРИГОВОРИЛ:").unwrap();

        assert_eq!(segmentation, Segmentation::Segmented(SegmentedBody::default()));
        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let body_classifier =
            BodyClassifier::new(MockClassifier::default().failing(), MockTokenizer::new(), 30);
        assert!(matches!(
            body_classifier.segment(TEXT),
            Err(ExtractorError::Classifier(_))
        ));
    }

    #[test]
    fn test_tokenizer_failure_propagates() {
        let body_classifier =
            BodyClassifier::new(MockClassifier::default(), MockTokenizer::new().failing(), 30);
        assert!(matches!(
            body_classifier.segment(TEXT),
            Err(ExtractorError::Tokenizer(_))
        ));
    }

    #[test]
    fn test_label_count_mismatch() {
        let body_classifier = BodyClassifier::new(ShortClassifier, MockTokenizer::new(), 30);
        match body_classifier.segment(TEXT) {
            Err(ExtractorError::LabelMismatch { sentences, labels }) => {
                assert_eq!(sentences, 2);
                assert_eq!(labels, 1);
            }
            other => panic!("Expected LabelMismatch, got {:?}", other),
        }
    }
}
