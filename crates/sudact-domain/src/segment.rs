//! Segment module - labeled spans of the narrative body

use crate::label::Label;

/// Marker rendered in place of the segmentation of a non-standard document
pub const NON_STANDARD_DOCUMENT: &str = "NON_STANDARD_DOCUMENT";

/// A maximal run of consecutive sentences sharing a consolidated label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Consolidated label of the run
    pub label: Label,

    /// Sentences in document order
    pub sentences: Vec<String>,
}

impl Span {
    /// Create a span
    pub fn new(label: Label, sentences: Vec<String>) -> Self {
        Self { label, sentences }
    }

    /// Space-joined text of the span
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Spans of the main part in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedBody {
    spans: Vec<Span>,
}

impl SegmentedBody {
    /// Build from spans already in document order
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Spans in document order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Whether no span exists
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of sentences over all spans
    pub fn sentence_count(&self) -> usize {
        self.spans.iter().map(|s| s.sentences.len()).sum()
    }

    /// Span texts grouped by label
    ///
    /// Labels appear in order of their first span; each label's texts keep
    /// document order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudact_domain::{Label, SegmentedBody, Span};
    ///
    /// let body = SegmentedBody::new(vec![
    ///     Span::new(Label::Fabula, vec!["a".into(), "b".into()]),
    ///     Span::new(Label::Witness, vec!["c".into()]),
    ///     Span::new(Label::Fabula, vec!["d".into()]),
    /// ]);
    /// let groups = body.groups();
    /// assert_eq!(groups[0], (Label::Fabula, vec!["a b".to_string(), "d".to_string()]));
    /// assert_eq!(groups[1], (Label::Witness, vec!["c".to_string()]));
    /// ```
    pub fn groups(&self) -> Vec<(Label, Vec<String>)> {
        let mut groups: Vec<(Label, Vec<String>)> = Vec::new();
        for span in &self.spans {
            match groups.iter_mut().find(|(label, _)| *label == span.label) {
                Some((_, texts)) => texts.push(span.text()),
                None => groups.push((span.label, vec![span.text()])),
            }
        }
        groups
    }

    /// Texts of one label, empty when the label never occurs
    pub fn texts(&self, label: Label) -> Vec<String> {
        self.spans
            .iter()
            .filter(|s| s.label == label)
            .map(Span::text)
            .collect()
    }
}

/// Result of the body classifier for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// The main part was found and segmented
    Segmented(SegmentedBody),

    /// Begin or end marker missing; no segmentation is available
    NonStandardDocument,
}

impl Segmentation {
    /// The segmented body, if the document was standard
    pub fn body(&self) -> Option<&SegmentedBody> {
        match self {
            Segmentation::Segmented(body) => Some(body),
            Segmentation::NonStandardDocument => None,
        }
    }

    /// Whether the document lacked its body markers
    pub fn is_non_standard(&self) -> bool {
        matches!(self, Segmentation::NonStandardDocument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> SegmentedBody {
        SegmentedBody::new(vec![
            Span::new(Label::Fabula, vec!["Первое.".into(), "Второе.".into()]),
            Span::new(Label::Prove, vec!["Третье.".into()]),
        ])
    }

    #[test]
    fn test_span_text_joins_with_space() {
        let span = Span::new(Label::Witness, vec!["А.".into(), "Б.".into()]);
        assert_eq!(span.text(), "А. Б.");
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(body().sentence_count(), 3);
        assert_eq!(SegmentedBody::default().sentence_count(), 0);
    }

    #[test]
    fn test_texts_for_missing_label() {
        assert!(body().texts(Label::Meditation).is_empty());
        assert_eq!(body().texts(Label::Prove), vec!["Третье.".to_string()]);
    }

    #[test]
    fn test_segmentation_accessors() {
        let seg = Segmentation::Segmented(body());
        assert!(!seg.is_non_standard());
        assert!(seg.body().is_some());
        assert!(Segmentation::NonStandardDocument.body().is_none());
    }
}
