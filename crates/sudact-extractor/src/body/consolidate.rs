//! Span consolidation
//!
//! Smooths one-sentence label flips: a short sentence whose label briefly
//! disagrees with its neighbours stays in the surrounding span unless the
//! next sentence confirms the change.

use sudact_domain::{Label, SegmentedBody, Span};

/// Group aligned sentences and labels into spans
///
/// A new span opens when the label differs from the current one and either
/// the sentence is longer than `merge_chars` characters, it is the last
/// sentence, or the next label also differs from the current one.
/// Sentences beyond the shorter of the two inputs are ignored.
///
/// # Examples
///
/// ```
/// use sudact_extractor::body::consolidate;
/// use sudact_domain::Label;
///
/// let sentences = vec![
///     "Подсудимый вину признал полностью и раскаялся.".to_string(),
///     "Да.".to_string(),
///     "Суд учитывает смягчающие наказание обстоятельства.".to_string(),
/// ];
/// let labels = [Label::Fabula, Label::Witness, Label::Fabula];
/// let body = consolidate(sentences, &labels, 30);
/// assert_eq!(body.spans().len(), 1);
/// assert_eq!(body.sentence_count(), 3);
/// ```
pub fn consolidate(sentences: Vec<String>, labels: &[Label], merge_chars: usize) -> SegmentedBody {
    let mut spans = Vec::new();
    let mut current: Option<Label> = None;
    let mut buffer: Vec<String> = Vec::new();

    for (i, (sentence, &label)) in sentences.into_iter().zip(labels).enumerate() {
        let changes = Some(label) != current;
        let confirmed = sentence.chars().count() > merge_chars
            || i + 1 >= labels.len()
            || Some(labels[i + 1]) != current;

        if changes && confirmed {
            if let Some(previous) = current {
                if !buffer.is_empty() {
                    spans.push(Span::new(previous, std::mem::take(&mut buffer)));
                }
            }
            current = Some(label);
        }
        buffer.push(sentence);
    }

    if let Some(label) = current {
        if !buffer.is_empty() {
            spans.push(Span::new(label, buffer));
        }
    }

    SegmentedBody::new(spans)
}
