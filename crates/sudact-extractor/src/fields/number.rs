//! Case number from the heading

use crate::strategy::{first_match, Strategy};
use sudact_domain::FieldValue;

const CASE_MARKER: char = '№';
const BY_CASE: &str = "по делу";

const STRATEGIES: [Strategy<str, String>; 2] = [
    Strategy::new("by_case_phrase", by_case_phrase),
    Strategy::new("after_case_marker", after_case_marker),
];

/// Extract the case number
///
/// Absent when the heading carries no `№` glyph.
///
/// # Examples
///
/// ```
/// use sudact_extractor::fields::extract_number;
/// use sudact_domain::FieldValue;
///
/// let number = extract_number("Приговор № 1-15/2015 от 11 июля 2015 г.");
/// assert_eq!(number, FieldValue::Found("1-15/2015".to_string()));
/// ```
pub fn extract_number(heading: &str) -> FieldValue {
    if !heading.contains(CASE_MARKER) {
        return FieldValue::Absent;
    }
    FieldValue::from_option(first_match("number", &STRATEGIES, heading))
}

/// Everything after the last "по делу", without edge spaces and `№`
fn by_case_phrase(heading: &str) -> Option<String> {
    let (_, tail) = heading.rsplit_once(BY_CASE)?;
    let number = tail.trim_matches(|c: char| c == ' ' || c == CASE_MARKER);
    (!number.is_empty()).then(|| number.to_string())
}

/// First token after the last `№`
fn after_case_marker(heading: &str) -> Option<String> {
    heading
        .rsplit(CASE_MARKER)
        .next()?
        .split_whitespace()
        .next()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marker_is_absent() {
        assert_eq!(extract_number("Приговор от 11 июля 2015 г."), FieldValue::Absent);
        assert_eq!(extract_number(""), FieldValue::Absent);
    }

    #[test]
    fn test_by_case_phrase_wins() {
        assert_eq!(
            extract_number("Постановление от 2 мая 2016 г. по делу № 1-44/2016"),
            FieldValue::Found("1-44/2016".to_string())
        );
    }

    #[test]
    fn test_marker_without_number_is_absent() {
        assert_eq!(extract_number("Приговор №"), FieldValue::Absent);
    }

    #[test]
    fn test_token_after_marker() {
        assert_eq!(
            extract_number("Приговор №1-7/2017 от 3 марта 2017 г."),
            FieldValue::Found("1-7/2017".to_string())
        );
    }
}
