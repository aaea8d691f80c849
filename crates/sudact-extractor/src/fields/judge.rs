//! Presiding judge

use crate::html::NormalizedDocument;
use crate::patterns::{FIO_INITIALS_SURNAME, FIO_SURNAME_INITIALS};
use crate::strategy::{first_match, Strategy};
use sudact_domain::FieldValue;

const JUDGES_MARKER: &str = "Судьи дела:";
const JUDGE_ROLE: &str = "(судья)";
const JUDGE_WORD: &str = "Судья";

/// Document together with the length limit of the marker strategy
pub struct JudgeInput<'a> {
    /// Normalized page
    pub doc: &'a NormalizedDocument,
    /// Marker-strategy results at least this long (chars) are rejected
    pub max_chars: usize,
}

/// Extract the judge name
pub fn extract_judge(doc: &NormalizedDocument, max_chars: usize) -> FieldValue {
    let strategies: [Strategy<JudgeInput<'_>, String>; 2] = [
        Strategy::new("judges_of_case_marker", from_judges_marker),
        Strategy::new("judge_line_patterns", from_judge_lines),
    ];
    let input = JudgeInput { doc, max_chars };
    FieldValue::from_option(first_match("judge", &strategies, &input))
}

/// Text between the last "Судьи дела:" and the following "(судья)"
fn from_judges_marker(input: &JudgeInput<'_>) -> Option<String> {
    let text = input.doc.text();
    let (_, tail) = text.rsplit_once(JUDGES_MARKER)?;
    let judge = tail.split(JUDGE_ROLE).next()?.trim();
    (!judge.is_empty() && judge.chars().count() < input.max_chars).then(|| judge.to_string())
}

/// First name pattern on a line mentioning a judge
///
/// `Судья А.А.` is the role word followed by initials, not a surname.
fn from_judge_lines(input: &JudgeInput<'_>) -> Option<String> {
    input
        .doc
        .lines()
        .iter()
        .filter(|line| line.contains(JUDGE_WORD))
        .find_map(|line| {
            FIO_SURNAME_INITIALS
                .find_iter(line)
                .map(|m| m.as_str())
                .find(|name| !name.starts_with(JUDGE_WORD))
                .or_else(|| FIO_INITIALS_SURNAME.find(line).map(|m| m.as_str()))
                .map(str::to_string)
        })
}
