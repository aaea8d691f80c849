//! Court name from the `b-justice` node

use crate::html::NormalizedDocument;
use crate::patterns::COURT_SUFFIXES;
use crate::strategy::{first_match, Strategy};
use sudact_domain::FieldValue;

const STRATEGIES: [Strategy<NormalizedDocument, String>; 1] =
    [Strategy::new("b_justice_node", from_court_node)];

/// Extract the court name with the case-type suffix removed
pub fn extract_court(doc: &NormalizedDocument) -> FieldValue {
    FieldValue::from_option(first_match("court", &STRATEGIES, doc))
}

fn from_court_node(doc: &NormalizedDocument) -> Option<String> {
    doc.court_node().map(strip_suffixes)
}

/// Remove publisher case-type suffixes and trim
pub fn strip_suffixes(raw: &str) -> String {
    COURT_SUFFIXES
        .iter()
        .fold(raw.to_string(), |court, suffix| court.replace(suffix, ""))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_removed() {
        assert_eq!(
            strip_suffixes("Октябрьский районный суд г. Пензы (Пензенская область) - Уголовное "),
            "Октябрьский районный суд г. Пензы (Пензенская область)"
        );
        assert_eq!(
            strip_suffixes("Мировой судья - Административные правонарушения"),
            "Мировой судья"
        );
    }

    #[test]
    fn test_court_from_page() {
        let doc = NormalizedDocument::parse(
            r#"<div class="b-justice">Ленинский районный суд - Гражданские и административные</div>"#,
        );
        assert_eq!(
            extract_court(&doc),
            FieldValue::Found("Ленинский районный суд".to_string())
        );
    }

    #[test]
    fn test_missing_node_is_absent() {
        let doc = NormalizedDocument::parse("<div>Суд</div>");
        assert_eq!(extract_court(&doc), FieldValue::Absent);
    }

    #[test]
    fn test_suffix_only_court_is_absent() {
        let doc = NormalizedDocument::parse(r#"<div class="b-justice"> - Уголовное</div>"#);
        assert_eq!(extract_court(&doc), FieldValue::Absent);
    }
}
