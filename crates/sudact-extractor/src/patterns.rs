//! Compiled patterns and fixed lookup tables
//!
//! All regexes are compiled once on first use and shared read-only.

use regex::Regex;
use std::sync::LazyLock;

/// `Иванов А.Б.`, `Иванов А. Б,`
pub static FIO_SURNAME_INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Я][а-яА-Я\-]{1,25} [А-Я]\. ?[А-Я][.,]?").expect("valid surname-initials regex")
});

/// `А.Б. Иванов`
pub static FIO_INITIALS_SURNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Я]\.[А-Я]\. [А-Я][а-яА-Я\-]{1,25}").expect("valid initials-surname regex")
});

/// `Иванов АБ`
pub static FIO_SURNAME_DOUBLE_INITIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Я][а-яА-Я\-]{1,25} [А-Я]{2}").expect("valid double-initial regex")
});

/// `Иванов ФИО12`
pub static FIO_ANONYMIZED_SURNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Я][а-яА-Я\-]{1,25} ФИО[0-9]{1,3}").expect("valid anonymized surname regex")
});

/// `ФИО12`
pub static FIO_ANONYMIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ФИО[0-9]{1,3}").expect("valid anonymized tag regex"));

/// `ИВАНОВ АЛЕКСАНДР БОРИСОВИЧ`
pub static FIO_CAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Я]{1,20} [А-Я]{1,20} [А-Я]{1,20}").expect("valid capitals name regex")
});

/// `11 июля 2015`
pub static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}) ([а-яА-Я]{1,15}) ([0-9]{4})").expect("valid date regex")
});

/// Start of the main part: `УСТАНОВИЛ`, letter spacing tolerated
pub static BODY_BEGIN: LazyLock<Regex> = LazyLock::new(|| spaced_markers(&["УСТАНОВИЛ"]));

/// End of the main part: one of the terminal verdict verbs
pub static BODY_END: LazyLock<Regex> =
    LazyLock::new(|| spaced_markers(&["ПРИГОВОРИЛ", "ПОСТАНОВИЛ", "РЕШИЛ"]));

/// Build a case-insensitive alternation of words whose letters may be
/// separated by whitespace, followed by an optional colon
fn spaced_markers(words: &[&str]) -> Regex {
    let alternatives: Vec<String> = words
        .iter()
        .map(|word| {
            word.chars()
                .map(|c| regex::escape(&c.to_string()))
                .collect::<Vec<_>>()
                .join(r"\s*")
        })
        .collect();
    Regex::new(&format!(r"(?i)(?:{}):?", alternatives.join("|"))).expect("valid marker regex")
}

/// Genitive month names and their two-digit numbers
pub const MONTHS: [(&str, &str); 12] = [
    ("января", "01"),
    ("февраля", "02"),
    ("марта", "03"),
    ("апреля", "04"),
    ("мая", "05"),
    ("июня", "06"),
    ("июля", "07"),
    ("августа", "08"),
    ("сентября", "09"),
    ("октября", "10"),
    ("ноября", "11"),
    ("декабря", "12"),
];

/// Look up the two-digit number of a genitive month name
pub fn month_number(name: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// Case-type suffixes appended to court names by the publisher
pub const COURT_SUFFIXES: [&str; 3] = [
    "- Уголовное",
    "- Гражданские и административные",
    "- Административные правонарушения",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_markers_tolerate_spacing_and_case() {
        assert!(BODY_BEGIN.is_match("У С Т А Н О В И Л:"));
        assert!(BODY_BEGIN.is_match("установил"));
        assert!(BODY_END.is_match("П Р И Г О В О Р И Л"));
        assert!(BODY_END.is_match("постановил:"));
        assert!(BODY_END.is_match("Решил"));
        assert!(!BODY_END.is_match("признал"));
    }

    #[test]
    fn test_name_patterns() {
        assert_eq!(
            FIO_SURNAME_INITIALS.find("подсудимого Иванов А.Б., ранее").map(|m| m.as_str()),
            Some("Иванов А.Б.")
        );
        assert!(FIO_INITIALS_SURNAME.is_match("судья А.Б. Петров"));
        assert!(FIO_ANONYMIZED.is_match("ФИО12"));
        assert!(FIO_CAPS.is_match("ИВАНОВ АЛЕКСАНДР БОРИСОВИЧ"));
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("мая"), Some("05"));
        assert_eq!(month_number("май"), None);
    }
}
