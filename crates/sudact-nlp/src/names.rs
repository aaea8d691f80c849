//! Regex person-name recognizer
//!
//! Finds full three-part Russian names by their patronymic. Both the
//! `Фамилия Имя Отчество` and `Имя Отчество Фамилия` orders are accepted,
//! in any grammatical case. Text is title-cased first so names typed in
//! capitals are found too.

use crate::NlpError;
use regex::Regex;
use std::sync::LazyLock;
use sudact_domain::person::title_case;
use sudact_domain::traits::NameExtractor;
use sudact_domain::PersonName;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?").expect("valid word regex")
});

static PATRONYMIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Lu}\p{Ll}{2,}(?:вич|ич|вн|ичн|чн)(?:а|у|ем|е|ой|ою|ы)?$")
        .expect("valid patronymic regex")
});

/// Name recognizer keyed on Russian patronymic endings
#[derive(Debug, Clone, Default)]
pub struct PatronymicNameExtractor;

impl PatronymicNameExtractor {
    /// Create a recognizer
    pub fn new() -> Self {
        Self
    }

    /// Names in order of appearance, without going through the trait
    pub fn find(&self, text: &str) -> Vec<PersonName> {
        let text = title_case(text);
        let words: Vec<regex::Match<'_>> = WORD.find_iter(&text).collect();

        let mut names = Vec::new();
        let mut i = 0;
        while i + 2 < words.len() {
            let triple = &words[i..i + 3];
            if !adjacent(&text, triple) {
                i += 1;
                continue;
            }

            let (a, b, c) = (triple[0].as_str(), triple[1].as_str(), triple[2].as_str());
            if is_patronymic(c) && !is_patronymic(b) {
                names.push(PersonName::new(b, c, a));
                i += 3;
            } else if is_patronymic(b) && !is_patronymic(c) {
                names.push(PersonName::new(a, b, c));
                i += 3;
            } else {
                i += 1;
            }
        }

        names
    }
}

fn is_patronymic(word: &str) -> bool {
    PATRONYMIC.is_match(word)
}

/// Whether only whitespace separates consecutive words
fn adjacent(text: &str, words: &[regex::Match<'_>]) -> bool {
    words
        .windows(2)
        .all(|pair| text[pair[0].end()..pair[1].start()].chars().all(char::is_whitespace))
}

impl NameExtractor for PatronymicNameExtractor {
    type Error = NlpError;

    fn extract_person_names(&self, text: &str) -> Result<Vec<PersonName>, Self::Error> {
        Ok(self.find(text))
    }
}
