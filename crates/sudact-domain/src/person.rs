//! Person module - names as returned by a named-entity recognizer

/// A full person name split into its three Russian parts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    /// Given name
    pub first: String,

    /// Patronymic
    pub middle: String,

    /// Surname
    pub last: String,
}

impl PersonName {
    /// Create a person name
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// Render as `И.О. Фамилия`
    ///
    /// Returns `None` when any part is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudact_domain::PersonName;
    ///
    /// let name = PersonName::new("иван", "петрович", "СИДОРОВ");
    /// assert_eq!(name.initials_form().as_deref(), Some("И.П. Сидоров"));
    /// ```
    pub fn initials_form(&self) -> Option<String> {
        let first = self.first.trim().chars().next()?;
        let middle = self.middle.trim().chars().next()?;
        let last = capitalize(self.last.trim());
        if last.is_empty() {
            return None;
        }
        Some(format!(
            "{}.{}. {}",
            first.to_uppercase(),
            middle.to_uppercase(),
            last
        ))
    }
}

/// Title-case text the way legacy tooling does
///
/// A letter is uppercased when it follows a non-letter and lowercased
/// otherwise, so `ИВАНОВ А.Б.` becomes `Иванов А.Б.`.
///
/// # Examples
///
/// ```
/// use sudact_domain::person::title_case;
///
/// assert_eq!(title_case("ИВАНОВ иван-ПЕТРОВИЧ"), "Иванов Иван-Петрович");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_after_punctuation() {
        assert_eq!(title_case("иванов а.б."), "Иванов А.Б.");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_initials_form_requires_all_parts() {
        assert!(PersonName::new("Иван", "", "Сидоров").initials_form().is_none());
        assert!(PersonName::new("Иван", "Петрович", " ").initials_form().is_none());
    }

    #[test]
    fn test_initials_form_keeps_hyphenated_surname_lowercase_tail() {
        let name = PersonName::new("Анна", "Игоревна", "римская-корсакова");
        assert_eq!(name.initials_form().as_deref(), Some("А.И. Римская-корсакова"));
    }
}
