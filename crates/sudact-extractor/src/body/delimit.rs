//! Main-part delimiters

use crate::patterns::{BODY_BEGIN, BODY_END};

/// Text strictly between the first begin marker and the first end marker
/// after it
///
/// `None` when either marker is missing.
///
/// # Examples
///
/// ```
/// use sudact_extractor::body::main_part;
///
/// let text = "Шапка. УСТАНОВИЛ: Иванов совершил кражу. ПРИГОВОРИЛ: признать виновным.";
/// assert_eq!(main_part(text).map(str::trim), Some("Иванов совершил кражу."));
/// assert_eq!(main_part("Шапка без маркеров"), None);
/// ```
pub fn main_part(text: &str) -> Option<&str> {
    let begin = BODY_BEGIN.find(text)?;
    let rest = &text[begin.end()..];
    let end = BODY_END.find(rest)?;
    Some(&rest[..end.start()])
}
