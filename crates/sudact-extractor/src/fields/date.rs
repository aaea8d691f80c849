//! Ruling date from the heading

use crate::error::DateError;
use crate::patterns::{month_number, DATE};

const FROM_MARKER: &str = "от ";

/// Extract the ruling date as `YYYY-MM-DD`
///
/// Looks only at the text between the first and second "от " of the heading.
///
/// # Errors
///
/// Fails when the marker is missing, no `D[D] <month> YYYY` date follows
/// it, or the month word is not a genitive month name.
///
/// # Examples
///
/// ```
/// use sudact_extractor::fields::extract_date;
///
/// assert_eq!(extract_date("Приговор № 1 от 1 мая 2016 г.").unwrap(), "2016-05-01");
/// ```
pub fn extract_date(heading: &str) -> Result<String, DateError> {
    let segment = heading
        .split(FROM_MARKER)
        .nth(1)
        .ok_or(DateError::MissingFromMarker)?;

    let captures = DATE
        .captures(segment)
        .ok_or_else(|| DateError::NoDatePattern(segment.trim().to_string()))?;

    let day = &captures[1];
    let month_word = captures[2].to_lowercase();
    let year = &captures[3];

    let month = month_number(&month_word).ok_or(DateError::UnknownMonth(month_word.clone()))?;

    Ok(format!("{}-{}-{:0>2}", year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_day() {
        assert_eq!(
            extract_date("Приговор № 1-15/2015 от 11 июля 2015 г.").unwrap(),
            "2015-07-11"
        );
    }

    #[test]
    fn test_single_digit_day_is_padded() {
        assert_eq!(extract_date("Решение от 1 мая 2016").unwrap(), "2016-05-01");
    }

    #[test]
    fn test_capitalized_month() {
        assert_eq!(extract_date("Приговор от 5 Декабря 2019").unwrap(), "2019-12-05");
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(
            extract_date("Приговор № 1-15/2015"),
            Err(DateError::MissingFromMarker)
        );
        assert_eq!(extract_date(""), Err(DateError::MissingFromMarker));
    }

    #[test]
    fn test_no_date_after_marker() {
        assert!(matches!(
            extract_date("Приговор от неизвестной даты"),
            Err(DateError::NoDatePattern(_))
        ));
    }

    #[test]
    fn test_unknown_month() {
        assert_eq!(
            extract_date("Приговор от 11 термидора 2015"),
            Err(DateError::UnknownMonth("термидора".to_string()))
        );
    }

    #[test]
    fn test_only_first_segment_is_searched() {
        assert!(matches!(
            extract_date("Определение от суда от 11 июля 2015"),
            Err(DateError::NoDatePattern(_))
        ));
    }
}
