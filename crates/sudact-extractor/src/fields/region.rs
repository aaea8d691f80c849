//! Region resolution from the court name
//!
//! `Absent` means the court name carried no region-bearing suffix at all;
//! `Undetermined` means a suffix existed but matched no canonical region.

use crate::regions::{KEYWORD_OVERRIDES, MORPHOLOGICAL_REWRITES, REGIONS, REGION_INDICATORS};
use crate::strategy::{first_match, Strategy};
use sudact_domain::FieldValue;

const STRATEGIES: [Strategy<str, &'static str>; 4] = [
    Strategy::new("exact", exact),
    Strategy::new("case_insensitive", case_insensitive),
    Strategy::new("keyword_override", keyword_override),
    Strategy::new("morphological", morphological),
];

/// Extract the region from an already extracted court name
pub fn extract_region(court: &FieldValue) -> FieldValue {
    match court.value().and_then(region_candidate) {
        Some(candidate) => resolve_region(&candidate),
        None => FieldValue::Absent,
    }
}

/// The parenthesized court-name suffix, if it names a region
///
/// # Examples
///
/// ```
/// use sudact_extractor::fields::region_candidate;
///
/// let court = "Кировский районный суд г. Томска (Томская область)";
/// assert_eq!(region_candidate(court).as_deref(), Some("Томская область"));
/// assert_eq!(region_candidate("Кировский районный суд (г. Томск)"), None);
/// ```
pub fn region_candidate(court: &str) -> Option<String> {
    let (_, suffix) = court.rsplit_once('(')?;
    let candidate = suffix.trim_matches(')');
    let lower = candidate.to_lowercase();
    REGION_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
        .then(|| candidate.to_string())
}

/// Resolve a region string against the canonical list
///
/// # Examples
///
/// ```
/// use sudact_extractor::fields::resolve_region;
/// use sudact_domain::FieldValue;
///
/// assert_eq!(
///     resolve_region("Якутия"),
///     FieldValue::Found("Республика Саха (Якутия)".to_string())
/// );
/// assert_eq!(resolve_region("Атлантида"), FieldValue::Undetermined);
/// ```
pub fn resolve_region(raw: &str) -> FieldValue {
    match first_match("region", &STRATEGIES, raw.trim()) {
        Some(region) => FieldValue::Found(region.to_string()),
        None => FieldValue::Undetermined,
    }
}

fn exact(region: &str) -> Option<&'static str> {
    REGIONS.iter().find(|r| **r == region).copied()
}

fn case_insensitive(region: &str) -> Option<&'static str> {
    let lower = region.to_lowercase();
    REGIONS.iter().find(|r| r.to_lowercase() == lower).copied()
}

fn keyword_override(region: &str) -> Option<&'static str> {
    let lower = region.to_lowercase();
    KEYWORD_OVERRIDES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, region)| *region)
}

fn morphological(region: &str) -> Option<&'static str> {
    let normalized = MORPHOLOGICAL_REWRITES
        .iter()
        .fold(region.to_string(), |r, (from, to)| r.replace(from, to));
    exact(&normalized)
}
