//! Statute references

use crate::html::{Inline, NormalizedDocument};
use sudact_domain::ArticleRefs;

const PRACTICE_PHRASE: &str = "Судебная практика по применению";
const ARTICLE_MARKER: &str = "ст.";

/// Collect statute references from judicial-practice links and the header
///
/// References are deduplicated in order of first appearance.
pub fn extract_articles(doc: &NormalizedDocument) -> ArticleRefs {
    let mut refs = practice_references(doc);
    refs.extend(header_link_reference(doc.header_items()));

    let mut unique: Vec<String> = Vec::with_capacity(refs.len());
    for reference in refs {
        if !unique.contains(&reference) {
            unique.push(reference);
        }
    }
    ArticleRefs::from_refs(unique)
}

/// Text after the last "ст." of each judicial-practice fragment
fn practice_references(doc: &NormalizedDocument) -> Vec<String> {
    doc.fragments()
        .filter(|fragment| fragment.contains(PRACTICE_PHRASE))
        .filter_map(|fragment| fragment.rsplit(ARTICLE_MARKER).next())
        .map(|reference| reference.trim().to_string())
        .filter(|reference| !reference.is_empty())
        .collect()
}

/// First link after the last item of the header zone mentioning "ст."
fn header_link_reference(items: &[Inline]) -> Option<String> {
    let last_mention = items.iter().rposition(|item| match item {
        Inline::Text(t) | Inline::Link(t) => t.contains(ARTICLE_MARKER),
        Inline::Break => false,
    })?;
    items[last_mention + 1..].iter().find_map(|item| match item {
        Inline::Link(t) => Some(t.trim().to_string()),
        _ => None,
    })
}
