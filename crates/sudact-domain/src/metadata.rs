//! Metadata module - the seven-field record and its tagged values
//!
//! Field extractors never fail softly with an empty string: every outcome is
//! one of the variants below, and the legacy sentinel strings exist only at
//! the rendering boundary ([`MetadataRecord::entries`]).

use std::fmt;

/// Rendering of a field that had no source text at all
pub const UNDEFINED: &str = "undefined";

/// Rendering of a region string that existed but did not resolve
pub const REGION_UNDETERMINED: &str = "Регион не определен";

/// Rendering of an accused field with no names
pub const NO_INFORMATION: &str = "нет информации";

/// Rendering of an article field with no judicial-practice references
pub const NO_PRACTICE_INFORMATION: &str = "нет информации по судебной практике";

/// Outcome of a single-valued field extractor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// A non-empty value was extracted
    Found(String),

    /// No source text for the field existed
    Absent,

    /// Source text existed but could not be resolved to a known value
    Undetermined,
}

impl FieldValue {
    /// Wrap extracted text, mapping empty or whitespace-only text to `Absent`
    ///
    /// # Examples
    ///
    /// ```
    /// use sudact_domain::FieldValue;
    ///
    /// assert_eq!(FieldValue::from_text("  "), FieldValue::Absent);
    /// assert_eq!(FieldValue::from_text(" Иванов "), FieldValue::Found("Иванов".to_string()));
    /// ```
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Found(trimmed.to_string())
        }
    }

    /// Wrap an optional extraction result
    pub fn from_option(value: Option<String>) -> Self {
        value.map(Self::from_text).unwrap_or(FieldValue::Absent)
    }

    /// The extracted value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::Found(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Whether a value was extracted
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }

    /// Render with the legacy sentinel strings
    pub fn as_legacy_str(&self) -> &str {
        match self {
            FieldValue::Found(v) => v.as_str(),
            FieldValue::Absent => UNDEFINED,
            FieldValue::Undetermined => REGION_UNDETERMINED,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_legacy_str())
    }
}

/// Statute references found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRefs {
    /// Distinct references in order of first appearance
    Found(Vec<String>),

    /// No judicial-practice reference was found
    Absent,
}

impl ArticleRefs {
    /// Build from collected references, `Absent` when none survive
    pub fn from_refs(refs: Vec<String>) -> Self {
        let refs: Vec<String> = refs.into_iter().filter(|r| !r.trim().is_empty()).collect();
        if refs.is_empty() {
            ArticleRefs::Absent
        } else {
            ArticleRefs::Found(refs)
        }
    }

    /// Render as a comma-joined string or the sentinel
    pub fn to_legacy_string(&self) -> String {
        match self {
            ArticleRefs::Found(refs) => refs.join(", "),
            ArticleRefs::Absent => NO_PRACTICE_INFORMATION.to_string(),
        }
    }
}

/// Outcome of accused-name extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accused {
    /// One name: the only distinct name, or the dominant one
    Identified(Vec<String>),

    /// Several distinct names with no dominant one (co-defendants or noise)
    Ambiguous(Vec<String>),

    /// No name survived any extraction stage
    Absent,
}

impl Accused {
    /// Names carried by this outcome (empty for `Absent`)
    pub fn names(&self) -> &[String] {
        match self {
            Accused::Identified(names) | Accused::Ambiguous(names) => names,
            Accused::Absent => &[],
        }
    }

    /// Render as a value: a list of names or the sentinel string
    pub fn to_value(&self) -> MetadataValue {
        if self.names().is_empty() {
            MetadataValue::Text(NO_INFORMATION.to_string())
        } else {
            MetadataValue::List(self.names().to_vec())
        }
    }
}

/// A rendered metadata value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// A single string value
    Text(String),

    /// An ordered list of strings
    List(Vec<String>),
}

impl MetadataValue {
    /// Whether the value carries no text at all
    pub fn is_empty(&self) -> bool {
        match self {
            MetadataValue::Text(t) => t.is_empty(),
            MetadataValue::List(items) => items.is_empty(),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(t) => f.write_str(t),
            MetadataValue::List(items) => f.write_str(&items.join("; ")),
        }
    }
}

/// The fixed-key metadata record of one ruling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Ruling date as `YYYY-MM-DD`
    pub date: FieldValue,

    /// Case number
    pub number: FieldValue,

    /// Court name without case-type suffixes
    pub court: FieldValue,

    /// Canonical federal subject
    pub region: FieldValue,

    /// Presiding judge
    pub judge: FieldValue,

    /// Statute references
    pub article: ArticleRefs,

    /// Accused person name(s)
    pub accused: Accused,
}

impl MetadataRecord {
    /// Field keys in rendering order
    pub const KEYS: [&'static str; 7] = [
        "date", "number", "court", "region", "judge", "article", "accused",
    ];

    /// A record where every field is absent
    pub fn empty() -> Self {
        Self {
            date: FieldValue::Absent,
            number: FieldValue::Absent,
            court: FieldValue::Absent,
            region: FieldValue::Absent,
            judge: FieldValue::Absent,
            article: ArticleRefs::Absent,
            accused: Accused::Absent,
        }
    }

    /// Flat rendering: exactly seven `(key, value)` pairs, none empty
    pub fn entries(&self) -> Vec<(&'static str, MetadataValue)> {
        let text = |v: &FieldValue| MetadataValue::Text(v.as_legacy_str().to_string());
        vec![
            ("date", text(&self.date)),
            ("number", text(&self.number)),
            ("court", text(&self.court)),
            ("region", text(&self.region)),
            ("judge", text(&self.judge)),
            ("article", MetadataValue::Text(self.article.to_legacy_string())),
            ("accused", self.accused.to_value()),
        ]
    }
}
