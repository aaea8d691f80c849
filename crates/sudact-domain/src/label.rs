//! Label module - semantic zones of a ruling's narrative body

use std::fmt;

/// Classifier label for one sentence of the main part
///
/// The closed set the pre-trained classifier emits, plus `Unlabeled` for
/// anything it leaves empty or that falls outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Factual background of the case
    Fabula,

    /// Witness testimony
    Witness,

    /// Evidentiary reasoning
    Prove,

    /// The judge's deliberation
    Meditation,

    /// No label assigned
    Unlabeled,
}

impl Label {
    /// All labels in rendering order
    pub const ALL: [Label; 5] = [
        Label::Fabula,
        Label::Witness,
        Label::Prove,
        Label::Meditation,
        Label::Unlabeled,
    ];

    /// Stable key used by the classifier and in rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fabula => "fabula",
            Label::Witness => "witness",
            Label::Prove => "prove",
            Label::Meditation => "meditation",
            Label::Unlabeled => "unlabeled",
        }
    }

    /// Human-readable Russian title of the zone
    pub fn title(&self) -> &'static str {
        match self {
            Label::Fabula => "Фабула",
            Label::Witness => "Показания свидетелей",
            Label::Prove => "Доказательства",
            Label::Meditation => "Размышления судьи",
            Label::Unlabeled => "Без метки",
        }
    }

    /// Parse a classifier label; unknown or empty labels become `Unlabeled`
    ///
    /// # Examples
    ///
    /// ```
    /// use sudact_domain::Label;
    ///
    /// assert_eq!(Label::parse("Witness"), Label::Witness);
    /// assert_eq!(Label::parse("null"), Label::Unlabeled);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fabula" => Label::Fabula,
            "witness" => Label::Witness,
            "prove" => Label::Prove,
            "meditation" => Label::Meditation,
            _ => Label::Unlabeled,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
