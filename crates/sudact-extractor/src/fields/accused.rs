//! Accused person names from the header zone
//!
//! Legal headers mention many people (defendant, victim, counsel, clerk).
//! Extraction narrows the header to short lines near a charge marker,
//! applies a battery of name patterns, and breaks ties by frequency.

use crate::config::ExtractorConfig;
use crate::patterns::{
    FIO_ANONYMIZED, FIO_ANONYMIZED_SURNAME, FIO_CAPS, FIO_INITIALS_SURNAME,
    FIO_SURNAME_DOUBLE_INITIAL, FIO_SURNAME_INITIALS,
};
use std::fmt::Display;
use sudact_domain::person::title_case;
use sudact_domain::traits::NameExtractor;
use sudact_domain::Accused;
use tracing::{debug, warn};

const CONVICTED: &str = "осужденн";
const IN_RESPECT_OF: &str = "в отношении";
const DEFENDANT: &str = "подсудим";
const OF_DEFENDANT: &str = "подсудимого";
const TO: &str = " к ";

/// Extract the accused from the header zone lines
///
/// Recognizer failures are logged and treated as "no names".
pub fn extract_accused<N>(header_lines: &[String], config: &ExtractorConfig, ner: &N) -> Accused
where
    N: NameExtractor,
    N::Error: Display,
{
    let candidates = candidate_lines(&header_lines.join("\n"));
    let filtered: Vec<&str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|line| is_charge_line(line) && line.chars().count() < config.accused_max_line_chars)
        .collect();

    let narrowed = narrow(&filtered, config.accused_short_line_chars);
    debug!(
        candidates = candidates.len(),
        filtered = filtered.len(),
        narrowed = narrowed.len(),
        "accused candidate lines"
    );

    let mut names = names_from_lines(&narrowed, ner);
    if names.is_empty() && narrowed.len() != filtered.len() {
        debug!("narrowed lines yielded no names, using every candidate line");
        names = battery(&filtered, ner);
    }

    let names = names.into_iter().map(|n| n.replace(',', ".")).collect();
    consolidate_names(names, config.accused_dominance_threshold)
}

/// Split header text into candidate lines
///
/// Commas by default; line breaks when some comma piece holds two or more
/// names; then commas again inside any line still holding more than two.
fn candidate_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<&str> = text.split(',').filter(|l| !l.trim().is_empty()).collect();

    if lines.iter().any(|line| name_count(line) > 1) {
        lines = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    }

    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        if name_count(line) > 2 {
            result.extend(line.split(',').map(str::to_string));
        } else {
            result.push(line.to_string());
        }
    }
    result
}

fn name_count(line: &str) -> usize {
    FIO_SURNAME_INITIALS.find_iter(line).count() + FIO_INITIALS_SURNAME.find_iter(line).count()
}

fn is_charge_line(line: &str) -> bool {
    [CONVICTED, IN_RESPECT_OF, DEFENDANT, TO]
        .iter()
        .any(|marker| line.contains(marker))
}

/// Collapse to the last short line mentioning the defendant or " к "
fn narrow<'a>(lines: &[&'a str], short_chars: usize) -> Vec<&'a str> {
    lines
        .iter()
        .rev()
        .find(|line| {
            (line.contains(DEFENDANT) || line.contains(TO)) && line.chars().count() < short_chars
        })
        .map(|line| vec![*line])
        .unwrap_or_else(|| lines.to_vec())
}

/// Names from the narrowed lines
///
/// A single line naming "подсудимого" or " к " is read deterministically;
/// anything else goes through the full pattern battery.
fn names_from_lines<N>(lines: &[&str], ner: &N) -> Vec<String>
where
    N: NameExtractor,
    N::Error: Display,
{
    if let [line] = lines {
        if line.contains(OF_DEFENDANT) {
            return deterministic_names(line);
        }
        if let Some((_, tail)) = line.rsplit_once(TO) {
            return deterministic_names(tail);
        }
    }
    battery(lines, ner)
}

fn deterministic_names(text: &str) -> Vec<String> {
    pattern_names(text).iter().map(|n| title_case(n)).collect()
}

/// Surname/initials patterns (title-cased), anonymized surnames and
/// capitalized full names, in that order
fn pattern_names(line: &str) -> Vec<String> {
    let titled = FIO_SURNAME_INITIALS
        .find_iter(line)
        .chain(FIO_INITIALS_SURNAME.find_iter(line))
        .map(|m| title_case(m.as_str()));
    let raw = FIO_ANONYMIZED_SURNAME
        .find_iter(line)
        .chain(FIO_CAPS.find_iter(line))
        .map(|m| m.as_str().to_string());
    titled.chain(raw).collect()
}

/// Pattern battery with per-line fallbacks
///
/// Each line stops at its first stage that finds anything: the main
/// patterns, then anonymization tags, then surname with double initial,
/// then the name recognizer.
fn battery<N>(lines: &[&str], ner: &N) -> Vec<String>
where
    N: NameExtractor,
    N::Error: Display,
{
    let mut names = Vec::new();
    for line in lines {
        let line = line.replace(['<', '>'], "");

        let mut found = pattern_names(&line);
        if found.is_empty() {
            found = matches(&FIO_ANONYMIZED, &line);
        }
        if found.is_empty() {
            found = matches(&FIO_SURNAME_DOUBLE_INITIAL, &line);
        }
        if found.is_empty() {
            found = recognized_names(&line, ner);
        }
        names.extend(found);
    }
    names
}

fn matches(pattern: &regex::Regex, line: &str) -> Vec<String> {
    pattern
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn recognized_names<N>(line: &str, ner: &N) -> Vec<String>
where
    N: NameExtractor,
    N::Error: Display,
{
    match ner.extract_person_names(&title_case(line)) {
        Ok(people) => people.iter().filter_map(|p| p.initials_form()).collect(),
        Err(e) => {
            warn!("Name recognizer failed, treating line as nameless: {}", e);
            Vec::new()
        }
    }
}

/// Reduce every extracted occurrence to the final outcome
///
/// One distinct name is identified directly. Otherwise the most frequent
/// name (ties go to the first seen) wins when its share of all occurrences
/// exceeds `threshold`; failing that, the whitespace-insensitive distinct
/// names are returned as ambiguous.
///
/// # Examples
///
/// ```
/// use sudact_extractor::fields::consolidate_names;
/// use sudact_domain::Accused;
///
/// let mut names = vec!["Иванов А.Б.".to_string(); 4];
/// names.push("Петров В.И.".to_string());
/// assert_eq!(
///     consolidate_names(names, 0.6),
///     Accused::Identified(vec!["Иванов А.Б.".to_string()])
/// );
/// ```
pub fn consolidate_names(names: Vec<String>, threshold: f64) -> Accused {
    if names.is_empty() {
        return Accused::Absent;
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for name in &names {
        match counts.iter_mut().find(|(n, _)| *n == name.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.as_str(), 1)),
        }
    }

    if counts.len() == 1 {
        return Accused::Identified(vec![names[0].clone()]);
    }

    let (top, top_count) = counts
        .iter()
        .fold(counts[0], |best, current| if current.1 > best.1 { *current } else { best });
    if top_count as f64 / names.len() as f64 > threshold {
        return Accused::Identified(vec![top.to_string()]);
    }

    let mut seen: Vec<String> = Vec::new();
    let mut distinct: Vec<String> = Vec::new();
    for name in &names {
        let key: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        if !seen.contains(&key) {
            seen.push(key);
            distinct.push(name.clone());
        }
    }

    if distinct.len() == 1 {
        Accused::Identified(distinct)
    } else {
        Accused::Ambiguous(distinct)
    }
}
