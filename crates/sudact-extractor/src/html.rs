//! HTML normalization
//!
//! Linearizes a ruling page into an inline stream of text, link text and
//! line breaks. Every view the field extractors need (heading, lines, text
//! fragments, the header zone, the court node) is derived from that stream
//! once, up front.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Placeholder heading for pages without an `<h1>`
pub const MISSING_HEADING: &str = "";

/// Elements whose content is never text
const SKIPPED: [&str; 5] = ["head", "script", "style", "noscript", "template"];

/// Elements that end a line
const BLOCK: [&str; 22] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "tr", "table", "section",
    "article", "header", "footer", "blockquote", "pre", "dd", "dt", "hr",
];

static H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("valid h1 selector"));

const COURT_CLASS: &str = "b-justice";

static COURT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.b-justice").expect("valid court selector"));

static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid a selector"));

/// One element of the linearized page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Text outside links
    Text(String),
    /// Text of an `<a>` element
    Link(String),
    /// Line separator from `<br>` or either edge of a block element
    Break,
}

impl Inline {
    fn text(&self) -> &str {
        match self {
            Inline::Text(t) | Inline::Link(t) => t,
            Inline::Break => "",
        }
    }
}

/// A ruling page reduced to text
#[derive(Debug, Clone, Default)]
pub struct NormalizedDocument {
    heading: String,
    items: Vec<Inline>,
    lines: Vec<String>,
    court: Option<String>,
    header_end: usize,
    header_lines: usize,
}

impl NormalizedDocument {
    /// Parse and normalize a page
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let heading = document
            .select(&H1)
            .next()
            .map(|h1| collapse_whitespace(&h1.text().collect::<String>()).trim().to_string())
            .unwrap_or_else(|| MISSING_HEADING.to_string());

        let court = document.select(&COURT).filter(is_court_node).last().map(|node| {
            let source = node.select(&LINK).next().unwrap_or(node);
            collapse_whitespace(&source.text().collect::<String>())
                .trim()
                .to_string()
        });

        let mut items = Vec::new();
        walk(document.root_element(), &mut items);

        Self::from_items(heading, items, court)
    }

    /// Build from an already linearized stream
    pub fn from_items(heading: String, items: Vec<Inline>, court: Option<String>) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut header_end = items.len();
        let mut header_lines = None;
        let mut line_start = 0;

        for (i, item) in items.iter().enumerate() {
            if *item == Inline::Break {
                let line = current.trim();
                if header_lines.is_none() && marks_established(line) {
                    header_lines = Some(lines.len());
                    header_end = line_start;
                }
                if !line.is_empty() {
                    lines.push(line.to_string());
                }
                current.clear();
                line_start = i + 1;
            } else {
                current.push_str(item.text());
            }
        }
        let line = current.trim();
        if header_lines.is_none() && marks_established(line) {
            header_lines = Some(lines.len());
            header_end = line_start;
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }

        let header_lines = header_lines.unwrap_or(lines.len());
        Self {
            heading,
            items,
            lines,
            court,
            header_end,
            header_lines,
        }
    }

    /// Text of the first `<h1>`, or the placeholder
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Non-empty trimmed lines in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined with the line separator
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Individual text and link runs
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|i| **i != Inline::Break)
            .map(Inline::text)
    }

    /// Text of every link in document order
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|i| match i {
            Inline::Link(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Lines before the "установил" line; every line when it is missing
    pub fn header_lines(&self) -> &[String] {
        &self.lines[..self.header_lines]
    }

    /// Inline items of the header zone
    pub fn header_items(&self) -> &[Inline] {
        &self.items[..self.header_end]
    }

    /// Text of the last node classed exactly `b-justice`, preferring its nested link
    pub fn court_node(&self) -> Option<&str> {
        self.court.as_deref()
    }
}

/// The court node carries `b-justice` as its only class
fn is_court_node(node: &ElementRef<'_>) -> bool {
    let mut classes = node.value().classes();
    classes.next() == Some(COURT_CLASS) && classes.next().is_none()
}

/// Whether a line holds the "установил" marker, ignoring case and spaces
fn marks_established(line: &str) -> bool {
    line.to_lowercase().replace(' ', "").contains("установил")
}

fn walk(element: ElementRef<'_>, out: &mut Vec<Inline>) {
    let name = element.value().name();
    if SKIPPED.contains(&name) {
        return;
    }
    if name == "br" {
        out.push(Inline::Break);
        return;
    }
    if name == "a" {
        let text = collapse_whitespace(&element.text().collect::<String>());
        if !text.trim().is_empty() {
            out.push(Inline::Link(text));
        }
        return;
    }

    let block = BLOCK.contains(&name);
    if block && out.last().is_some_and(|last| *last != Inline::Break) {
        out.push(Inline::Break);
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let text = collapse_whitespace(text);
            if !text.is_empty() {
                out.push(Inline::Text(text));
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            walk(child_element, out);
        }
    }

    if block {
        out.push(Inline::Break);
    }
}

/// Collapse every whitespace run to one space, keeping edge spaces
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title>t</title><style>.x{}</style></head><body>
        <h1>Приговор № 1-10/2016 от 11 июля 2016 г.</h1>
        <div class="b-justice"><a href="/court">Кировский районный суд г. Томска (Томская область) - Уголовное</a></div>
        <div>Суд в составе председательствующего<br/>в отношении Иванов А.Б.,<br>
        подсудимого по <a href="/law">ст. 158 ч.2 УК РФ</a></div>
        <script>var x = "установил";</script>
        <p>У С Т А Н О В И Л:</p>
        <p>Иванов совершил кражу.</p>
        </body></html>"#;

    #[test]
    fn test_heading() {
        let doc = NormalizedDocument::parse(PAGE);
        assert_eq!(doc.heading(), "Приговор № 1-10/2016 от 11 июля 2016 г.");
    }

    #[test]
    fn test_missing_heading_uses_placeholder() {
        let doc = NormalizedDocument::parse("<p>текст</p>");
        assert_eq!(doc.heading(), MISSING_HEADING);
    }

    #[test]
    fn test_court_node_prefers_link() {
        let doc = NormalizedDocument::parse(PAGE);
        assert_eq!(
            doc.court_node(),
            Some("Кировский районный суд г. Томска (Томская область) - Уголовное")
        );
    }

    #[test]
    fn test_court_node_needs_exact_class() {
        let doc = NormalizedDocument::parse(
            r#"<div class="b-justice">Ленинский районный суд</div>
               <div class="b-justice b-related">Другой суд</div>"#,
        );
        assert_eq!(doc.court_node(), Some("Ленинский районный суд"));

        let doc = NormalizedDocument::parse(r#"<div class="b-justice wide">Другой суд</div>"#);
        assert_eq!(doc.court_node(), None);
    }

    #[test]
    fn test_scripts_are_dropped() {
        let doc = NormalizedDocument::parse(PAGE);
        assert!(!doc.text().contains("var x"));
        assert!(!doc.text().contains(".x{}"));
    }

    #[test]
    fn test_breaks_split_lines() {
        let doc = NormalizedDocument::parse(PAGE);
        assert!(doc.lines().contains(&"в отношении Иванов А.Б.,".to_string()));
        assert!(doc.lines().contains(&"подсудимого по ст. 158 ч.2 УК РФ".to_string()));
    }

    #[test]
    fn test_header_zone_stops_at_established_marker() {
        let doc = NormalizedDocument::parse(PAGE);
        let header = doc.header_lines();
        assert!(header.iter().any(|l| l.contains("подсудимого")));
        assert!(!header.iter().any(|l| l.contains("кражу")));
        assert!(!header.iter().any(|l| l.contains("У С Т А Н")));
        assert!(doc
            .header_items()
            .iter()
            .any(|i| *i == Inline::Link("ст. 158 ч.2 УК РФ".to_string())));
    }

    #[test]
    fn test_header_zone_without_marker_is_whole_document() {
        let doc = NormalizedDocument::parse("<p>первая</p><p>вторая</p>");
        assert_eq!(doc.header_lines().len(), 2);
        assert_eq!(doc.header_items().len(), doc.fragments().count() + 2);
    }

    #[test]
    fn test_links_in_order() {
        let doc = NormalizedDocument::parse(PAGE);
        let links: Vec<&str> = doc.links().collect();
        assert_eq!(links[0], "Кировский районный суд г. Томска (Томская область) - Уголовное");
        assert_eq!(links[1], "ст. 158 ч.2 УК РФ");
    }

    #[test]
    fn test_nested_block_starts_a_line() {
        let doc = NormalizedDocument::parse("<div>вводный текст<p>вложенный абзац</p>хвост</div>");
        assert_eq!(doc.lines(), ["вводный текст", "вложенный абзац", "хвост"]);
    }

    #[test]
    fn test_nested_blocks_keep_header_lines_apart() {
        let doc = NormalizedDocument::parse(
            "<div>Государственный обвинитель Петров В.И.<p>дело в отношении<b>Сидорова С.С.</b></p>\
             <p>подсудимого</p></div><p>УСТАНОВИЛ:</p>",
        );
        assert_eq!(
            doc.header_lines(),
            [
                "Государственный обвинитель Петров В.И.",
                "дело в отношенииСидорова С.С.",
                "подсудимого"
            ]
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace(" a \n\t b "), " a b ");
        assert_eq!(collapse_whitespace(""), "");
    }
}
