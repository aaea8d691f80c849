//! Output formatting for the CLI.
//!
//! JSON output keeps the legacy record shape
//! `{db_id, header, url, metadata, parsed}` with sentinel strings for
//! absent values, so existing consumers keep working.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Map, Value};
use sudact_domain::segment::NON_STANDARD_DOCUMENT;
use sudact_domain::{MetadataRecord, MetadataValue, ParsedDocument, Segmentation};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters of zone text shown in table previews
const PREVIEW_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format fully parsed documents.
    pub fn format_documents(&self, docs: &[ParsedDocument]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = docs.iter().map(document_json).collect();
                Ok(serde_json::to_string_pretty(&single_or_array(values))?)
            }
            OutputFormat::Table => Ok(docs
                .iter()
                .map(|doc| self.document_table(doc))
                .collect::<Vec<_>>()
                .join("\n\n")),
            OutputFormat::Quiet => Ok(docs
                .iter()
                .map(|doc| format!("{}\t{}", doc.id, doc.export_stem()))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format metadata-only results.
    pub fn format_metadata(&self, records: &[(i64, MetadataRecord)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = records
                    .iter()
                    .map(|(id, record)| json!({ "db_id": id, "metadata": metadata_json(record) }))
                    .collect();
                Ok(serde_json::to_string_pretty(&single_or_array(values))?)
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No documents parsed.", "yellow"));
                }
                let mut builder = Builder::default();
                let mut header = vec!["ID"];
                header.extend(MetadataRecord::KEYS);
                builder.push_record(header);
                for (id, record) in records {
                    let mut row = vec![id.to_string()];
                    row.extend(record.entries().into_iter().map(|(_, v)| v.to_string()));
                    builder.push_record(row);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|(id, record)| {
                    format!(
                        "{}\t{}\t{}",
                        id,
                        record.date.as_legacy_str(),
                        record.number.as_legacy_str()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the canonical region list.
    pub fn format_regions(&self, regions: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(regions)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Region"]);
                for (i, region) in regions.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), region.to_string()]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(regions.join("\n")),
        }
    }

    fn document_table(&self, doc: &ParsedDocument) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["db_id".to_string(), doc.id.to_string()]);
        builder.push_record(["header", doc.header.as_str()]);
        builder.push_record(["url", doc.url.as_str()]);
        for (key, value) in doc.metadata.entries() {
            builder.push_record([key.to_string(), value.to_string()]);
        }
        let metadata = self.finish_table(builder);

        let zones = match &doc.segmentation {
            Segmentation::NonStandardDocument => self.colorize(NON_STANDARD_DOCUMENT, "yellow"),
            Segmentation::Segmented(body) if body.is_empty() => {
                self.colorize("Main part is empty.", "yellow")
            }
            Segmentation::Segmented(body) => {
                let mut builder = Builder::default();
                builder.push_record(["Zone", "Spans", "Preview"]);
                for (label, texts) in body.groups() {
                    builder.push_record([
                        label.title().to_string(),
                        texts.len().to_string(),
                        preview(&texts.join(" ")),
                    ]);
                }
                self.finish_table(builder)
            }
        };

        format!("{}\n{}", metadata, zones)
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the batch outcome.
    pub fn batch_summary(&self, parsed: usize, failed: usize) -> String {
        let message = format!("Parsed {} document(s), {} failed", parsed, failed);
        if failed == 0 {
            self.success(&message)
        } else {
            self.warning(&message)
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Legacy JSON record of one parsed document.
pub fn document_json(doc: &ParsedDocument) -> Value {
    json!({
        "db_id": doc.id,
        "header": doc.header,
        "url": doc.url,
        "metadata": metadata_json(&doc.metadata),
        "parsed": segmentation_json(&doc.segmentation),
    })
}

/// Seven metadata keys with sentinel strings for absent values.
pub fn metadata_json(record: &MetadataRecord) -> Value {
    let mut map = Map::new();
    for (key, value) in record.entries() {
        let value = match value {
            MetadataValue::Text(text) => Value::String(text),
            MetadataValue::List(items) => Value::from(items),
        };
        map.insert(key.to_string(), value);
    }
    Value::Object(map)
}

/// Label key to span texts, or the non-standard marker.
pub fn segmentation_json(segmentation: &Segmentation) -> Value {
    match segmentation {
        Segmentation::NonStandardDocument => Value::String(NON_STANDARD_DOCUMENT.to_string()),
        Segmentation::Segmented(body) => {
            let mut map = Map::new();
            for (label, texts) in body.groups() {
                map.insert(label.as_str().to_string(), Value::from(texts));
            }
            Value::Object(map)
        }
    }
}

fn single_or_array(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudact_domain::{Accused, FieldValue, Label, SegmentedBody, Span};

    fn create_test_document(segmentation: Segmentation) -> ParsedDocument {
        let mut metadata = MetadataRecord::empty();
        metadata.date = FieldValue::Found("2015-07-11".to_string());
        metadata.number = FieldValue::Found("1-15/2015".to_string());
        metadata.court = FieldValue::Found("Ленинский районный суд г. Пензы".to_string());
        metadata.region = FieldValue::Undetermined;
        metadata.accused = Accused::Ambiguous(vec!["Иванов А.Б.".into(), "Петров В.Г.".into()]);
        ParsedDocument {
            id: 3,
            header: "Приговор № 1-15/2015 от 11 июля 2015 г.".to_string(),
            url: "https://example.org/3".to_string(),
            metadata,
            segmentation,
        }
    }

    fn segmented() -> Segmentation {
        Segmentation::Segmented(SegmentedBody::new(vec![
            Span::new(Label::Fabula, vec!["Иванов похитил.".into(), "Ушел.".into()]),
            Span::new(Label::Witness, vec!["Петров видел.".into()]),
        ]))
    }

    #[test]
    fn test_json_keeps_legacy_shape() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_documents(&[create_test_document(segmented())])
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["db_id"], 3);
        assert_eq!(value["metadata"]["judge"], "undefined");
        assert_eq!(value["metadata"]["region"], "Регион не определен");
        assert_eq!(value["metadata"]["article"], "нет информации по судебной практике");
        assert_eq!(value["metadata"]["accused"][1], "Петров В.Г.");
        assert_eq!(value["parsed"]["fabula"][0], "Иванов похитил. Ушел.");
        assert_eq!(value["parsed"]["witness"][0], "Петров видел.");
    }

    #[test]
    fn test_json_non_standard_marker() {
        let value = document_json(&create_test_document(Segmentation::NonStandardDocument));
        assert_eq!(value["parsed"], NON_STANDARD_DOCUMENT);
    }

    #[test]
    fn test_json_batch_is_array() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let records = vec![(1, MetadataRecord::empty()), (2, MetadataRecord::empty())];
        let value: Value = serde_json::from_str(&formatter.format_metadata(&records).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["metadata"]["accused"], "нет информации");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_documents(&[create_test_document(segmented())])
            .unwrap();
        assert!(output.contains("Field"));
        assert!(output.contains("Фабула"));
        assert!(output.contains("Показания свидетелей"));
    }

    #[test]
    fn test_quiet_format_uses_export_stem() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_documents(&[create_test_document(Segmentation::NonStandardDocument)])
            .unwrap();
        assert_eq!(output, "3\tленинский_приговор__1-15_2015");
    }

    #[test]
    fn test_empty_metadata_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_metadata(&[]).unwrap();
        assert!(output.contains("No documents parsed"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.batch_summary(2, 1), "⚠ Parsed 2 document(s), 1 failed");
    }

    #[test]
    fn test_preview_truncates() {
        let long = "а".repeat(200);
        let short = preview(&long);
        assert_eq!(short.chars().count(), PREVIEW_CHARS + 1);
        assert!(short.ends_with('…'));
    }
}
