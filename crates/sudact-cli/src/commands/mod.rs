//! Command implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod regions;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::regions::execute_regions;

use crate::config::Config;
use crate::error::Result;
use crate::output::document_json;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudact_domain::ParsedDocument;
use sudact_extractor::DocumentParser;
use sudact_nlp::{HttpClassifier, PatronymicNameExtractor, RuSentenceTokenizer};

/// Parser wired to the production capabilities
pub type Parser = DocumentParser<HttpClassifier, RuSentenceTokenizer, PatronymicNameExtractor>;

/// Build the parser from configuration.
pub fn build_parser(config: &Config) -> Result<Parser> {
    let classifier = HttpClassifier::with_timeout(
        &config.classifier.endpoint,
        &config.classifier.model,
        Duration::from_secs(config.classifier.timeout_secs),
    )?;

    Ok(DocumentParser::new(
        classifier,
        RuSentenceTokenizer::new(),
        PatronymicNameExtractor::new(),
        config.extractor.clone(),
    )?)
}

/// Write the JSON record of a document as `<export stem>.json`.
pub fn export_document(dir: &Path, doc: &ParsedDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", doc.export_stem()));
    fs::write(&path, serde_json::to_string_pretty(&document_json(doc))?)?;
    Ok(path)
}
