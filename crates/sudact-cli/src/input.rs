//! Reading rulings from disk.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use sudact_domain::RawDocument;
use sudact_extractor::NormalizedDocument;

/// Extensions picked up from a batch directory
const EXTENSIONS: [&str; 3] = ["html", "htm", "json"];

/// JSON form of a stored ruling.
#[derive(Debug, Deserialize)]
struct StoredDocument {
    #[serde(alias = "db_id", default)]
    id: i64,
    #[serde(default)]
    header: Option<String>,
    #[serde(default)]
    url: String,
    html: String,
}

/// Load one ruling
///
/// `.json` files hold a stored document; anything else is raw HTML whose
/// header is taken from its `<h1>`. `id` and `url` apply to HTML input only.
pub fn load_document(path: &Path, id: i64, url: &str) -> Result<RawDocument> {
    let contents = fs::read_to_string(path)?;

    if is_json(path) {
        let stored: StoredDocument = serde_json::from_str(&contents)?;
        let header = stored
            .header
            .unwrap_or_else(|| heading_of(&stored.html));
        return Ok(RawDocument::new(stored.id, header, stored.url, stored.html));
    }

    let header = heading_of(&contents);
    Ok(RawDocument::new(id, header, url, contents))
}

/// Ruling files of a directory, sorted by name
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.contains(&e.to_lowercase().as_str()));
        if path.is_file() && supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn heading_of(html: &str) -> String {
    NormalizedDocument::parse(html).heading().to_string()
}
