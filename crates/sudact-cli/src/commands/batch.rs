//! Batch command implementation.

use super::{build_parser, export_document};
use crate::cli::BatchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{collect_files, load_document};
use crate::output::Formatter;
use std::path::PathBuf;
use sudact_domain::RawDocument;
use sudact_extractor::BatchRunner;

/// Execute the batch command.
///
/// Unreadable files and failed documents are reported and counted; the
/// command fails only when nothing could be parsed.
pub fn execute_batch(args: BatchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let files = collect_files(&args.dir)?;
    if files.is_empty() {
        println!("{}", formatter.warning("No rulings found."));
        return Ok(());
    }

    let mut failed = 0;
    let mut sources: Vec<PathBuf> = Vec::with_capacity(files.len());
    let mut docs: Vec<RawDocument> = Vec::with_capacity(files.len());
    for (index, path) in files.into_iter().enumerate() {
        match load_document(&path, index as i64, "") {
            Ok(doc) => {
                docs.push(doc);
                sources.push(path);
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), e)));
            }
        }
    }

    let concurrency = args.concurrency.unwrap_or(config.batch.concurrency);
    let runner = BatchRunner::new(build_parser(config)?, concurrency);
    let runtime = tokio::runtime::Runtime::new()?;

    let total = sources.len() + failed;
    let parsed = if args.metadata_only {
        let ids: Vec<i64> = docs.iter().map(|d| d.id).collect();
        let results = runtime.block_on(runner.run_metadata(docs));

        let mut records = Vec::new();
        for ((id, path), result) in ids.into_iter().zip(&sources).zip(results) {
            match result {
                Ok(record) => records.push((id, record)),
                Err(e) => {
                    failed += 1;
                    eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), e)));
                }
            }
        }
        println!("{}", formatter.format_metadata(&records)?);
        records.len()
    } else {
        let results = runtime.block_on(runner.run(docs));

        let mut parsed_docs = Vec::new();
        for (path, result) in sources.iter().zip(results) {
            match result {
                Ok(doc) => parsed_docs.push(doc),
                Err(e) => {
                    failed += 1;
                    eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), e)));
                }
            }
        }
        println!("{}", formatter.format_documents(&parsed_docs)?);

        if let Some(dir) = &args.output {
            for doc in &parsed_docs {
                export_document(dir, doc)?;
            }
            eprintln!(
                "{}",
                formatter.info(&format!("Saved {} record(s) to {}", parsed_docs.len(), dir.display()))
            );
        }
        parsed_docs.len()
    };

    eprintln!("{}", formatter.batch_summary(parsed, failed));

    if parsed == 0 {
        return Err(CliError::InvalidInput(format!(
            "none of the {} document(s) could be parsed",
            total
        )));
    }
    Ok(())
}
