//! Parse command implementation.

use super::{build_parser, export_document};
use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::load_document;
use crate::output::Formatter;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let raw = load_document(&args.file, args.id, &args.url)?;
    let parser = build_parser(config)?;

    if args.metadata_only {
        let record = parser.parse_metadata(&raw)?;
        println!("{}", formatter.format_metadata(&[(raw.id, record)])?);
        return Ok(());
    }

    let parsed = parser.parse(&raw)?;
    println!("{}", formatter.format_documents(std::slice::from_ref(&parsed))?);

    if let Some(dir) = args.output {
        let path = export_document(&dir, &parsed)?;
        eprintln!("{}", formatter.success(&format!("Saved {}", path.display())));
    }

    Ok(())
}
