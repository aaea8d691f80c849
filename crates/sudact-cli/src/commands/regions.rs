//! Regions command implementation.

use crate::error::Result;
use crate::output::Formatter;
use sudact_extractor::regions::sorted_regions;

/// Execute the regions command.
pub fn execute_regions(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_regions(&sorted_regions())?);
    Ok(())
}
