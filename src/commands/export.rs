//! Full per-member export.
//!
//! Writes every rejected member with its count to CSV, most rejected first,
//! for loading into a spreadsheet or fixing up the outline in bulk.
//!
//! # Usage
//!
//! ```bash
//! reject-summary export load.err --output rejects.csv
//! reject-summary export logs/*.err --output rejects.csv --min-count 10
//! ```

use crate::commands::create_output;
use crate::commands::summary::write_csv;
use crate::utils::processor::{aggregate_inputs, InputOptions};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Export counts for all members rejected at least `min_count` times.
///
/// Returns the number of rows written.
pub fn run(
    inputs: &[String],
    output: Option<&str>,
    min_count: u64,
    input: &InputOptions,
) -> Result<usize> {
    let (aggregator, _stats) = aggregate_inputs(inputs, input)?;
    let summary = aggregator.finalize();

    // Entries are sorted descending, so the kept rows are a prefix
    let kept = summary
        .entries()
        .iter()
        .take_while(|e| e.count() >= min_count)
        .count();

    let mut writer = create_output(output)?;
    write_csv(&summary.entries()[..kept], summary.total_count(), &mut writer)?;
    writer.flush().context("Failed to write export")?;

    info!(
        "Exported {} of {} members (min count {})",
        kept,
        summary.unique_count(),
        min_count
    );
    if let Some(path) = output {
        info!("CSV written to: {}", path);
    }
    Ok(kept)
}
