//! Command implementations.
//!
//! - [`summary`] - Totals, top offenders and concentration for reject files
//! - [`export`] - Full per-member counts as CSV for spreadsheets
//!
//! Both commands share input handling through
//! [`aggregate_inputs`](crate::utils::processor::aggregate_inputs) and write
//! to a file or standard output through [`create_output`].

pub mod export;
pub mod summary;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Opens the report destination: a file when a path is given, stdout otherwise.
pub fn create_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
