//! Input reader with automatic decompression support.
//!
//! Reject files are often archived compressed alongside the load logs, so
//! `.gz` and `.zst` files are decompressed transparently while streaming.
//!
//! # Supported Inputs
//!
//! - Plain text files
//! - Gzip compressed files (.gz)
//! - Zstandard compressed files (.zst)
//! - Standard input, named `-`
//!
//! # Examples
//!
//! ```no_run
//! use rejected_record_tools::utils::reader::open_input;
//! use std::io::{BufRead, BufReader};
//!
//! let reader = BufReader::new(open_input("rejects.err.gz").unwrap());
//! for line in reader.lines() {
//!     let line = line.unwrap();
//!     // Process line...
//! }
//! ```

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Name that selects standard input instead of a file
pub const STDIN_NAME: &str = "-";

/// Opens a file with automatic decompression based on extension.
///
/// - `.gz` → Gzip decompression
/// - `.zst` → Zstandard decompression
/// - Otherwise → Plain file
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    match extension(path) {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => {
            let decoder = zstd::Decoder::new(file).with_context(|| {
                format!("Failed to create zstd decoder for: {}", path.display())
            })?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}

/// Opens a named input, treating `-` as standard input.
pub fn open_input(name: &str) -> Result<Box<dyn Read + Send>> {
    if name == STDIN_NAME {
        Ok(Box::new(io::stdin()))
    } else {
        open_file(name)
    }
}

/// Size in bytes of the uncompressed content, when it is known up front.
///
/// Returns `None` for standard input, compressed files and unreadable paths.
pub fn input_size(name: &str) -> Option<u64> {
    if name == STDIN_NAME || is_compressed(Path::new(name)) {
        return None;
    }
    std::fs::metadata(name).ok().map(|m| m.len())
}

fn is_compressed(path: &Path) -> bool {
    matches!(extension(path), "gz" | "zst")
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}
