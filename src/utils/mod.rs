//! Utility functions and helpers.
//!
//! This module provides the I/O shell around the [`reject`](crate::reject) core:
//!
//! - [`reader`] - Input reader with automatic decompression and stdin support
//! - [`processor`] - Feeds named inputs through an aggregator with statistics
//! - [`parallel`] - One aggregator per file on rayon workers, merged in order
//! - [`progress`] - Progress display
//! - [`format`] - Number and percentage formatting
//!
//! # Examples
//!
//! ```no_run
//! use rejected_record_tools::utils::processor::{aggregate_inputs, InputOptions};
//!
//! let files = vec!["load1.err".to_string(), "load2.err.gz".to_string()];
//! let (aggregator, stats) = aggregate_inputs(&files, &InputOptions::default()).unwrap();
//! println!("{} rejected records", stats.matched_lines);
//! ```

pub mod format;
pub mod parallel;
pub mod processor;
pub mod progress;
pub mod reader;
