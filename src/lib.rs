//! # Rejected Record Tools
//!
//! Fast command-line tools for summarizing the rejected record files written
//! by Essbase-style data loads.
//!
//! ## Overview
//!
//! A data load that cannot resolve a member against the outline writes a
//! line like this for every record it drops:
//!
//! ```text
//! \\ Member Ac.0170100 Not Found In Database
//! ```
//!
//! On a bad day a single load produces tens of thousands of these. This crate
//! tallies them per member and answers the questions that matter when fixing
//! the outline: how many records were dropped, how many distinct members are
//! missing, which members are the worst offenders, and how much of the damage
//! the top few account for.
//!
//! ## Architecture
//!
//! - [`reject`] - The I/O-free core: line matcher, aggregator and summary
//! - [`commands`] - The `summary` and `export` command implementations
//! - [`utils`] - Input acquisition (compressed files, stdin), parallel
//!   aggregation, progress and formatting
//!
//! ## Example Usage
//!
//! ```bash
//! # Summary of one load
//! reject-summary summary load.err
//!
//! # Many loads, processed in parallel, compressed files included
//! reject-summary summary logs/*.err logs/archive/*.err.gz --top 20
//!
//! # Every member with its count, for a spreadsheet
//! reject-summary export logs/*.err --output rejects.csv
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use rejected_record_tools::reject::Aggregator;
//!
//! let mut aggregator = Aggregator::new();
//! for line in [
//!     r"\\ Member Ac.0170100 Not Found In Database",
//!     r"\\ Member Ac.0170100 Not Found In Database",
//!     r"\\ Member January Not Found In Database",
//! ] {
//!     aggregator.submit(line);
//! }
//!
//! let summary = aggregator.finalize();
//! assert_eq!(summary.unique_count(), 2);
//! assert!((summary.concentration_ratio(1) - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod commands;
pub mod reject;
pub mod utils;
