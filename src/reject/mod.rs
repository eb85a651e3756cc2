//! Core rejected-record pipeline.
//!
//! Everything in this module is pure in-memory processing. Lines go in,
//! a ranked [`Summary`] comes out:
//!
//! - [`matcher`] - Recognizes rejection lines and extracts the member name
//! - [`aggregator`] - Running per-member tallies across lines and files
//! - [`summary`] - Immutable ranked view with totals, top-N and ratios
//! - [`types`] - The [`RejectionCount`] pair stored in a summary
//!
//! # Example
//!
//! ```
//! use rejected_record_tools::reject::Aggregator;
//!
//! let mut aggregator = Aggregator::new();
//! aggregator.submit(r"\\ Member Ac.0170100 Not Found In Database");
//! aggregator.submit(r"\\ Member January Not Found In Database");
//! aggregator.submit(r"\\ Member Ac.0170100 Not Found In Database");
//! aggregator.submit("unrelated line");
//!
//! let summary = aggregator.finalize();
//! assert_eq!(summary.total_count(), 3);
//! assert_eq!(summary.top_n(1)[0].member(), "Ac.0170100");
//! ```

pub mod aggregator;
pub mod matcher;
pub mod summary;
pub mod types;

pub use aggregator::Aggregator;
pub use matcher::match_member;
pub use summary::Summary;
pub use types::RejectionCount;
