//! Value types shared by the aggregator and summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A member name and the number of records rejected because of it.
///
/// Created when a [`Summary`](super::Summary) is built and never changed
/// afterwards, so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RejectionCount {
    member: String,
    count: u64,
}

impl RejectionCount {
    pub fn new(member: impl Into<String>, count: u64) -> Self {
        Self {
            member: member.into(),
            count,
        }
    }

    /// Member name that could not be resolved, such as `Ac.0170100` or `January`
    pub fn member(&self) -> &str {
        &self.member
    }

    /// How many records were rejected for this member
    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for RejectionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.member, self.count)
    }
}

impl From<(&str, u64)> for RejectionCount {
    fn from((member, count): (&str, u64)) -> Self {
        Self::new(member, count)
    }
}
