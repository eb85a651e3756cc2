//! Running per-member rejection tallies.
//!
//! An [`Aggregator`] is fed one line at a time, in file order, and keeps a
//! count for every member seen so far. It never buffers lines, so arbitrarily
//! large load logs stream through in constant memory per distinct member.
//!
//! Use one aggregator per reject context (one load rule or one batch of
//! related files). Independent aggregators, e.g. one per file on separate
//! threads, can be combined afterwards with [`Aggregator::merge`].

use super::matcher::match_member;
use super::summary::Summary;
use super::types::RejectionCount;
use std::collections::HashMap;
use std::io::{self, BufRead};

/// Accumulates rejection counts keyed by member name.
///
/// First-seen order is kept alongside the counts so that members with equal
/// counts always rank the same way.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
    lines_seen: u64,
    lines_matched: u64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a single log line.
    ///
    /// Lines that are not rejection lines are counted as seen and otherwise
    /// ignored.
    pub fn submit(&mut self, line: &str) {
        self.lines_seen += 1;
        if let Some(member) = match_member(line) {
            self.lines_matched += 1;
            self.add(member, 1);
        }
    }

    /// Submits every line from an iterator, in order.
    pub fn submit_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.submit(line.as_ref());
        }
    }

    /// Streams all lines from a reader into the aggregator.
    ///
    /// Line endings (`\n` or `\r\n`) are stripped. Bytes that are not valid
    /// UTF-8 are replaced rather than treated as an error, since reject files
    /// are often written in a legacy code page.
    ///
    /// Returns the number of lines read.
    pub fn submit_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<usize> {
        let mut buf = Vec::with_capacity(256);
        let mut lines = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(lines);
            }
            lines += 1;

            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            self.submit(&String::from_utf8_lossy(&buf));
        }
    }

    /// Builds a ranked snapshot of the current counts.
    ///
    /// The aggregator keeps its state, so it can be finalized again after more
    /// lines have been submitted.
    pub fn finalize(&self) -> Summary {
        Summary::new(
            self.counts
                .iter()
                .map(|(member, count)| RejectionCount::new(member.clone(), *count))
                .collect(),
        )
    }

    /// Adds every count from `other` into this aggregator.
    ///
    /// Members unknown to `self` are appended in `other`'s first-seen order,
    /// so merging per-file aggregators in file order ranks ties exactly like
    /// feeding the files through a single aggregator.
    pub fn merge(&mut self, other: Aggregator) {
        self.lines_seen += other.lines_seen;
        self.lines_matched += other.lines_matched;
        for (member, count) in other.counts {
            self.add_owned(member, count);
        }
    }

    /// Adds externally computed counts, keyed by member name.
    ///
    /// Each count is also added to [`lines_matched`](Self::lines_matched) so
    /// that the summary total keeps matching it. Zero counts are skipped.
    pub fn merge_counts<I>(&mut self, counts: I)
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        for (member, count) in counts {
            if count == 0 {
                continue;
            }
            self.lines_matched += count;
            self.add_owned(member, count);
        }
    }

    /// Current count for a member, if it has been seen
    pub fn count_of(&self, member: &str) -> Option<u64> {
        self.index.get(member).map(|&i| self.counts[i].1)
    }

    /// Member counts in first-seen order
    pub fn counts(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(m, c)| (m.as_str(), *c))
    }

    /// Number of distinct members seen
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total lines submitted, matching or not
    pub const fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Lines recognized as rejections
    pub const fn lines_matched(&self) -> u64 {
        self.lines_matched
    }

    fn add(&mut self, member: &str, count: u64) {
        match self.index.get(member) {
            Some(&i) => self.counts[i].1 += count,
            None => self.insert(member.to_string(), count),
        }
    }

    fn add_owned(&mut self, member: String, count: u64) {
        match self.index.get(&member) {
            Some(&i) => self.counts[i].1 += count,
            None => self.insert(member, count),
        }
    }

    fn insert(&mut self, member: String, count: u64) {
        self.index.insert(member.clone(), self.counts.len());
        self.counts.push((member, count));
    }
}
