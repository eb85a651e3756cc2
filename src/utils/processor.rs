//! Reject file processing.
//!
//! Turns a list of named inputs into one finished [`Aggregator`], handling
//! decompression, standard input, progress display and per-file statistics.
//! Commands call [`aggregate_inputs`] and only deal with the summary.

use crate::reject::Aggregator;
use crate::utils::parallel::aggregate_files_parallel;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::{input_size, open_input, STDIN_NAME};
use anyhow::{Context, Result};
use std::io::BufReader;
use tracing::{debug, info, warn};

/// Statistics collected during processing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    /// Number of inputs processed
    pub files_processed: usize,
    /// Total number of lines read across all inputs
    pub total_lines: u64,
    /// Lines recognized as rejected records
    pub matched_lines: u64,
}

impl ProcessStats {
    pub fn add(&mut self, other: &ProcessStats) {
        self.files_processed += other.files_processed;
        self.total_lines += other.total_lines;
        self.matched_lines += other.matched_lines;
    }
}

/// How inputs should be read
#[derive(Debug, Clone, Copy)]
pub struct InputOptions {
    /// Process multiple files one after another instead of in parallel
    pub sequential: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            sequential: false,
            show_progress: true,
        }
    }
}

/// Feeds named inputs, in order, through a single aggregator.
pub struct LogProcessor<'a> {
    inputs: &'a [String],
    progress_label: String,
    show_progress: bool,
}

impl<'a> LogProcessor<'a> {
    pub fn new(inputs: &'a [String], progress_label: &str) -> Self {
        Self {
            inputs,
            progress_label: progress_label.to_string(),
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Process every input into `aggregator`.
    ///
    /// Stops at the first input that cannot be opened or read.
    pub fn process(self, aggregator: &mut Aggregator) -> Result<ProcessStats> {
        let mut stats = ProcessStats::default();

        for (idx, input) in self.inputs.iter().enumerate() {
            info!("[{}/{}] Processing: {}", idx + 1, self.inputs.len(), input);

            let progress = if self.show_progress {
                ProgressBar::for_size(input_size(input), &self.progress_label)
            } else {
                ProgressBar::hidden()
            };

            let file_stats = process_input(input, aggregator, &progress)?;
            progress.finish();

            debug!(
                "{}: {} lines, {} rejected",
                input, file_stats.total_lines, file_stats.matched_lines
            );
            stats.add(&file_stats);
        }

        Ok(stats)
    }
}

/// Streams one named input into `aggregator`, advancing `progress` by bytes.
pub fn process_input(
    input: &str,
    aggregator: &mut Aggregator,
    progress: &ProgressBar,
) -> Result<ProcessStats> {
    let reader = open_input(input)?;
    let matched_before = aggregator.lines_matched();

    let lines = aggregator
        .submit_reader(BufReader::new(progress.wrap_read(reader)))
        .with_context(|| format!("Failed to read from {}", input))?;

    Ok(ProcessStats {
        files_processed: 1,
        total_lines: lines as u64,
        matched_lines: aggregator.lines_matched() - matched_before,
    })
}

/// Aggregates all inputs, reading standard input when none are named.
///
/// More than one input is processed in parallel unless
/// [`InputOptions::sequential`] is set; both paths produce the same ranking.
pub fn aggregate_inputs(
    inputs: &[String],
    options: &InputOptions,
) -> Result<(Aggregator, ProcessStats)> {
    let stdin = [STDIN_NAME.to_string()];
    let inputs = if inputs.is_empty() { &stdin[..] } else { inputs };

    let (aggregator, stats) = if inputs.len() > 1 && !options.sequential {
        aggregate_files_parallel(inputs, options.show_progress)?
    } else {
        let mut aggregator = Aggregator::new();
        let stats = LogProcessor::new(inputs, "Reading rejects")
            .show_progress(options.show_progress)
            .process(&mut aggregator)?;
        (aggregator, stats)
    };

    if stats.matched_lines == 0 {
        warn!(
            "No rejected records found in {} line(s) across {} input(s)",
            stats.total_lines, stats.files_processed
        );
    } else {
        info!(
            "Processed {} input(s): {} lines, {} rejected records",
            stats.files_processed, stats.total_lines, stats.matched_lines
        );
    }

    Ok((aggregator, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn quiet() -> InputOptions {
        InputOptions {
            sequential: true,
            show_progress: false,
        }
    }

    fn reject_file(lines: &[&str]) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(temp, "{}", line).unwrap();
        }
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_process_empty_file() {
        let temp = NamedTempFile::new().unwrap();
        let inputs = vec![temp.path().to_string_lossy().to_string()];

        let (aggregator, stats) = aggregate_inputs(&inputs, &quiet()).unwrap();

        assert!(aggregator.is_empty());
        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.total_lines, 0);
        assert_eq!(stats.matched_lines, 0);
    }

    #[test]
    fn test_process_reject_file() {
        let temp = reject_file(&[
            r"\\ Member Ac.0170100 Not Found In Database	Actual	10",
            "OK/INFO - 1003037 - Data Load Updated [2] cells",
            r"\\ Member January Not Found In Database	Actual	20",
            r"\\ Member Ac.0170100 Not Found In Database	Budget	30",
        ]);
        let inputs = vec![temp.path().to_string_lossy().to_string()];

        let (aggregator, stats) = aggregate_inputs(&inputs, &quiet()).unwrap();

        assert_eq!(stats.total_lines, 4);
        assert_eq!(stats.matched_lines, 3);
        assert_eq!(aggregator.count_of("Ac.0170100"), Some(2));
        assert_eq!(aggregator.count_of("January"), Some(1));
    }

    #[test]
    fn test_multiple_files_accumulate() {
        let first = reject_file(&[r"\\ Member A Not Found In Database"]);
        let second = reject_file(&[
            r"\\ Member A Not Found In Database",
            r"\\ Member B Not Found In Database",
        ]);
        let inputs = vec![
            first.path().to_string_lossy().to_string(),
            second.path().to_string_lossy().to_string(),
        ];

        let mut aggregator = Aggregator::new();
        let stats = LogProcessor::new(&inputs, "Testing")
            .show_progress(false)
            .process(&mut aggregator)
            .unwrap();

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.matched_lines, 3);
        assert_eq!(aggregator.count_of("A"), Some(2));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let inputs = vec!["/nonexistent/rejects.err".to_string()];
        assert!(aggregate_inputs(&inputs, &quiet()).is_err());
    }
}
