//! Parallel multi-file aggregation.
//!
//! Each file gets its own [`Aggregator`] on a rayon worker. The per-file
//! results are merged in input order, which ranks tied members exactly as
//! sequential processing would.

use crate::reject::Aggregator;
use crate::utils::processor::{process_input, ProcessStats};
use crate::utils::progress::ProgressBar;
use crate::utils::reader::input_size;
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

/// Result of processing a single file
#[derive(Debug)]
pub struct FileProcessResult {
    pub file_path: String,
    pub stats: ProcessStats,
    pub aggregator: Aggregator,
}

/// Aggregate multiple files concurrently and merge them in input order.
///
/// # Returns
/// The merged aggregator plus combined statistics
pub fn aggregate_files_parallel(
    files: &[String],
    show_progress: bool,
) -> Result<(Aggregator, ProcessStats)> {
    if files.is_empty() {
        return Err(anyhow::anyhow!("No files provided for processing"));
    }

    info!("Processing {} files in parallel...", files.len());

    let progress = if show_progress {
        // A single unknown size turns the whole run into a spinner
        let total: Option<u64> = files.iter().map(|f| input_size(f)).sum();
        ProgressBar::for_size(total, "Reading rejects")
    } else {
        ProgressBar::hidden()
    };

    let results: Result<Vec<FileProcessResult>> = files
        .par_iter()
        .map(|file_path| -> Result<FileProcessResult> {
            let mut aggregator = Aggregator::new();
            let stats = process_input(file_path, &mut aggregator, &progress)
                .with_context(|| format!("Failed to process file: {}", file_path))?;

            debug!(
                "Completed: {} ({} lines, {} rejected)",
                file_path, stats.total_lines, stats.matched_lines
            );

            Ok(FileProcessResult {
                file_path: file_path.clone(),
                stats,
                aggregator,
            })
        })
        .collect();

    // collect() keeps input order
    let results = results?;
    progress.finish_with_message(&format!("Processed {} files", results.len()));

    Ok(merge_results(results))
}

/// Merge per-file results in the order given
pub fn merge_results(results: Vec<FileProcessResult>) -> (Aggregator, ProcessStats) {
    let mut merged = Aggregator::new();
    let mut stats = ProcessStats::default();

    for result in results {
        stats.add(&result.stats);
        merged.merge(result.aggregator);
    }

    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::processor::LogProcessor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_files(contents: &[&[&str]]) -> (Vec<NamedTempFile>, Vec<String>) {
        let mut paths = Vec::new();
        let temps = contents
            .iter()
            .map(|lines| {
                let mut temp = NamedTempFile::new().unwrap();
                for line in *lines {
                    writeln!(temp, "{}", line).unwrap();
                }
                temp.flush().unwrap();
                paths.push(temp.path().to_str().unwrap().to_string());
                temp
            })
            .collect();
        (temps, paths)
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (_temps, files) = write_files(&[
            &[
                r"\\ Member B Not Found In Database",
                r"\\ Member A Not Found In Database",
                "noise",
            ],
            &[
                r"\\ Member C Not Found In Database",
                r"\\ Member A Not Found In Database",
            ],
            &[r"\\ Member D Not Found In Database"],
        ]);

        let (parallel, parallel_stats) = aggregate_files_parallel(&files, false).unwrap();

        let mut sequential = Aggregator::new();
        let sequential_stats = LogProcessor::new(&files, "Testing")
            .show_progress(false)
            .process(&mut sequential)
            .unwrap();

        assert_eq!(parallel.finalize(), sequential.finalize());
        assert_eq!(parallel_stats, sequential_stats);
        assert_eq!(parallel_stats.files_processed, 3);
        assert_eq!(parallel_stats.matched_lines, 5);
    }

    #[test]
    fn test_failing_file_aborts() {
        let (_temps, mut files) = write_files(&[&[r"\\ Member A Not Found In Database"]]);
        files.push("/nonexistent/rejects.err".to_string());

        let err = aggregate_files_parallel(&files, false).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/rejects.err"));
    }

    #[test]
    fn test_no_files() {
        assert!(aggregate_files_parallel(&[], false).is_err());
    }
}
