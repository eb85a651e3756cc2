//! Rejected record summary report.
//!
//! Reads one or more reject files (or standard input) and reports how many
//! records were rejected, how many distinct members caused them, the worst
//! offenders and how concentrated the rejections are.
//!
//! # Usage
//!
//! ```bash
//! # Single file, plain text report
//! reject-summary summary load.err
//!
//! # Several compressed files processed in parallel, top 20
//! reject-summary summary logs/*.err.gz --top 20
//!
//! # Machine readable report piped from another tool
//! cat load.err | reject-summary summary --format json
//! ```
//!
//! # Output
//!
//! ```text
//! Number of rejected records: 50,000
//! Number of unique rejects  : 9,083
//! Top 5 rejected:
//!  - Ac.0170100 (1,204)
//!  - January (988)
//!  ...
//! Top 100 rejected members account for 41.37 % of all rejected rows
//! ```

use crate::commands::create_output;
use crate::reject::{RejectionCount, Summary};
use crate::utils::format::{format_number, format_percent};
use crate::utils::processor::{aggregate_inputs, InputOptions};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// What the report shows
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Number of most rejected members to list
    pub top: usize,
    /// Number of top members used for the concentration ratio
    pub concentration_top: usize,
    pub format: OutputFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: 5,
            concentration_top: 100,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    total_rejected: u64,
    unique_rejects: usize,
    top_rejected: &'a [RejectionCount],
    concentration: Concentration,
}

#[derive(Debug, Serialize)]
struct Concentration {
    top: usize,
    ratio: f64,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    member: &'a str,
    count: u64,
    share: f64,
}

pub fn run(
    inputs: &[String],
    report: &ReportOptions,
    input: &InputOptions,
    output: Option<&str>,
) -> Result<()> {
    let (aggregator, _stats) = aggregate_inputs(inputs, input)?;
    let summary = aggregator.finalize();

    let mut writer = create_output(output)?;
    render(&summary, report, &mut writer)?;
    writer.flush().context("Failed to write report")?;

    if let Some(path) = output {
        info!("Report written to: {}", path);
    }
    Ok(())
}

/// Renders `summary` in the requested format.
pub fn render<W: Write>(summary: &Summary, options: &ReportOptions, writer: W) -> Result<()> {
    match options.format {
        OutputFormat::Text => render_text(summary, options, writer)?,
        OutputFormat::Json => render_json(summary, options, writer)?,
        OutputFormat::Csv => write_csv(summary.top_n(options.top), summary.total_count(), writer)?,
    }
    Ok(())
}

pub fn render_text<W: Write>(
    summary: &Summary,
    options: &ReportOptions,
    mut writer: W,
) -> io::Result<()> {
    writeln!(
        writer,
        "Number of rejected records: {}",
        format_number(summary.total_count())
    )?;
    writeln!(
        writer,
        "Number of unique rejects  : {}",
        format_number(summary.unique_count() as u64)
    )?;
    writeln!(writer, "Top {} rejected:", options.top)?;

    for entry in summary.top_n(options.top) {
        writeln!(
            writer,
            " - {} ({})",
            entry.member(),
            format_number(entry.count())
        )?;
    }

    writeln!(
        writer,
        "Top {} rejected members account for {} of all rejected rows",
        options.concentration_top,
        format_percent(summary.concentration_ratio(options.concentration_top))
    )
}

pub fn render_json<W: Write>(summary: &Summary, options: &ReportOptions, writer: W) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now(),
        total_rejected: summary.total_count(),
        unique_rejects: summary.unique_count(),
        top_rejected: summary.top_n(options.top),
        concentration: Concentration {
            top: options.concentration_top,
            ratio: summary.concentration_ratio(options.concentration_top),
        },
    };

    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, &report).context("Failed to serialize to JSON")?;
    writeln!(writer)?;
    Ok(())
}

/// Writes ranked entries as CSV with a `rank,member,count,share` header.
///
/// `share` is the entry's fraction of `total`. The header is written even
/// when there are no entries.
pub fn write_csv<W: Write>(entries: &[RejectionCount], total: u64, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["rank", "member", "count", "share"])?;

    for (idx, entry) in entries.iter().enumerate() {
        let share = if total == 0 {
            0.0
        } else {
            entry.count() as f64 / total as f64
        };
        csv_writer
            .serialize(CsvRow {
                rank: idx + 1,
                member: entry.member(),
                count: entry.count(),
                share,
            })
            .context("Failed to write CSV row")?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reject::Aggregator;

    fn sample() -> Summary {
        let mut agg = Aggregator::new();
        agg.submit_lines([
            r"\\ Member Ac.0170100 Not Found In Database",
            r"\\ Member January Not Found In Database",
            r"\\ Member Ac.0170100 Not Found In Database",
            r"\\ Member January Not Found In Database",
            r"\\ Member Ac.0170100 Not Found In Database",
            "OK/INFO - 1003037 - Data Load Updated",
        ]);
        agg.finalize()
    }

    fn render_to_string(summary: &Summary, options: &ReportOptions) -> String {
        let mut out = Vec::new();
        render(summary, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report() {
        let options = ReportOptions {
            top: 1,
            concentration_top: 1,
            format: OutputFormat::Text,
        };
        let text = render_to_string(&sample(), &options);

        assert_eq!(
            text,
            "Number of rejected records: 5\n\
             Number of unique rejects  : 2\n\
             Top 1 rejected:\n \
             - Ac.0170100 (3)\n\
             Top 1 rejected members account for 60.00 % of all rejected rows\n"
        );
    }

    #[test]
    fn test_text_report_empty() {
        let text = render_to_string(&Aggregator::new().finalize(), &ReportOptions::default());

        assert!(text.contains("Number of rejected records: 0"));
        assert!(text.contains("account for 0.00 % of all"));
    }

    #[test]
    fn test_json_report() {
        let options = ReportOptions {
            format: OutputFormat::Json,
            ..ReportOptions::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_to_string(&sample(), &options)).unwrap();

        assert_eq!(json["total_rejected"], 5);
        assert_eq!(json["unique_rejects"], 2);
        assert_eq!(json["top_rejected"][0]["member"], "Ac.0170100");
        assert_eq!(json["top_rejected"][1]["count"], 2);
        assert_eq!(json["concentration"]["ratio"], 1.0);
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_csv_report() {
        let options = ReportOptions {
            format: OutputFormat::Csv,
            ..ReportOptions::default()
        };
        let csv = render_to_string(&sample(), &options);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec!["rank,member,count,share", "1,Ac.0170100,3,0.6", "2,January,2,0.4"]
        );
    }
}
