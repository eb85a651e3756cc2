use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use rejected_record_tools::commands;
use rejected_record_tools::commands::summary::{OutputFormat, ReportOptions};
use rejected_record_tools::utils::processor::InputOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reject-summary")]
#[command(about = "Summarize rejected records from data load logs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report totals, top rejected members and concentration
    Summary {
        /// Reject file(s) to read, plain or .gz/.zst compressed (default: stdin)
        log_files: Vec<String>,

        /// Number of top rejected members to list
        #[arg(long, default_value = "5")]
        top: usize,

        /// Number of top members used for the concentration percentage
        #[arg(long, default_value = "100")]
        concentration_top: usize,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Process multiple files one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Do not draw a progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Export every rejected member with its count as CSV
    Export {
        /// Reject file(s) to read, plain or .gz/.zst compressed (default: stdin)
        log_files: Vec<String>,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Minimum rejections for a member to be included
        #[arg(long, default_value = "1")]
        min_count: u64,

        /// Process multiple files one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Do not draw a progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Summary {
            log_files,
            top,
            concentration_top,
            format,
            output,
            sequential,
            no_progress,
        } => commands::summary::run(
            &log_files,
            &ReportOptions {
                top,
                concentration_top,
                format,
            },
            &InputOptions {
                sequential,
                show_progress: !no_progress,
            },
            output.as_deref(),
        ),
        Commands::Export {
            log_files,
            output,
            min_count,
            sequential,
            no_progress,
        } => commands::export::run(
            &log_files,
            output.as_deref(),
            min_count,
            &InputOptions {
                sequential,
                show_progress: !no_progress,
            },
        )
        .map(|_| ()),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "reject-summary", &mut std::io::stdout());
            Ok(())
        }
    }
}
