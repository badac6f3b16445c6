//! finch CLI binary.
//!
//! Runs the growth analysis over a CSV of per-company financial records,
//! prints the report and writes the augmented table.

use clap::{ArgAction, Parser, ValueEnum};
use finch::growth::GrowthConfig;
use finch::output::{ExportFormat, Exporter, ReportFormat};
use finch::{DEFAULT_OUTPUT, Pipeline, PipelineConfig};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finch")]
#[command(about = "finch: year-over-year growth of company financials", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV of per-company yearly records
    input: PathBuf,

    /// Destination of the augmented CSV
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Sort rows by company and year before computing growth
    #[arg(long)]
    sort_by_year: bool,

    /// Lag in rows within a company
    #[arg(long, default_value = "1")]
    periods: usize,

    /// Rows of the loaded table to preview
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the growth summary to this file
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Format of the summary file
    #[arg(long, value_enum, default_value_t = SummaryFormat::Csv)]
    summary_format: SummaryFormat,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Markdown => Self::Markdown,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummaryFormat {
    Csv,
    Json,
    PrettyJson,
}

impl From<SummaryFormat> for ExportFormat {
    fn from(format: SummaryFormat) -> Self {
        match format {
            SummaryFormat::Csv => Self::Csv,
            SummaryFormat::Json => Self::Json,
            SummaryFormat::PrettyJson => Self::PrettyJson,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig {
        output: cli.output,
        growth: GrowthConfig {
            periods: cli.periods,
            sort_by_year: cli.sort_by_year,
        },
        preview_rows: cli.preview_rows,
        ..PipelineConfig::new(cli.input)
    };
    debug!(?config, "starting");

    let outcome = Pipeline::new(config).run()?;

    if let Some(path) = cli.summary_out {
        outcome
            .report
            .summary
            .export_to_file(&path, cli.summary_format.into())?;
        debug!(path = %path.display(), "wrote growth summary");
    }

    print!("{}", outcome.report.render(cli.format.into())?);
    Ok(())
}
