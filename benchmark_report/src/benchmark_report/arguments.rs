//!
//! The benchmark report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark report arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file with the suite run collection.
    /// If a directory is provided, its `results.json` is used.
    pub input_path: PathBuf,

    /// Report output format: `html`, `json`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_report::OutputFormat::Html)]
    pub output_format: benchmark_report::OutputFormat,

    /// Metric selected when the report is opened: `avg`, `min`, `max`, `median`, `p90`, `p95`, or `p99`.
    #[arg(long, default_value_t = benchmark_report::Metric::Median)]
    pub metric: benchmark_report::Metric,

    /// Output file.
    #[arg(short, long)]
    pub output_path: PathBuf,
}
