//!
//! The benchmark report binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let collection = benchmark_report::Collection::try_from(arguments.input_path.as_path())?;
    if !arguments.quiet {
        if !collection.is_chronological() {
            eprintln!(
                "{} Suite runs in {:?} are not ordered by timestamp; historical charts follow the file order.",
                "Warning:".bright_yellow(),
                arguments.input_path
            );
        }
        if let Some(latest) = collection.latest() {
            for benchmark in latest.results.iter() {
                if benchmark.results.is_empty() {
                    eprintln!(
                        "{} Benchmark `{}` has no run results and will be reported without charts.",
                        "Warning:".bright_yellow(),
                        benchmark.name
                    );
                }
            }
        }
    }

    let report = benchmark_report::Report::new(&collection, arguments.metric)?;
    if !arguments.quiet {
        println!(
            "{} {} {} ({} suite runs)",
            "Suite".bright_white(),
            report.suite.bright_white().bold(),
            report.version,
            report.history_length,
        );
        for benchmark in report.benchmarks.iter() {
            let size_chart = benchmark.size_chart(arguments.metric);
            let historical_chart = benchmark.historical_chart(arguments.metric);
            println!(
                "  {:40} {:>3} tables {:>4} size points {:>4} historical points",
                benchmark.name.green(),
                benchmark.tables.len(),
                size_chart.map(|chart| chart.points_count()).unwrap_or_default(),
                historical_chart
                    .map(|chart| chart.points_count())
                    .unwrap_or_default(),
            );
        }
    }

    let output: benchmark_report::Output = (&report, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path.as_path())?;
    if !arguments.quiet {
        println!(
            "{} {} report written to {:?}",
            "Done:".bright_green(),
            arguments.output_format,
            arguments.output_path
        );
    }

    Ok(())
}
