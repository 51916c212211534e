//!
//! Historical trend series across suite runs.
//!

use crate::chart::dataset::Dataset;
use crate::chart::palette;
use crate::chart::point::Point;
use crate::chart::ChartData;
use crate::error::Error;
use crate::metric::Metric;
use crate::model::collection::Collection;
use crate::selection::find_largest_config;

///
/// Tracks the largest configuration of a benchmark over all suite runs.
///
/// The configuration is selected from the latest suite run. Every suite run
/// whose benchmark has a result with exactly that configuration, including the
/// compilation cache flag, contributes one point per duration key it measured.
/// Other runs contribute nothing, so lines may be shorter than the collection.
///
/// A benchmark missing from the latest suite run yields no lines.
///
/// # Errors
///
/// If the benchmark has no results in the latest suite run.
///
pub fn historical_series(
    collection: &Collection,
    benchmark_name: &str,
    metric: Metric,
) -> Result<ChartData, Error> {
    let benchmark = match collection
        .latest()
        .and_then(|suite| suite.benchmark(benchmark_name))
    {
        Some(benchmark) => benchmark,
        None => return Ok(ChartData::default()),
    };

    let largest = find_largest_config(benchmark.results.as_slice()).map_err(|_| {
        Error::NoRunResults {
            name: benchmark_name.to_owned(),
        }
    })?;
    let run_config = &largest.run_config;

    let datasets = largest
        .duration_results
        .keys()
        .enumerate()
        .map(|(index, key)| {
            let data = collection
                .runs
                .iter()
                .filter_map(|suite| {
                    let value = suite
                        .benchmark(benchmark_name)?
                        .result_for(run_config)?
                        .duration(key)?
                        .get(metric);
                    Some(Point::new(suite.timestamp.timestamp_millis() as f64, value))
                })
                .collect();
            let label = format!(
                "{key} (Size: {}, Length: {})",
                run_config.size, run_config.length
            );
            Dataset::new(label, data, palette::color(index))
        })
        .collect::<Vec<Dataset>>();

    Ok(datasets.into())
}
