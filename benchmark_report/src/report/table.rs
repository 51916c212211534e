//!
//! A table of duration statistics for one measured operation.
//!

use crate::metric::Metric;
use crate::model::suite::benchmark::run::config::RunConfig;
use crate::model::suite::benchmark::Benchmark;

///
/// A table of duration statistics for one measured operation.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    /// The duration key.
    pub key: String,
    /// One row per run that measured the key, in input order.
    pub rows: Vec<Row>,
}

///
/// A table row.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// The run configuration.
    pub run_config: RunConfig,
    /// The statistics, in [`Metric::ALL`] order.
    pub values: Vec<f64>,
}

impl Table {
    /// The configuration column captions.
    pub const CONFIG_HEADERS: [&'static str; 3] = ["Cluster Size", "Size", "Length"];

    ///
    /// Builds the table for `key`. Runs that did not measure it are left out.
    ///
    pub fn new(benchmark: &Benchmark, key: &str) -> Self {
        let rows = benchmark
            .results
            .iter()
            .filter_map(|result| {
                let duration = result.duration(key)?;
                Some(Row {
                    run_config: result.run_config,
                    values: Metric::ALL
                        .into_iter()
                        .map(|metric| duration.get(metric))
                        .collect(),
                })
            })
            .collect();
        Self {
            key: key.to_owned(),
            rows,
        }
    }

    ///
    /// Builds one table per duration key of the benchmark, in first-seen order.
    ///
    pub fn all(benchmark: &Benchmark) -> Vec<Self> {
        benchmark
            .duration_keys()
            .into_iter()
            .map(|key| Self::new(benchmark, key))
            .filter(|table| !table.rows.is_empty())
            .collect()
    }

    ///
    /// Returns all column captions.
    ///
    pub fn headers() -> impl Iterator<Item = &'static str> {
        Self::CONFIG_HEADERS
            .into_iter()
            .chain(Metric::ALL.into_iter().map(|metric| metric.caption()))
    }
}
