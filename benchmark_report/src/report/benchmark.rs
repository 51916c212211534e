//!
//! The report section of one benchmark.
//!

use std::collections::BTreeMap;

use crate::chart::history::historical_series;
use crate::chart::size::size_series;
use crate::chart::ChartData;
use crate::error::Error;
use crate::metric::Metric;
use crate::model::collection::Collection;
use crate::model::suite::benchmark::Benchmark;
use crate::report::table::Table;

///
/// The report section of one benchmark of the latest suite run.
///
/// Charts are precomputed for every metric, keyed by the metric name, so
/// that a rendered page can switch metrics without recomputation.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkReport {
    /// The benchmark name.
    pub name: String,
    /// The Markdown description.
    pub description: String,
    /// The tables, one per duration key.
    pub tables: Vec<Table>,
    /// The metric-vs-size charts.
    pub size_charts: BTreeMap<String, ChartData>,
    /// The historical trend charts.
    pub historical_charts: BTreeMap<String, ChartData>,
}

impl BenchmarkReport {
    ///
    /// Builds the section for `benchmark`, tracking its history in `collection`.
    ///
    /// A benchmark without results gets empty historical charts.
    ///
    pub fn new(collection: &Collection, benchmark: &Benchmark) -> Result<Self, Error> {
        let mut size_charts = BTreeMap::new();
        let mut historical_charts = BTreeMap::new();
        for metric in Metric::ALL.into_iter() {
            size_charts.insert(metric.to_string(), size_series(benchmark, metric));

            let historical = match historical_series(collection, benchmark.name.as_str(), metric) {
                Ok(chart) => chart,
                Err(Error::NoRunResults { .. }) => ChartData::default(),
                Err(error) => return Err(error),
            };
            historical_charts.insert(metric.to_string(), historical);
        }

        Ok(Self {
            name: benchmark.name.clone(),
            description: benchmark.description.clone(),
            tables: Table::all(benchmark),
            size_charts,
            historical_charts,
        })
    }

    ///
    /// Returns the metric-vs-size chart for `metric`.
    ///
    pub fn size_chart(&self, metric: Metric) -> Option<&ChartData> {
        self.size_charts.get(metric.to_string().as_str())
    }

    ///
    /// Returns the historical trend chart for `metric`.
    ///
    pub fn historical_chart(&self, metric: Metric) -> Option<&ChartData> {
        self.historical_charts.get(metric.to_string().as_str())
    }
}
