//!
//! The benchmark report of the latest suite run.
//!

pub mod benchmark;
pub mod table;


use chrono::DateTime;
use chrono::Utc;

use crate::error::Error;
use crate::metric::Metric;
use crate::model::collection::Collection;

use self::benchmark::BenchmarkReport;

///
/// The benchmark report of the latest suite run.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// The suite name.
    pub suite: String,
    /// The version of the benchmarked software.
    pub version: String,
    /// The moment the latest suite run was recorded.
    pub timestamp: DateTime<Utc>,
    /// The environment description.
    pub environment: String,
    /// The metric selected when the report is opened.
    pub metric: Metric,
    /// The number of suite runs the historical charts span.
    pub history_length: usize,
    /// The benchmark sections, in suite order.
    pub benchmarks: Vec<BenchmarkReport>,
}

impl Report {
    ///
    /// Builds the report of the latest suite run in `collection`.
    ///
    /// # Errors
    ///
    /// If the collection has no suite runs.
    ///
    pub fn new(collection: &Collection, metric: Metric) -> Result<Self, Error> {
        let latest = collection.latest().ok_or(Error::EmptyCollection)?;

        let benchmarks = latest
            .results
            .iter()
            .map(|benchmark| BenchmarkReport::new(collection, benchmark))
            .collect::<Result<Vec<BenchmarkReport>, Error>>()?;

        Ok(Self {
            suite: latest.suite.clone(),
            version: latest.version.clone(),
            timestamp: latest.timestamp,
            environment: latest.environment.clone(),
            metric,
            history_length: collection.runs.len(),
            benchmarks,
        })
    }
}
