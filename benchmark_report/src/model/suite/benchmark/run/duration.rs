//!
//! Duration statistics of a measured operation.
//!

use crate::metric::Metric;

///
/// Duration statistics of a measured operation, in milliseconds.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DurationResult {
    /// The average duration.
    pub avg: f64,
    /// The minimum duration.
    pub min: f64,
    /// The maximum duration.
    pub max: f64,
    /// The median duration.
    pub median: f64,
    /// The 90th percentile.
    pub p90: f64,
    /// The 95th percentile.
    pub p95: f64,
    /// The 99th percentile.
    pub p99: f64,
    /// All raw measurements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<f64>>,
    /// Raw measurements grouped by iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_iteration: Option<Vec<Vec<f64>>>,
}

impl DurationResult {
    ///
    /// Returns the value of the statistic named by `metric`.
    ///
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Avg => self.avg,
            Metric::Min => self.min,
            Metric::Max => self.max,
            Metric::Median => self.median,
            Metric::P90 => self.p90,
            Metric::P95 => self.p95,
            Metric::P99 => self.p99,
        }
    }
}
