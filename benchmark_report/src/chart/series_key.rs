//!
//! The key of a metric-vs-size series.
//!

use crate::model::suite::benchmark::run::config::RunConfig;

///
/// The configuration dimensions shared by all points of a metric-vs-size series.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey {
    /// The number of nodes in the cluster.
    pub cluster_size: u64,
    /// The string length.
    pub length: u64,
}

impl From<&RunConfig> for SeriesKey {
    fn from(run_config: &RunConfig) -> Self {
        Self {
            cluster_size: run_config.cluster_size,
            length: run_config.length,
        }
    }
}
