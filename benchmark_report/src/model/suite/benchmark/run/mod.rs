//!
//! The result of a single benchmark run.
//!

pub mod config;
pub mod count;
pub mod duration;

use indexmap::IndexMap;

use self::config::RunConfig;
use self::count::CountResult;
use self::duration::DurationResult;

///
/// The result of running a benchmark with one configuration.
///
/// The set of duration keys may differ between runs of the same benchmark.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunResult {
    /// The configuration the benchmark was run with.
    pub run_config: RunConfig,
    /// Duration statistics by measured operation, in document order.
    pub duration_results: IndexMap<String, DurationResult>,
    /// Count statistics by measured quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_results: Option<IndexMap<String, CountResult>>,
}

impl RunResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(run_config: RunConfig, duration_results: IndexMap<String, DurationResult>) -> Self {
        Self {
            run_config,
            duration_results,
            count_results: None,
        }
    }

    ///
    /// Returns the duration statistics for `key`, if this run measured it.
    ///
    pub fn duration(&self, key: &str) -> Option<&DurationResult> {
        self.duration_results.get(key)
    }
}
