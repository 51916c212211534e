//!
//! The results of one benchmark within a suite run.
//!

pub mod run;

use self::run::config::RunConfig;
use self::run::RunResult;

///
/// The results of one benchmark within a suite run.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Benchmark {
    /// The benchmark name, unique within a suite run.
    pub name: String,
    /// The Markdown description.
    #[serde(default)]
    pub description: String,
    /// The configurations the benchmark was scheduled with.
    #[serde(default)]
    pub runs: Vec<RunConfig>,
    /// The results, one per executed configuration.
    pub results: Vec<RunResult>,
}

impl Benchmark {
    ///
    /// Returns every duration key measured by any run, in first-seen order.
    ///
    pub fn duration_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for result in self.results.iter() {
            for key in result.duration_results.keys().map(String::as_str) {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    ///
    /// Returns the results that measured `key`, in input order.
    ///
    pub fn results_with_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a RunResult> {
        self.results
            .iter()
            .filter(move |result| result.duration_results.contains_key(key))
    }

    ///
    /// Returns the result of the run with exactly `run_config`.
    ///
    pub fn result_for(&self, run_config: &RunConfig) -> Option<&RunResult> {
        self.results
            .iter()
            .find(|result| &result.run_config == run_config)
    }
}
