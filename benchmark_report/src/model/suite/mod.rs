//!
//! One execution of the benchmark suite.
//!

pub mod benchmark;

use chrono::DateTime;
use chrono::Utc;

use self::benchmark::Benchmark;

///
/// One execution of the benchmark suite.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Suite {
    /// The suite name.
    pub suite: String,
    /// A free-form description of the machine and software environment.
    #[serde(default)]
    pub environment: String,
    /// The version of the benchmarked software.
    pub version: String,
    /// The moment the suite run was recorded.
    pub timestamp: DateTime<Utc>,
    /// The results of every benchmark in the suite.
    pub results: Vec<Benchmark>,
}

impl Suite {
    ///
    /// Returns the benchmark named `name`.
    ///
    pub fn benchmark(&self, name: &str) -> Option<&Benchmark> {
        self.results
            .iter()
            .find(|benchmark| benchmark.name.as_str() == name)
    }
}
