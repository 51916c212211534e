//!
//! Report and series construction errors.
//!

///
/// Report and series construction errors.
///
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A report was requested for a collection without suite runs.
    #[error("The collection contains no suite runs")]
    EmptyCollection,
    /// The largest configuration was requested from an empty list of results.
    #[error("Cannot select the largest configuration from an empty list of run results")]
    EmptyRunResults,
    /// A benchmark of the latest suite run has no results to track over time.
    #[error("Benchmark `{name}` has no run results in the latest suite run")]
    NoRunResults {
        /// The benchmark name.
        name: String,
    },
}
