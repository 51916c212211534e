//!
//! The time series of benchmark suite runs.
//!

use crate::model::suite::Suite;

///
/// The time series of benchmark suite runs, oldest first.
///
/// The last run is the current one; all runs feed the historical trends.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Collection {
    /// The suite runs.
    pub runs: Vec<Suite>,
}

impl Collection {
    ///
    /// Returns the most recent suite run.
    ///
    pub fn latest(&self) -> Option<&Suite> {
        self.runs.last()
    }

    ///
    /// Checks that the suite runs are ordered by timestamp.
    ///
    pub fn is_chronological(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }
}
