//!
//! Chart-ready series derived from benchmark results.
//!

pub mod dataset;
pub mod history;
pub mod palette;
pub mod point;
pub mod series_key;
pub mod size;

#[cfg(test)]
mod tests;

use self::dataset::Dataset;

///
/// The lines of one chart.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartData {
    /// The lines, in creation order.
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    ///
    /// Returns the total number of points over all lines.
    ///
    pub fn points_count(&self) -> usize {
        self.datasets.iter().map(|dataset| dataset.data.len()).sum()
    }
}

impl From<Vec<Dataset>> for ChartData {
    fn from(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }
}
