//!
//! Count statistics of a measured quantity.
//!

///
/// Count statistics of a measured quantity.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountResult {
    /// The average count.
    pub avg: f64,
    /// The minimum count.
    pub min: f64,
    /// The maximum count.
    pub max: f64,
    /// All raw measurements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<f64>>,
    /// Raw measurements grouped by iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_iteration: Option<Vec<Vec<f64>>>,
}
