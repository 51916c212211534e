//!
//! A chart point.
//!

///
/// A chart point.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// The size, or the run timestamp in milliseconds since the Unix epoch.
    pub x: f64,
    /// The metric value.
    pub y: f64,
}

impl Point {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
