//!
//! A chart line.
//!

use crate::chart::point::Point;

///
/// A chart line in the shape Chart.js expects.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// The legend label.
    pub label: String,
    /// The points, in drawing order.
    pub data: Vec<Point>,
    /// The line color.
    pub border_color: String,
    /// Whether the area under the line is filled.
    pub fill: bool,
}

impl Dataset {
    ///
    /// Creates an unfilled line.
    ///
    pub fn new(label: String, data: Vec<Point>, border_color: &str) -> Self {
        Self {
            label,
            data,
            border_color: border_color.to_owned(),
            fill: false,
        }
    }
}
