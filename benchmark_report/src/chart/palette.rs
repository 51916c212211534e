//!
//! The chart line color palette.
//!

///
/// The chart line colors, reused cyclically in dataset creation order.
///
pub const CHART_COLORS: [&str; 10] = [
    "blue", "red", "green", "orange", "purple", "brown", "pink", "gray", "olive", "cyan",
];

///
/// Returns the color of the dataset created at `index`.
///
pub fn color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}
