//!
//! The benchmark report library.
//!
//! Turns a collection of benchmark suite runs into duration tables,
//! metric-vs-size charts, and historical trend charts.
//!

pub mod chart;
pub mod error;
pub mod input;
pub mod metric;
pub mod model;
pub mod output;
pub mod report;
pub mod selection;

pub use crate::chart::dataset::Dataset;
pub use crate::chart::history::historical_series;
pub use crate::chart::palette::CHART_COLORS;
pub use crate::chart::point::Point;
pub use crate::chart::series_key::SeriesKey;
pub use crate::chart::size::size_series;
pub use crate::chart::ChartData;
pub use crate::error::Error;
pub use crate::input::error::Error as InputError;
pub use crate::metric::Metric;
pub use crate::model::collection::Collection;
pub use crate::model::suite::benchmark::run::config::RunConfig;
pub use crate::model::suite::benchmark::run::count::CountResult;
pub use crate::model::suite::benchmark::run::duration::DurationResult;
pub use crate::model::suite::benchmark::run::RunResult;
pub use crate::model::suite::benchmark::Benchmark;
pub use crate::model::suite::Suite;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::report::benchmark::BenchmarkReport;
pub use crate::report::table::Table;
pub use crate::report::Report;
pub use crate::selection::compare_configs;
pub use crate::selection::find_largest_config;
