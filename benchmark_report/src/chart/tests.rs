//!
//! The chart series tests.
//!

use crate::error::Error;
use crate::metric::Metric;
use crate::model::collection::Collection;
use crate::model::suite::benchmark::run::config::RunConfig;
use crate::model::suite::benchmark::run::duration::DurationResult;
use crate::model::suite::benchmark::run::RunResult;
use crate::model::suite::benchmark::Benchmark;
use crate::model::suite::Suite;

use super::history::historical_series;
use super::palette;
use super::point::Point;
use super::size::size_series;

fn stats(base: f64) -> DurationResult {
    DurationResult {
        avg: base + 1.0,
        min: base,
        max: base + 9.0,
        median: base + 2.0,
        p90: base + 5.0,
        p95: base + 6.0,
        p99: base + 8.0,
        ..Default::default()
    }
}

fn result(cluster_size: u64, size: u64, length: u64, keys: &[(&str, f64)]) -> RunResult {
    RunResult::new(
        RunConfig::new(cluster_size, size, length, false),
        keys.iter()
            .map(|(key, base)| (key.to_string(), stats(*base)))
            .collect(),
    )
}

fn named(name: &str, results: Vec<RunResult>) -> Benchmark {
    Benchmark {
        name: name.to_owned(),
        description: String::new(),
        runs: results.iter().map(|result| result.run_config).collect(),
        results,
    }
}

fn benchmark(results: Vec<RunResult>) -> Benchmark {
    named("insert rows", results)
}

fn suite(timestamp: &str, benchmarks: Vec<Benchmark>) -> Suite {
    Suite {
        suite: "storage".to_owned(),
        environment: "linux x86_64".to_owned(),
        version: "1.0.0".to_owned(),
        timestamp: timestamp.parse().expect("Always valid"),
        results: benchmarks,
    }
}

fn millis(timestamp: &str) -> f64 {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .expect("Always valid")
        .timestamp_millis() as f64
}

#[test]
fn palette_cycles() {
    assert_eq!(palette::color(0), "blue");
    assert_eq!(palette::color(9), "cyan");
    assert_eq!(palette::color(10), "blue");
    assert_eq!(palette::color(23), "orange");
}

#[test]
fn size_points_sorted_ascending() {
    let benchmark = benchmark(vec![
        result(1, 30, 100, &[("write", 30.0)]),
        result(1, 10, 100, &[("write", 10.0)]),
        result(1, 20, 100, &[("write", 20.0)]),
    ]);

    let chart = size_series(&benchmark, Metric::Min);
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(
        chart.datasets[0].data,
        vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 30.0)
        ]
    );
    assert_eq!(
        chart.datasets[0].label,
        "write - Cluster: 1, Length: 100 (MIN)"
    );
    assert!(!chart.datasets[0].fill);
}

#[test]
fn size_groups_by_cluster_size_and_length() {
    let benchmark = benchmark(vec![
        result(1, 10, 100, &[("write", 1.0)]),
        result(2, 10, 100, &[("write", 2.0)]),
        result(1, 20, 100, &[("write", 3.0)]),
        result(1, 10, 200, &[("write", 4.0)]),
    ]);

    let chart = size_series(&benchmark, Metric::Min);
    let labels: Vec<&str> = chart
        .datasets
        .iter()
        .map(|dataset| dataset.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "write - Cluster: 1, Length: 100 (MIN)",
            "write - Cluster: 2, Length: 100 (MIN)",
            "write - Cluster: 1, Length: 200 (MIN)",
        ]
    );
    assert_eq!(
        chart.datasets[0].data,
        vec![Point::new(10.0, 1.0), Point::new(20.0, 3.0)]
    );
}

#[test]
fn size_cross_product_of_keys_and_groups() {
    let benchmark = benchmark(vec![
        result(1, 10, 100, &[("write", 1.0), ("read", 2.0)]),
        result(2, 10, 100, &[("write", 3.0)]),
        result(2, 20, 100, &[("read", 4.0)]),
    ]);

    let chart = size_series(&benchmark, Metric::Median);
    let summary: Vec<(&str, &str, usize)> = chart
        .datasets
        .iter()
        .map(|dataset| {
            (
                dataset.label.as_str(),
                dataset.border_color.as_str(),
                dataset.data.len(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("write - Cluster: 1, Length: 100 (MEDIAN)", "blue", 1),
            ("write - Cluster: 2, Length: 100 (MEDIAN)", "red", 1),
            ("read - Cluster: 1, Length: 100 (MEDIAN)", "green", 1),
            ("read - Cluster: 2, Length: 100 (MEDIAN)", "orange", 1),
        ]
    );
    assert_eq!(chart.datasets[3].data, vec![Point::new(20.0, 6.0)]);
}

#[test]
fn size_colors_wrap_around() {
    let results = (0..12)
        .map(|cluster_size| result(cluster_size, 10, 100, &[("write", 1.0)]))
        .collect();
    let benchmark = benchmark(results);

    let chart = size_series(&benchmark, Metric::P99);
    assert_eq!(chart.datasets.len(), 12);
    assert_eq!(chart.datasets[10].border_color, "blue");
    assert_eq!(chart.datasets[11].border_color, "red");
}

#[test]
fn size_uses_requested_metric() {
    let benchmark = benchmark(vec![result(1, 10, 100, &[("write", 100.0)])]);

    for (metric, expected) in [
        (Metric::Avg, 101.0),
        (Metric::Min, 100.0),
        (Metric::Max, 109.0),
        (Metric::Median, 102.0),
        (Metric::P90, 105.0),
        (Metric::P95, 106.0),
        (Metric::P99, 108.0),
    ] {
        let chart = size_series(&benchmark, metric);
        assert_eq!(chart.datasets[0].data[0].y, expected);
    }
}

#[test]
fn size_empty_benchmark() {
    let benchmark = benchmark(vec![]);
    assert!(size_series(&benchmark, Metric::Median).datasets.is_empty());
}

#[test]
fn history_tracks_largest_config() {
    let collection = Collection {
        runs: vec![
            suite(
                "2024-01-01T00:00:00Z",
                vec![named("insert", vec![result(2, 20, 100, &[("write", 10.0)])])],
            ),
            suite(
                "2024-01-02T00:00:00Z",
                vec![named(
                    "insert",
                    vec![
                        result(1, 10, 100, &[("write", 1.0)]),
                        result(2, 20, 100, &[("write", 20.0), ("read", 5.0)]),
                    ],
                )],
            ),
        ],
    };

    let chart = historical_series(&collection, "insert", Metric::Min).expect("Always valid");
    assert_eq!(chart.datasets.len(), 2);

    assert_eq!(chart.datasets[0].label, "write (Size: 20, Length: 100)");
    assert_eq!(chart.datasets[0].border_color, "blue");
    assert_eq!(
        chart.datasets[0].data,
        vec![
            Point::new(millis("2024-01-01T00:00:00Z"), 10.0),
            Point::new(millis("2024-01-02T00:00:00Z"), 20.0),
        ]
    );

    assert_eq!(chart.datasets[1].label, "read (Size: 20, Length: 100)");
    assert_eq!(chart.datasets[1].border_color, "red");
    assert_eq!(
        chart.datasets[1].data,
        vec![Point::new(millis("2024-01-02T00:00:00Z"), 5.0)]
    );
}

#[test]
fn history_skips_runs_without_exact_config() {
    let mut cache_disabled = result(2, 20, 100, &[("write", 7.0)]);
    cache_disabled.run_config.disable_compilation_cache = true;

    let collection = Collection {
        runs: vec![
            suite(
                "2024-01-01T00:00:00Z",
                vec![named("insert", vec![result(2, 20, 200, &[("write", 1.0)])])],
            ),
            suite(
                "2024-01-02T00:00:00Z",
                vec![named("insert", vec![cache_disabled])],
            ),
            suite(
                "2024-01-03T00:00:00Z",
                vec![named("other", vec![result(2, 20, 100, &[("write", 3.0)])])],
            ),
            suite(
                "2024-01-04T00:00:00Z",
                vec![named("insert", vec![result(2, 20, 100, &[("write", 4.0)])])],
            ),
        ],
    };

    let chart = historical_series(&collection, "insert", Metric::Min).expect("Always valid");
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(
        chart.datasets[0].data,
        vec![Point::new(millis("2024-01-04T00:00:00Z"), 4.0)]
    );
}

#[test]
fn history_unknown_benchmark() {
    let collection = Collection {
        runs: vec![suite(
            "2024-01-01T00:00:00Z",
            vec![named("insert", vec![result(1, 10, 100, &[("write", 1.0)])])],
        )],
    };

    let chart = historical_series(&collection, "delete", Metric::Median).expect("Always valid");
    assert!(chart.datasets.is_empty());
    assert!(historical_series(&Collection::default(), "insert", Metric::Median)
        .expect("Always valid")
        .datasets
        .is_empty());
}

#[test]
fn history_benchmark_without_results() {
    let collection = Collection {
        runs: vec![suite("2024-01-01T00:00:00Z", vec![named("insert", vec![])])],
    };

    assert_eq!(
        historical_series(&collection, "insert", Metric::Median),
        Err(Error::NoRunResults {
            name: "insert".to_owned()
        })
    );
}
