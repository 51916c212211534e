//!
//! The end-to-end report generation tests.
//!

use std::path::Path;

use benchmark_report::Collection;
use benchmark_report::InputError;
use benchmark_report::Metric;
use benchmark_report::Output;
use benchmark_report::OutputFormat;
use benchmark_report::Report;

const DOCUMENT: &str = r#"
{
    "runs": [
        {
            "suite": "storage",
            "environment": "linux x86_64",
            "version": "1.0.0",
            "timestamp": "2024-03-01T10:00:00Z",
            "results": [
                {
                    "name": "insert rows",
                    "description": "Inserts rows.",
                    "runs": [],
                    "results": [
                        {
                            "run_config": { "clusterSize": 1, "size": 10, "length": 100, "disableCompilationCache": false },
                            "duration_results": {
                                "write": { "avg": 2, "min": 1, "max": 3, "median": 2, "p90": 3, "p95": 3, "p99": 3 }
                            }
                        }
                    ]
                }
            ]
        },
        {
            "suite": "storage",
            "environment": "linux x86_64",
            "version": "1.1.0",
            "timestamp": "2024-03-02T10:00:00Z",
            "results": [
                {
                    "name": "insert rows",
                    "description": "Inserts rows.",
                    "runs": [],
                    "results": [
                        {
                            "run_config": { "clusterSize": 1, "size": 10, "length": 100, "disableCompilationCache": false },
                            "duration_results": {
                                "write": { "avg": 1, "min": 1, "max": 2, "median": 1, "p90": 2, "p95": 2, "p99": 2 }
                            }
                        },
                        {
                            "run_config": { "clusterSize": 1, "size": 20, "length": 100, "disableCompilationCache": false },
                            "duration_results": {
                                "write": { "avg": 3, "min": 2, "max": 4, "median": 3, "p90": 4, "p95": 4, "p99": 4 }
                            }
                        }
                    ]
                }
            ]
        }
    ]
}
"#;

fn write_input(directory: &Path, content: &str) {
    std::fs::write(directory.join("results.json"), content).expect("Always valid");
}

#[test]
fn loads_directory_input() {
    let directory = tempfile::tempdir().expect("Always valid");
    write_input(directory.path(), DOCUMENT);

    let collection = Collection::try_from(directory.path()).expect("Always valid");
    assert_eq!(collection.runs.len(), 2);

    let report = Report::new(&collection, Metric::Median).expect("Always valid");
    assert_eq!(report.version, "1.1.0");

    let history = report.benchmarks[0]
        .historical_chart(Metric::Median)
        .expect("Always exists");
    assert_eq!(history.datasets.len(), 1);
    assert_eq!(history.datasets[0].label, "write (Size: 20, Length: 100)");
    assert_eq!(history.points_count(), 1);
}

#[test]
fn rejects_empty_input() {
    let directory = tempfile::tempdir().expect("Always valid");
    write_input(directory.path(), "  \n");

    let error = Collection::try_from(directory.path()).expect_err("Always invalid");
    assert!(matches!(error, InputError::EmptyFile { .. }));
}

#[test]
fn rejects_input_without_runs() {
    let directory = tempfile::tempdir().expect("Always valid");
    write_input(directory.path(), r#"{ "runs": [] }"#);

    let error = Collection::try_from(directory.path()).expect_err("Always invalid");
    assert!(matches!(error, InputError::NoSuiteRuns { .. }));
}

#[test]
fn rejects_malformed_input() {
    let directory = tempfile::tempdir().expect("Always valid");
    write_input(directory.path(), r#"{ "runs": "#);

    let error = Collection::try_from(directory.path()).expect_err("Always invalid");
    assert!(matches!(error, InputError::Parsing { .. }));
}

#[test]
fn rejects_missing_input() {
    let directory = tempfile::tempdir().expect("Always valid");

    let error = Collection::try_from(directory.path()).expect_err("Always invalid");
    assert!(matches!(error, InputError::Reading { .. }));
}

#[test]
fn writes_every_format() {
    let directory = tempfile::tempdir().expect("Always valid");
    write_input(directory.path(), DOCUMENT);

    let collection = Collection::try_from(directory.path()).expect("Always valid");
    let report = Report::new(&collection, Metric::Avg).expect("Always valid");

    for format in OutputFormat::ALL.into_iter() {
        let path = directory
            .path()
            .join("reports")
            .join(format!("report.{format}"));
        let output = Output::try_from((&report, format)).expect("Always valid");
        output.write_to_file(path.as_path()).expect("Always valid");

        let metadata = std::fs::metadata(path.as_path()).expect("Always exists");
        assert!(metadata.len() > 0);
    }

    let json = std::fs::read_to_string(directory.path().join("reports").join("report.json"))
        .expect("Always valid");
    let parsed: Report = serde_json::from_str(json.as_str()).expect("Always valid");
    assert_eq!(parsed, report);
}
