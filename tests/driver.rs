//! End-to-end tests for the benchmark harness.

use float_sort_bench::array;
use float_sort_bench::bench::{run, BenchConfig};
use float_sort_bench::kernel::KernelKind;
use float_sort_bench::sort::Algorithm;
use float_sort_bench::Error;

#[test]
fn every_variant_reports_sorted() {
    let config = BenchConfig {
        len: 2_000,
        seed: Some(12345),
        ..BenchConfig::default()
    };
    let report = run(&config).unwrap();

    assert_eq!(report.measurements.len(), 9);
    for m in &report.measurements {
        assert!(m.sorted, "{} / {} reported unsorted", m.algorithm, m.kernel);
    }
    for algorithm in Algorithm::ALL {
        for kernel in KernelKind::ALL {
            assert!(report.find(algorithm, kernel).is_some());
        }
    }
}

#[test]
fn random_seed_is_recorded() {
    let config = BenchConfig {
        len: 64,
        seed: None,
        kernels: vec![KernelKind::Scalar],
        algorithms: vec![Algorithm::Selection],
        runs: 1,
    };
    let first = run(&config).unwrap();
    assert!(first.all_sorted());

    // Replaying with the recorded seed regenerates the same input
    let replay = run(&BenchConfig {
        seed: Some(first.seed),
        ..config
    })
    .unwrap();
    assert_eq!(replay.seed, first.seed);
    assert_eq!(
        array::generate(64, first.seed).unwrap(),
        array::generate(64, replay.seed).unwrap()
    );
}

#[test]
fn unallocatable_size_is_an_error() {
    let config = BenchConfig {
        len: usize::MAX,
        seed: Some(1),
        ..BenchConfig::default()
    };
    match run(&config) {
        Err(Error::Allocation { len, .. }) => assert_eq!(len, usize::MAX),
        other => panic!("expected allocation error, got {other:?}"),
    }
}

#[test]
fn json_report_round_trips_labels() {
    let config = BenchConfig {
        len: 100,
        seed: Some(3),
        kernels: vec![KernelKind::Branchless],
        algorithms: vec![Algorithm::Merge],
        runs: 2,
    };
    let report = run(&config).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["len"], 100);
    assert_eq!(json["seed"], 3);
    assert_eq!(json["runs"], 2);
    assert_eq!(json["measurements"][0]["kernel"], "branchless");
    assert_eq!(json["measurements"][0]["algorithm"], "merge");
    assert!(json["measurements"][0]["elapsed_ms"].is_f64());
}
