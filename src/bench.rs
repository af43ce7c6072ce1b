//! Benchmark harness: copy -> time -> sort -> verify, once per variant.

use crate::array;
use crate::error::{Error, Result};
use crate::kernel::KernelKind;
use crate::sort::Algorithm;
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Array length used when none is configured.
pub const DEFAULT_LEN: usize = 10_000;

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub len: usize,
    /// Seed for the sample generator; `None` draws a fresh one.
    pub seed: Option<u64>,
    pub kernels: Vec<KernelKind>,
    pub algorithms: Vec<Algorithm>,
    /// Timed repetitions per variant, averaged. Zero is treated as one.
    pub runs: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            seed: None,
            kernels: KernelKind::ALL.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            runs: 1,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub kernel: KernelKind,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
    pub sorted: bool,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub len: usize,
    pub seed: u64,
    pub runs: u32,
    /// In execution order: kernels outer, algorithms inner.
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub fn find(&self, algorithm: Algorithm, kernel: KernelKind) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.algorithm == algorithm && m.kernel == kernel)
    }

    /// Speedup of `kernel` over the scalar kernel for `algorithm`.
    pub fn speedup(&self, algorithm: Algorithm, kernel: KernelKind) -> Option<f64> {
        let baseline = self.find(algorithm, KernelKind::Scalar)?;
        let candidate = self.find(algorithm, kernel)?;
        let candidate_secs = candidate.elapsed.as_secs_f64();
        if candidate_secs == 0.0 {
            return None;
        }
        Some(baseline.elapsed.as_secs_f64() / candidate_secs)
    }

    pub fn all_sorted(&self) -> bool {
        self.measurements.iter().all(|m| m.sorted)
    }
}

/// Runs every configured (kernel, algorithm) pair against the same input.
pub fn run(config: &BenchConfig) -> Result<Report> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let runs = config.runs.max(1);
    info!(len = config.len, seed, runs, "generating samples");

    let original = array::generate(config.len, seed)?;
    let mut work = array::allocate(config.len)?;

    let mut measurements = Vec::with_capacity(config.kernels.len() * config.algorithms.len());
    for &kernel in &config.kernels {
        for &algorithm in &config.algorithms {
            let measurement = measure(algorithm, kernel, &original, &mut work, runs);
            if !measurement.sorted {
                warn!(%algorithm, %kernel, "output is not sorted");
            }
            measurements.push(measurement);
        }
    }

    Ok(Report {
        len: config.len,
        seed,
        runs,
        measurements,
    })
}

fn measure(
    algorithm: Algorithm,
    kernel: KernelKind,
    original: &[f32],
    work: &mut [f32],
    runs: u32,
) -> Measurement {
    let mut total = Duration::ZERO;
    let mut sorted = true;

    for run in 0..runs {
        array::copy_into(work, original);

        let start = Instant::now();
        algorithm.sort(kernel, work);
        let elapsed = start.elapsed();

        let ok = array::is_sorted(work);
        debug!(%algorithm, %kernel, run, elapsed_ms = elapsed.as_secs_f64() * 1000.0, sorted = ok);
        total += elapsed;
        sorted &= ok;
    }

    Measurement {
        algorithm,
        kernel,
        elapsed: total / runs,
        sorted,
    }
}

/// Parses an element count such as `10000`, `10k` or `1.5m`.
pub fn parse_count(input: &str) -> Result<usize> {
    let s = input.trim().to_lowercase();
    let (num_str, multiplier) = if let Some(rest) = s.strip_suffix('m') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = s.strip_suffix('k') {
        (rest, 1_000.0)
    } else {
        (s.as_str(), 1.0)
    };

    let invalid = |reason: String| Error::InvalidCount {
        input: input.to_string(),
        reason,
    };

    let n: f64 = num_str.parse().map_err(|e| invalid(format!("{e}")))?;
    if !n.is_finite() || n < 0.0 {
        return Err(invalid("must be a non-negative number".into()));
    }
    let count = n * multiplier;
    if count.fract() != 0.0 {
        return Err(invalid("must be a whole number of elements".into()));
    }
    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            len: 300,
            seed: Some(99),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn default_matches_fixed_size_programs() {
        let config = BenchConfig::default();
        assert_eq!(config.len, 10_000);
        assert_eq!(config.kernels.len(), 3);
        assert_eq!(config.algorithms.len(), 3);
        assert_eq!(config.runs, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn run_measures_every_variant_in_order() {
        let report = run(&small_config()).unwrap();
        assert_eq!(report.seed, 99);
        assert_eq!(report.len, 300);
        assert_eq!(report.measurements.len(), 9);
        assert!(report.all_sorted());

        let order: Vec<_> = report
            .measurements
            .iter()
            .map(|m| (m.kernel, m.algorithm))
            .collect();
        assert_eq!(order[0], (KernelKind::Scalar, Algorithm::Merge));
        assert_eq!(order[1], (KernelKind::Scalar, Algorithm::Selection));
        assert_eq!(order[3], (KernelKind::Branchless, Algorithm::Merge));
        assert_eq!(order[8], (KernelKind::Vector, Algorithm::Bubble));
    }

    #[test]
    fn run_respects_filters_and_runs() {
        let config = BenchConfig {
            kernels: vec![KernelKind::Vector],
            algorithms: vec![Algorithm::Bubble, Algorithm::Merge],
            runs: 3,
            ..small_config()
        };
        let report = run(&config).unwrap();
        assert_eq!(report.runs, 3);
        assert_eq!(report.measurements.len(), 2);
        assert_eq!(report.measurements[0].algorithm, Algorithm::Bubble);
        assert!(report.find(Algorithm::Selection, KernelKind::Vector).is_none());
        assert!(report.speedup(Algorithm::Merge, KernelKind::Vector).is_none());
    }

    #[test]
    fn zero_runs_counts_as_one() {
        let config = BenchConfig {
            runs: 0,
            ..small_config()
        };
        assert_eq!(run(&config).unwrap().runs, 1);
    }

    #[test]
    fn empty_array() {
        let config = BenchConfig {
            len: 0,
            ..small_config()
        };
        let report = run(&config).unwrap();
        assert!(report.all_sorted());
    }

    #[test]
    fn speedup_against_scalar() {
        let report = Report {
            len: 4,
            seed: 0,
            runs: 1,
            measurements: vec![
                Measurement {
                    algorithm: Algorithm::Merge,
                    kernel: KernelKind::Scalar,
                    elapsed: Duration::from_millis(10),
                    sorted: true,
                },
                Measurement {
                    algorithm: Algorithm::Merge,
                    kernel: KernelKind::Vector,
                    elapsed: Duration::from_millis(4),
                    sorted: true,
                },
            ],
        };
        let speedup = report.speedup(Algorithm::Merge, KernelKind::Vector).unwrap();
        assert!((speedup - 2.5).abs() < 1e-9);
        assert_eq!(report.speedup(Algorithm::Merge, KernelKind::Scalar), Some(1.0));
    }

    #[test]
    fn json_report_uses_milliseconds() {
        let report = Report {
            len: 1,
            seed: 5,
            runs: 1,
            measurements: vec![Measurement {
                algorithm: Algorithm::Selection,
                kernel: KernelKind::Branchless,
                elapsed: Duration::from_micros(1500),
                sorted: true,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        let m = &json["measurements"][0];
        assert_eq!(m["algorithm"], "selection");
        assert_eq!(m["kernel"], "branchless");
        assert_eq!(m["elapsed_ms"], 1.5);
        assert_eq!(m["sorted"], true);
    }

    #[test]
    fn counts() {
        assert_eq!(parse_count("10000").unwrap(), 10_000);
        assert_eq!(parse_count("10k").unwrap(), 10_000);
        assert_eq!(parse_count("1.5M").unwrap(), 1_500_000);
        assert_eq!(parse_count("0").unwrap(), 0);
        assert!(parse_count("ten").is_err());
        assert!(parse_count("-5").is_err());
        assert!(parse_count("k").is_err());
    }

    #[test]
    fn fractional_counts_are_rejected() {
        assert_eq!(parse_count("2.5k").unwrap(), 2_500);
        for input in ["10.7", "0.0001k", "1.0000005m"] {
            match parse_count(input) {
                Err(Error::InvalidCount { input: got, .. }) => assert_eq!(got, input),
                other => panic!("{input} should be rejected, got {other:?}"),
            }
        }
    }
}
