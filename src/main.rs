//! Sorting Benchmark Main Program
//!
//! Runs merge, selection and bubble sort under the scalar, branchless and
//! vector kernels on one shared random array.

use clap::{Parser, ValueEnum};
use float_sort_bench::bench::{self, BenchConfig, Report};
use float_sort_bench::kernel::KernelKind;
use float_sort_bench::sort::Algorithm;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "float-sort-bench", version, about = "Benchmark sort kernels on random f32 arrays")]
struct Cli {
    /// Number of samples (accepts k/m suffixes, e.g. 10k, 1.5m)
    #[arg(short = 'n', long, default_value = "10000", value_parser = bench::parse_count)]
    size: usize,

    /// Seed for the sample generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Kernels to run (repeatable; default: all)
    #[arg(short = 'k', long = "kernel", value_enum)]
    kernels: Vec<KernelKind>,

    /// Algorithms to run (repeatable; default: all)
    #[arg(short = 'a', long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// Timed runs per variant, averaged
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            len: self.size,
            seed: self.seed,
            kernels: if self.kernels.is_empty() {
                defaults.kernels
            } else {
                first_seen(&self.kernels)
            },
            algorithms: if self.algorithms.is_empty() {
                defaults.algorithms
            } else {
                first_seen(&self.algorithms)
            },
            runs: self.runs,
        }
    }
}

/// Drops repeated selections, keeping first-seen order.
fn first_seen<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for &item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_text(report: &Report, config: &BenchConfig) {
    println!("========================================");
    println!("Sorting benchmark (array size: {}, seed: {})", report.len, report.seed);
    if report.runs > 1 {
        println!("Mean of {} runs per variant", report.runs);
    }
    println!("========================================\n");

    for &kernel in &config.kernels {
        for &algorithm in &config.algorithms {
            let Some(m) = report.find(algorithm, kernel) else {
                continue;
            };
            println!("{} ({}):", algorithm.title(), kernel);
            println!("  Elapsed: {:.3} ms", m.elapsed_ms());
            println!("  Sorted:  {}\n", if m.sorted { "yes" } else { "no" });
        }
    }

    for &algorithm in &config.algorithms {
        let speedups: Vec<_> = config
            .kernels
            .iter()
            .filter(|&&k| k != KernelKind::Scalar)
            .filter_map(|&k| report.speedup(algorithm, k).map(|s| (k, s)))
            .collect();
        if speedups.is_empty() {
            continue;
        }
        println!("{} speedup over scalar:", algorithm.title());
        for (kernel, speedup) in speedups {
            println!("  {:10}: {:.2}x", kernel.label(), speedup);
        }
        println!();
    }
}

/// Process exit status for a finished benchmark.
const EXIT_OK: u8 = 0;
/// Process exit status when the sample arrays cannot be set up.
const EXIT_FAILURE: u8 = 1;

/// Runs the benchmark and prints the report; returns the process exit status.
fn execute(config: &BenchConfig, format: Format) -> u8 {
    let report = match bench::run(config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "benchmark aborted");
            eprintln!("error: {err}");
            return EXIT_FAILURE;
        }
    };

    match format {
        Format::Text => print_text(&report, config),
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                return EXIT_FAILURE;
            }
        },
    }

    EXIT_OK
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ExitCode::from(execute(&cli.config(), cli.format))
}
