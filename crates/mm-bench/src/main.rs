//! `mm-bench` - timed sweeps over the GEMM strategy family.
//!
//! Two sweep modes: `orders` measures the six naive loop orderings, and
//! `optimized` measures plain MNK against the blocked, multithreaded and
//! combined variants. Each produces a CSV with one row per matrix size
//! and one column per strategy.

mod config;
mod error;
mod gen;
mod report;
mod runner;

use clap::{Parser, Subcommand};
use config::BenchConfig;
use error::BenchError;
use mm_kernels::{Blocked, LoopOrder, Naive, Threaded, ThreadedBlocked};
use report::CsvReport;
use runner::{run_sweep, Variant};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mm-bench", about = "Dense matrix-multiply benchmark sweeps")]
struct Cli {
    /// Worker threads for the multithreaded variants.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Square tile size for the blocked variants.
    #[arg(long, default_value_t = 32)]
    block_size: usize,

    /// Comma-separated square matrix sizes to sweep.
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Timed repetitions averaged per measurement.
    #[arg(long, default_value_t = 3)]
    runs: usize,

    /// Seed for the input-matrix RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path; defaults to the mode's conventional file name.
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Sweep the six naive loop orderings.
    Orders,
    /// Sweep plain MNK against the blocked and multithreaded variants.
    Optimized,
}

fn main() -> Result<(), BenchError> {
    let cli = Cli::parse();

    let config = BenchConfig::new(
        cli.threads,
        cli.block_size,
        cli.sizes.unwrap_or_default(),
        cli.runs,
        cli.seed.unwrap_or_else(rand::random),
    );

    let (variants, default_output) = match cli.mode {
        Mode::Orders => {
            let variants: Vec<Variant> = LoopOrder::ALL
                .iter()
                .map(|&order| Variant::new(Box::new(Naive(order))))
                .collect();
            (variants, "gemm_times.csv")
        }
        Mode::Optimized => {
            println!(
                "Running with {} threads and block size {}",
                config.num_threads, config.block_size
            );
            let variants = vec![
                Variant::labeled("Original MNK", Box::new(Naive(LoopOrder::Mnk))),
                Variant::labeled("Blocked MNK", Box::new(Blocked::new(config.block_size))),
                Variant::labeled(
                    "Multithreaded MNK",
                    Box::new(Threaded::new(config.num_threads)),
                ),
                Variant::labeled(
                    "MT+Blocked MNK",
                    Box::new(ThreadedBlocked::new(config.num_threads, config.block_size)),
                ),
            ];
            (variants, "mnk_optimized_times.csv")
        }
    };

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_output));
    let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
    let file = BufWriter::new(File::create(&path)?);
    let mut report = CsvReport::new(file, &labels)?;

    run_sweep(&config, &variants, &mut report)?;

    println!(
        "\nBenchmarking complete. Results saved to {}",
        path.display()
    );
    Ok(())
}
