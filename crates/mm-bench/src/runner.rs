use crate::config::BenchConfig;
use crate::error::Result;
use crate::gen::random_matrix;
use crate::report::CsvReport;
use mm_kernels::{Gemm, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::Instant;

/// One labeled strategy in a sweep.
pub struct Variant {
    pub label: String,
    pub kernel: Box<dyn Gemm>,
}

impl Variant {
    /// A variant labeled with the kernel's own name.
    pub fn new(kernel: Box<dyn Gemm>) -> Self {
        Variant {
            label: kernel.name().to_string(),
            kernel,
        }
    }

    /// A variant with an explicit report label.
    pub fn labeled(label: &str, kernel: Box<dyn Gemm>) -> Self {
        Variant {
            label: label.to_string(),
            kernel,
        }
    }
}

/// Average wall-clock seconds for one kernel, resetting C to zero before
/// each of `runs` timed calls.
pub fn time_kernel(
    kernel: &dyn Gemm,
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    runs: usize,
) -> Result<f64> {
    let runs = runs.max(1);
    let mut total = 0.0;
    for _ in 0..runs {
        c.fill_zero();
        let start = Instant::now();
        kernel.run(a, b, c)?;
        total += start.elapsed().as_secs_f64();
    }
    Ok(total / runs as f64)
}

/// Run the full sweep: for each configured size, generate square A and B,
/// time every variant, and append one CSV row.
///
/// A, B and C are allocated before the timing loop for a size; only the
/// kernel call itself is measured.
pub fn run_sweep<W: Write>(
    config: &BenchConfig,
    variants: &[Variant],
    report: &mut CsvReport<W>,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    for &size in &config.sizes {
        let (m, n, k) = (size, size, size);
        println!("Testing matrices of size {} x {}...", size, size);

        let a = random_matrix(&mut rng, m, k);
        let b = random_matrix(&mut rng, k, n);
        let mut c = Matrix::zeros(m, n);

        let mut times = Vec::with_capacity(variants.len());
        for variant in variants {
            let avg = time_kernel(variant.kernel.as_ref(), &a, &b, &mut c, config.runs)?;
            println!("  {}: {:.6} s", variant.label, avg);
            times.push(avg);
        }

        report.write_row(size, &times)?;
    }

    Ok(())
}
