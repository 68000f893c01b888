/// Matrix sizes the sweep measures when none are given on the command
/// line: every decade up to 100, then 200-400.
pub const DEFAULT_SIZES: [usize; 13] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 200, 300, 400];

/// Benchmark configuration shared by both sweep modes.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Worker thread count for the multithreaded variants.
    pub num_threads: usize,
    /// Square tile size for the blocked variants.
    pub block_size: usize,
    /// Square matrix sizes to sweep, in measurement order.
    pub sizes: Vec<usize>,
    /// Timed repetitions averaged per (size, strategy) cell.
    pub runs: usize,
    /// Seed for the input-matrix RNG.
    pub seed: u64,
}

impl BenchConfig {
    /// Build a configuration, clamping `num_threads`, `block_size` and
    /// `runs` values below 1 up to 1. Invalid thread/block parameters are
    /// corrected rather than rejected.
    pub fn new(
        num_threads: usize,
        block_size: usize,
        sizes: Vec<usize>,
        runs: usize,
        seed: u64,
    ) -> Self {
        let sizes = if sizes.is_empty() {
            DEFAULT_SIZES.to_vec()
        } else {
            sizes
        };
        BenchConfig {
            num_threads: num_threads.max(1),
            block_size: block_size.max(1),
            sizes,
            runs: runs.max(1),
            seed,
        }
    }
}
