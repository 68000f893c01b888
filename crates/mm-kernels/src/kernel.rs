use crate::error::{KernelError, Result};
use crate::kernels::{gemm_blocked, gemm_naive, gemm_threaded, gemm_threaded_blocked, LoopOrder};
use crate::matrix::Matrix;
use crate::shape::MatShape;

/// A selectable multiply strategy.
///
/// Every strategy computes the same accumulation C += A · B; they differ
/// in traversal order and parallelism, and therefore in performance, not
/// in the (tolerance-equivalent) numerical result. Strategies hold no
/// state across calls.
pub trait Gemm: Send + Sync {
    /// Display name of this strategy.
    fn name(&self) -> &str;

    /// Accumulate C += A · B.
    ///
    /// A must be m×k, B k×n and C m×n. C is only added into, never
    /// initialized; callers reset it with [`Matrix::fill_zero`] between
    /// accumulation passes.
    ///
    /// # Errors
    /// Returns [`KernelError::DimMismatch`] when A's columns do not match
    /// B's rows, and [`KernelError::ShapeMismatch`] when C is not m×n.
    fn run(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()>;
}

/// Validate one A·B call, returning (m, n, k).
fn check_dims(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(usize, usize, usize)> {
    let (m, k) = (a.rows(), a.cols());
    let (k2, n) = (b.rows(), b.cols());
    if k != k2 {
        return Err(KernelError::DimMismatch { m, k, k2, n });
    }
    if c.rows() != m || c.cols() != n {
        return Err(KernelError::ShapeMismatch {
            expected: MatShape::new(m, n),
            got: c.shape(),
        });
    }
    Ok((m, n, k))
}

/// Naive triple-loop strategy in one of the six loop orderings.
#[derive(Debug, Clone, Copy)]
pub struct Naive(pub LoopOrder);

impl Gemm for Naive {
    fn name(&self) -> &str {
        self.0.label()
    }

    fn run(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let (m, n, k) = check_dims(a, b, c)?;
        gemm_naive(self.0, a.data(), b.data(), c.data_mut(), m, n, k);
        Ok(())
    }
}

/// Cache-blocked strategy.
#[derive(Debug, Clone, Copy)]
pub struct Blocked {
    block_size: usize,
}

impl Blocked {
    /// Create a blocked strategy; a `block_size` below 1 is clamped to 1.
    pub fn new(block_size: usize) -> Self {
        Blocked {
            block_size: block_size.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Gemm for Blocked {
    fn name(&self) -> &str {
        "Blocked MNK"
    }

    fn run(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let (m, n, k) = check_dims(a, b, c)?;
        gemm_blocked(a.data(), b.data(), c.data_mut(), m, n, k, self.block_size);
        Ok(())
    }
}

/// Statically row-partitioned multithreaded strategy.
#[derive(Debug, Clone, Copy)]
pub struct Threaded {
    num_threads: usize,
}

impl Threaded {
    /// Create a threaded strategy; a `num_threads` below 1 is clamped to 1.
    pub fn new(num_threads: usize) -> Self {
        Threaded {
            num_threads: num_threads.max(1),
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }
}

impl Gemm for Threaded {
    fn name(&self) -> &str {
        "Multithreaded MNK"
    }

    fn run(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let (m, n, k) = check_dims(a, b, c)?;
        gemm_threaded(a.data(), b.data(), c.data_mut(), m, n, k, self.num_threads);
        Ok(())
    }
}

/// Combined multithreaded and blocked strategy: the row partition is
/// rounded to i-block granularity and each worker runs the blocked
/// traversal over its span.
#[derive(Debug, Clone, Copy)]
pub struct ThreadedBlocked {
    num_threads: usize,
    block_size: usize,
}

impl ThreadedBlocked {
    /// Create the combined strategy; parameters below 1 are clamped to 1.
    pub fn new(num_threads: usize, block_size: usize) -> Self {
        ThreadedBlocked {
            num_threads: num_threads.max(1),
            block_size: block_size.max(1),
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Gemm for ThreadedBlocked {
    fn name(&self) -> &str {
        "MT+Blocked MNK"
    }

    fn run(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let (m, n, k) = check_dims(a, b, c)?;
        gemm_threaded_blocked(
            a.data(),
            b.data(),
            c.data_mut(),
            m,
            n,
            k,
            self.num_threads,
            self.block_size,
        );
        Ok(())
    }
}
