//! `mm-kernels` - Dense GEMM kernel family for matmul-bench.
//!
//! This crate provides:
//! - A row-major `Matrix` type with an explicit 2-D `MatShape`
//! - A `Gemm` trait for selectable multiply strategies
//! - The six naive loop orderings (`LoopOrder`)
//! - Cache-blocked, row-partitioned multithreaded, and combined kernels
//! - The partition arithmetic shared by the blocked and threaded variants
//!
//! All strategies accumulate C += A · B into a caller-zeroed output and
//! agree with one another up to floating-point summation order.

pub mod error;
pub mod kernel;
pub mod kernels;
pub mod matrix;
pub mod partition;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use error::{KernelError, Result};
pub use kernel::{Blocked, Gemm, Naive, Threaded, ThreadedBlocked};
pub use kernels::LoopOrder;
pub use matrix::Matrix;
pub use shape::MatShape;
