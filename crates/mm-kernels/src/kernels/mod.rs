//! Slice-level GEMM kernels.
//!
//! These free functions do the actual arithmetic on raw row-major slices
//! and trust the caller to supply consistent dimensions; shape validation
//! happens at the [`crate::kernel::Gemm`] boundary.

pub mod blocked;
pub mod naive;
pub mod threaded;

pub use blocked::gemm_blocked;
pub use naive::{gemm_naive, LoopOrder};
pub use threaded::{gemm_threaded, gemm_threaded_blocked};
