use crate::shape::MatShape;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("gemm dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("output shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: MatShape, got: MatShape },
}

pub type Result<T> = std::result::Result<T, KernelError>;
