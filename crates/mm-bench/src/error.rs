use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("kernel error: {0}")]
    Kernel(#[from] mm_kernels::KernelError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
