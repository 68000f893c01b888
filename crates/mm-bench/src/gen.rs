use mm_kernels::Matrix;
use rand::rngs::StdRng;
use rand::Rng;

/// Generate a matrix of uniform [0, 1) values from the given RNG.
///
/// Input generation is the caller's job: kernels only ever read A and B
/// and accumulate into a zeroed C.
pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
    Matrix::new(data, rows, cols)
}
