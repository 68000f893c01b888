//! Cache-blocked GEMM.
//!
//! The three loop dimensions are tiled into `block_size` chunks so the
//! working set of the inner triple loop stays cache-resident. Traversal is
//! i-blocks outer, j-blocks middle, p-blocks inner, with plain MNK order
//! inside each block triple. Blocking changes traversal order only; the
//! accumulated result matches the naive kernels up to summation order.

use crate::partition::block_ranges;
use std::ops::Range;

/// Blocked accumulation C += A * B with square tiles of `block_size`
/// (values below 1 are clamped up to 1).
///
/// A is m×k, B is k×n, C is m×n, all row-major.
pub fn gemm_blocked(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    block_size: usize,
) {
    gemm_blocked_band(a, b, c, 0..m, n, k, block_size);
}

/// Blocked accumulation restricted to the absolute row range `rows`,
/// writing into `c_band`, the disjoint slice of C holding exactly those
/// rows. `rows.start` must sit on a block boundary, which the block-level
/// partitioning guarantees.
pub(crate) fn gemm_blocked_band(
    a: &[f64],
    b: &[f64],
    c_band: &mut [f64],
    rows: Range<usize>,
    n: usize,
    k: usize,
    block_size: usize,
) {
    let row0 = rows.start;
    let band_rows = rows.len();
    for ib in block_ranges(band_rows, block_size) {
        for jb in block_ranges(n, block_size) {
            for pb in block_ranges(k, block_size) {
                for i in ib.clone() {
                    for j in jb.clone() {
                        for p in pb.clone() {
                            c_band[i * n + j] += a[(row0 + i) * k + p] * b[p * n + j];
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::naive::{gemm_naive, LoopOrder};

    fn fill(len: usize, modulus: usize) -> Vec<f64> {
        (0..len).map(|i| (i % modulus) as f64).collect()
    }

    #[test]
    fn test_known_2x2() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];
        gemm_blocked(&a, &b, &mut c, 2, 2, 2, 32);
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matches_naive_across_sizes_and_blocks() {
        let cases = [(5, 5, 5), (8, 8, 8), (7, 3, 5), (13, 17, 11), (16, 16, 16)];
        for (m, n, k) in cases {
            let a = fill(m * k, 10);
            let b = fill(k * n, 13);

            let mut reference = vec![0.0; m * n];
            gemm_naive(LoopOrder::Mnk, &a, &b, &mut reference, m, n, k);

            for bs in [1, 2, 3, 4, 8, 64] {
                let mut c = vec![0.0; m * n];
                gemm_blocked(&a, &b, &mut c, m, n, k, bs);
                for (idx, (&want, &got)) in reference.iter().zip(c.iter()).enumerate() {
                    assert!(
                        (want - got).abs() < 1e-9,
                        "{}x{}x{} bs={} mismatch at {}: {} vs {}",
                        m,
                        n,
                        k,
                        bs,
                        idx,
                        want,
                        got
                    );
                }
            }
        }
    }

    #[test]
    fn test_block_covering_whole_matrix_is_naive() {
        // A single block degenerates to the plain MNK nest, so the
        // operation order and therefore the bits are identical.
        let (m, n, k) = (6, 7, 5);
        let a = fill(m * k, 9);
        let b = fill(k * n, 11);

        let mut naive = vec![0.0; m * n];
        gemm_naive(LoopOrder::Mnk, &a, &b, &mut naive, m, n, k);

        let mut blocked = vec![0.0; m * n];
        gemm_blocked(&a, &b, &mut blocked, m, n, k, 64);
        assert_eq!(naive, blocked);
    }

    #[test]
    fn test_block_size_zero_clamped() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];
        gemm_blocked(&a, &b, &mut c, 2, 2, 2, 0);
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_empty_dimensions() {
        let mut c = vec![2.5; 6];
        gemm_blocked(&[], &[], &mut c, 2, 3, 0, 4);
        assert_eq!(c, vec![2.5; 6]);
    }

    #[test]
    fn test_accumulates() {
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![1.0, 2.0, 3.0, 4.0];
        let mut c = vec![10.0; 4];
        gemm_blocked(&a, &b, &mut c, 2, 2, 2, 2);
        assert_eq!(c, vec![11.0, 12.0, 13.0, 14.0]);
    }
}
