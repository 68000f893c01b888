//! The six naive loop orderings.
//!
//! All orderings compute C[i,j] += sum_p A[i,p] * B[p,j]; they differ only
//! in traversal order and therefore cache behavior. Results agree up to
//! floating-point summation order, not bit-for-bit.

/// Permutations of the (row, column, reduction) loop nest, named by which
/// dimension each of the outer/middle/inner loops walks: M rows, N
/// columns, K the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopOrder {
    Mnk,
    Mkn,
    Nmk,
    Nkm,
    Kmn,
    Knm,
}

impl LoopOrder {
    /// All six orderings, in the order the sweep reports them.
    pub const ALL: [LoopOrder; 6] = [
        LoopOrder::Mnk,
        LoopOrder::Mkn,
        LoopOrder::Nmk,
        LoopOrder::Nkm,
        LoopOrder::Kmn,
        LoopOrder::Knm,
    ];

    /// Column label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            LoopOrder::Mnk => "MNK",
            LoopOrder::Mkn => "MKN",
            LoopOrder::Nmk => "NMK",
            LoopOrder::Nkm => "NKM",
            LoopOrder::Kmn => "KMN",
            LoopOrder::Knm => "KNM",
        }
    }
}

/// Naive triple-loop accumulation C += A * B in the given loop order.
///
/// A is m×k, B is k×n, C is m×n, all row-major. Where the innermost loop
/// does not touch one of the operands, the invariant element is hoisted
/// into a local (a micro-optimization; the result is identical).
pub fn gemm_naive(order: LoopOrder, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    match order {
        LoopOrder::Mnk => {
            for i in 0..m {
                for j in 0..n {
                    for p in 0..k {
                        c[i * n + j] += a[i * k + p] * b[p * n + j];
                    }
                }
            }
        }
        LoopOrder::Mkn => {
            for i in 0..m {
                for p in 0..k {
                    let a_ip = a[i * k + p];
                    for j in 0..n {
                        c[i * n + j] += a_ip * b[p * n + j];
                    }
                }
            }
        }
        LoopOrder::Nmk => {
            for j in 0..n {
                for i in 0..m {
                    for p in 0..k {
                        c[i * n + j] += a[i * k + p] * b[p * n + j];
                    }
                }
            }
        }
        LoopOrder::Nkm => {
            for j in 0..n {
                for p in 0..k {
                    let b_pj = b[p * n + j];
                    for i in 0..m {
                        c[i * n + j] += a[i * k + p] * b_pj;
                    }
                }
            }
        }
        LoopOrder::Kmn => {
            for p in 0..k {
                for i in 0..m {
                    let a_ip = a[i * k + p];
                    for j in 0..n {
                        c[i * n + j] += a_ip * b[p * n + j];
                    }
                }
            }
        }
        LoopOrder::Knm => {
            for p in 0..k {
                for j in 0..n {
                    let b_pj = b[p * n + j];
                    for i in 0..m {
                        c[i * n + j] += a[i * k + p] * b_pj;
                    }
                }
            }
        }
    }
}

/// MNK accumulation restricted to the absolute row range `rows`, writing
/// into `c_band`, the disjoint slice of C holding exactly those rows.
pub(crate) fn gemm_mnk_band(
    a: &[f64],
    b: &[f64],
    c_band: &mut [f64],
    rows: std::ops::Range<usize>,
    n: usize,
    k: usize,
) {
    for (i, ai) in rows.enumerate() {
        for j in 0..n {
            for p in 0..k {
                c_band[i * n + j] += a[ai * k + p] * b[p * n + j];
            }
        }
    }
}
