//! Row-partitioned multithreaded GEMM.
//!
//! The output rows are divided into contiguous chunks, one per worker, and
//! C is carved into the matching disjoint bands with `split_at_mut` before
//! any thread starts. Workers therefore cannot alias each other's output,
//! and no locks or atomics are involved; the scope join is the only
//! synchronization point. Both calls return only after every worker has
//! finished, so the caller always observes a fully accumulated C.

use crate::kernels::blocked::gemm_blocked_band;
use crate::kernels::naive::gemm_mnk_band;
use crate::partition::{block_chunks, row_chunks};
use std::ops::Range;
use std::thread;

/// Multithreaded accumulation C += A * B with `num_threads` workers
/// (values below 1 are clamped up to 1), each running the MNK nest over
/// its own row chunk.
///
/// A is m×k, B is k×n, C is m×n, all row-major. Workers with an empty
/// chunk (more threads than rows) do no work.
pub fn gemm_threaded(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    num_threads: usize,
) {
    let chunks = row_chunks(m, num_threads);
    run_partitioned(c, n, chunks, |band, rows| {
        gemm_mnk_band(a, b, band, rows, n, k);
    });
}

/// Multithreaded blocked accumulation: the row partition is rounded to
/// i-block granularity, and each worker runs the blocked traversal over
/// its span. Same disjointness and join behavior as [`gemm_threaded`].
pub fn gemm_threaded_blocked(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    num_threads: usize,
    block_size: usize,
) {
    let chunks = block_chunks(m, num_threads, block_size);
    run_partitioned(c, n, chunks, |band, rows| {
        gemm_blocked_band(a, b, band, rows, n, k, block_size);
    });
}

/// Carve C into one band per chunk and run `work` on each band in its own
/// scoped thread. Returns once all workers have joined.
fn run_partitioned<F>(c: &mut [f64], n: usize, chunks: Vec<Range<usize>>, work: F)
where
    F: Fn(&mut [f64], Range<usize>) + Sync,
{
    thread::scope(|s| {
        let work = &work;
        let mut rest = c;
        for rows in chunks {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n);
            rest = tail;
            if rows.is_empty() {
                continue;
            }
            s.spawn(move || work(band, rows));
        }
    });
}
