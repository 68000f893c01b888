//! Partition arithmetic for the blocked and threaded kernels.
//!
//! The threaded kernels are race-free only because every worker writes a
//! disjoint row range of C. The range math lives here as plain functions
//! so that the no-gap/no-overlap property can be tested directly.

use std::ops::Range;

/// Contiguous row chunks tiling [0, m) across `num_threads` workers.
///
/// Chunks are `ceil(m / num_threads)` rows each; trailing chunks are
/// clipped to `m` and may be empty when there are more workers than rows.
pub fn row_chunks(m: usize, num_threads: usize) -> Vec<Range<usize>> {
    let workers = num_threads.max(1);
    let rows_per_worker = m.div_ceil(workers);
    (0..workers)
        .map(|t| {
            let start = (t * rows_per_worker).min(m);
            let end = (start + rows_per_worker).min(m);
            start..end
        })
        .collect()
}

/// Row chunks tiling [0, m) at i-block granularity.
///
/// Each worker receives `ceil(i_blocks / num_threads)` whole blocks of
/// `block_size` rows, so chunk boundaries never split a block; only the
/// final non-empty chunk may end mid-block, clipped to `m`.
pub fn block_chunks(m: usize, num_threads: usize, block_size: usize) -> Vec<Range<usize>> {
    let workers = num_threads.max(1);
    let bs = block_size.max(1);
    let i_blocks = m.div_ceil(bs);
    let blocks_per_worker = i_blocks.div_ceil(workers);
    (0..workers)
        .map(|t| {
            let start_block = (t * blocks_per_worker).min(i_blocks);
            let end_block = (start_block + blocks_per_worker).min(i_blocks);
            let start = (start_block * bs).min(m);
            let end = (end_block * bs).min(m);
            start..end
        })
        .collect()
}

/// Iterator over block sub-ranges of [0, extent), each `block_size` long
/// except the last, which is clipped to the bound.
pub fn block_ranges(extent: usize, block_size: usize) -> impl Iterator<Item = Range<usize>> {
    let bs = block_size.max(1);
    (0..extent)
        .step_by(bs)
        .map(move |start| start..(start + bs).min(extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Chunks must tile [0, m) exactly once each: consecutive, gap-free,
    // starting at 0 and ending at m.
    fn assert_tiles(chunks: &[Range<usize>], m: usize) {
        let mut cursor = 0;
        for chunk in chunks {
            assert_eq!(chunk.start, cursor, "gap or overlap at row {}", cursor);
            assert!(chunk.end >= chunk.start);
            cursor = chunk.end;
        }
        assert_eq!(cursor, m, "chunks do not cover all {} rows", m);
    }

    #[test]
    fn test_row_chunks_cover_exactly() {
        for m in [0, 1, 2, 5, 7, 16, 100] {
            for t in 1..=8 {
                assert_tiles(&row_chunks(m, t), m);
            }
        }
    }

    #[test]
    fn test_row_chunks_ceil_sizing() {
        // ceil(10 / 4) = 3 rows per worker, last chunk clipped.
        let chunks = row_chunks(10, 4);
        assert_eq!(chunks, vec![0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn test_row_chunks_more_workers_than_rows() {
        let chunks = row_chunks(3, 8);
        assert_tiles(&chunks, 3);
        assert_eq!(chunks.len(), 8);
        assert!(chunks[3..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_row_chunks_zero_rows() {
        let chunks = row_chunks(0, 4);
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_row_chunks_clamps_zero_workers() {
        assert_eq!(row_chunks(5, 0), vec![0..5]);
    }

    #[test]
    fn test_block_chunks_cover_exactly() {
        for m in [0, 1, 7, 10, 32, 33, 100] {
            for t in 1..=6 {
                for bs in [1, 3, 4, 32, 64] {
                    assert_tiles(&block_chunks(m, t, bs), m);
                }
            }
        }
    }

    #[test]
    fn test_block_chunks_align_to_blocks() {
        // 10 rows in blocks of 4 -> 3 i-blocks; 2 workers get 2 + 1.
        let chunks = block_chunks(10, 2, 4);
        assert_eq!(chunks, vec![0..8, 8..10]);
        // Every chunk start sits on a block boundary.
        for chunk in &chunks {
            assert_eq!(chunk.start % 4, 0);
        }
    }

    #[test]
    fn test_block_chunks_more_workers_than_blocks() {
        let chunks = block_chunks(10, 8, 4);
        assert_tiles(&chunks, 10);
        assert!(chunks[3..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_block_ranges_clip_final() {
        let ranges: Vec<_> = block_ranges(10, 4).collect();
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_block_ranges_degenerate() {
        assert_eq!(block_ranges(0, 4).count(), 0);
        let whole: Vec<_> = block_ranges(5, 64).collect();
        assert_eq!(whole, vec![0..5]);
        // block_size of 0 is clamped up to 1
        assert_eq!(block_ranges(3, 0).count(), 3);
    }
}
