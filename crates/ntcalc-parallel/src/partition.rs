//! Static range partitioning for parallel workers.

use ntcalc_core::NtError;

/// A contiguous inclusive sub-range assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First value in the chunk.
    pub start: u64,
    /// Last value in the chunk (inclusive).
    pub end: u64,
}

impl Chunk {
    /// Number of integers covered by the chunk.
    ///
    /// Returned as u128 because a single chunk may span the full u64
    /// domain.
    #[must_use]
    pub fn span(&self) -> u128 {
        u128::from(self.end - self.start) + 1
    }
}

/// Split `[start, end]` into `workers` contiguous chunks with no gaps
/// or overlaps.
///
/// Chunk sizes come from integer division; the final chunk absorbs the
/// remainder. The worker count is capped at the range size so no chunk
/// is ever empty. `start > end` and `workers == 0` are rejected before
/// any division.
#[allow(clippy::cast_possible_truncation)]
pub fn partition(start: u64, end: u64, workers: u32) -> Result<Vec<Chunk>, NtError> {
    if start > end {
        return Err(NtError::EmptyRange { start, end });
    }
    if workers == 0 {
        return Err(NtError::ZeroWorkers);
    }

    // The inclusive span of the full u64 domain does not fit in u64,
    // so the boundary arithmetic runs in u128.
    let span = u128::from(end - start) + 1;
    let workers = u128::from(workers).min(span);
    let chunk_size = span / workers;

    let mut chunks = Vec::with_capacity(workers as usize);
    for i in 0..workers {
        let chunk_start = u128::from(start) + i * chunk_size;
        let chunk_end = if i == workers - 1 {
            u128::from(end)
        } else {
            chunk_start + chunk_size - 1
        };
        chunks.push(Chunk {
            start: chunk_start as u64,
            end: chunk_end as u64,
        });
    }
    Ok(chunks)
}
