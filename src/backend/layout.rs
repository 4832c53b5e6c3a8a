//! Parallel layout of a vector: global size and the contiguous range owned locally.

use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    size: usize,
    owned: Range<usize>,
}

impl Layout {
    /// Layout of a vector that is entirely owned by the calling process.
    pub fn serial(size: usize) -> Self {
        Self { size, owned: 0..size }
    }

    /// Split `size` entries over `n_ranks` owners as evenly as possible; the first
    /// `size % n_ranks` ranks own one extra entry.
    pub fn split(size: usize, rank: usize, n_ranks: usize) -> Self {
        assert!(rank < n_ranks, "rank {} out of {} ranks", rank, n_ranks);
        let base = size / n_ranks;
        let extra = size % n_ranks;
        let begin = rank * base + rank.min(extra);
        let local = base + usize::from(rank < extra);
        Self { size, owned: begin..begin + local }
    }

    pub fn size(&self) -> usize { self.size }

    pub fn local_size(&self) -> usize { self.owned.len() }

    pub fn owned(&self) -> Range<usize> { self.owned.clone() }

    pub fn owns(&self, index: usize) -> bool { self.owned.contains(&index) }
}
