//! 25-bit cell sets for ownership and line masks

use super::{Pos, LINES, TOTAL_CELLS};

/// Set of board cells, one bit per cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u32,
}

/// Line masks in the same order as [`LINES`].
pub const LINE_MASKS: [Bitboard; 12] = build_line_masks();

const fn build_line_masks() -> [Bitboard; 12] {
    let mut masks = [Bitboard::new(); 12];
    let mut l = 0;
    while l < LINES.len() {
        let mut bits = 0u32;
        let mut k = 0;
        while k < LINES[l].len() {
            bits |= 1 << LINES[l][k];
            k += 1;
        }
        masks[l] = Bitboard { bits };
        l += 1;
    }
    masks
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1 << pos.to_index();
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True when every cell of `other` is also in `self`.
    #[inline]
    pub fn contains_all(&self, other: Bitboard) -> bool {
        self.bits & other.bits == other.bits
    }

    #[inline]
    pub fn intersection(&self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits & other.bits }
    }

    #[inline]
    pub fn union(&self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | other.bits }
    }

    /// Iterate over set positions in index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for pos in iter {
            board.set(pos);
        }
        board
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u32,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }
}
