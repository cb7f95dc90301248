//! Per-line ownership tallies
//!
//! Both the board evaluation and the shogo potential reduce a position to,
//! for each of the 12 lines, how many cells each side holds on it.

use crate::board::bitboard::LINE_MASKS;
use crate::board::{Board, Player};

/// Cell counts on one line from one player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub own: u32,
    pub opp: u32,
}

impl LineTally {
    /// Only `player` has cells here
    #[inline]
    pub fn is_open_for_own(&self) -> bool {
        self.own > 0 && self.opp == 0
    }

    /// Only the opponent has cells here
    #[inline]
    pub fn is_open_for_opp(&self) -> bool {
        self.opp > 0 && self.own == 0
    }

    /// Signed line score: `+own²·w` if uncontested for us, `-opp²·w` if
    /// uncontested for them, zero for mixed or empty lines.
    #[inline]
    pub fn score(&self, line_weight: i32) -> i32 {
        if self.is_open_for_own() {
            (self.own * self.own) as i32 * line_weight
        } else if self.is_open_for_opp() {
            -((self.opp * self.opp) as i32 * line_weight)
        } else {
            0
        }
    }
}

/// Tally every line for `player`.
pub fn line_tallies(board: &Board, player: Player) -> [LineTally; 12] {
    let own = board.owned(player);
    let opp = board.owned(player.opponent());
    let mut tallies = [LineTally::default(); 12];
    for (tally, &mask) in tallies.iter_mut().zip(LINE_MASKS.iter()) {
        tally.own = own.intersection(mask).count();
        tally.opp = opp.intersection(mask).count();
    }
    tallies
}
