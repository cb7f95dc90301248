//! Corner-adjacency placement restriction
//!
//! A player holding both corners of an edge may not drop into that edge's
//! three interior cells while all three are still empty. Filling any one of
//! them, by either side, lifts the restriction for the rest of that edge.

use crate::board::{Board, Player, Pos};

/// An edge: its two flanking corners and the three cells between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRun {
    pub corners: [usize; 2],
    pub interior: [usize; 3],
}

/// All four edges, enumerated symmetrically.
pub const EDGE_RUNS: [EdgeRun; 4] = [
    // Top
    EdgeRun { corners: [0, 4], interior: [1, 2, 3] },
    // Bottom
    EdgeRun { corners: [20, 24], interior: [21, 22, 23] },
    // Left
    EdgeRun { corners: [0, 20], interior: [5, 10, 15] },
    // Right
    EdgeRun { corners: [4, 24], interior: [9, 14, 19] },
];

impl EdgeRun {
    /// True while `player` holds both corners and the interior is untouched.
    pub fn is_active_for(&self, board: &Board, player: Player) -> bool {
        self.corners
            .iter()
            .all(|&c| player.owns(board.get(Pos::from_index(c))))
            && self
                .interior
                .iter()
                .all(|&i| board.is_empty(Pos::from_index(i)))
    }

    #[inline]
    pub fn covers(&self, pos: Pos) -> bool {
        self.interior.contains(&pos.to_index())
    }
}

/// Check whether the corner rule forbids `player` from placing at `pos`.
pub fn is_corner_restricted(board: &Board, pos: Pos, player: Player) -> bool {
    EDGE_RUNS
        .iter()
        .any(|run| run.covers(pos) && run.is_active_for(board, player))
}
