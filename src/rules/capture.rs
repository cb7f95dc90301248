//! Capture rules: sandwich scans with locked walls
//!
//! Capture pattern: M-O-...-O-M where M is the mover and O the opponent.
//! Every sandwiched opponent cell is incremented by one, which flips its
//! parity to the mover. A locked cell (5) stops the scan and voids the run.

use crate::board::{Board, Player, Pos, LOCKED};

/// Direction vectors for capture checking (8 directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),   // →
    (0, -1),  // ←
    (1, 0),   // ↓
    (-1, 0),  // ↑
    (1, 1),   // ↘
    (-1, -1), // ↖
    (1, -1),  // ↙
    (-1, 1),  // ↗
];

/// Scan one direction from `pos` and return the sandwiched run, if any.
fn scan_run(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Vec<Pos> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;

    while Pos::is_valid(r, c) {
        let cell = Pos::new(r as u8, c as u8);
        let value = board.get(cell);
        if value == LOCKED {
            return Vec::new();
        }
        if opponent.owns(value) {
            run.push(cell);
        } else if player.owns(value) {
            return run;
        } else {
            // Empty cell ends the scan without a sandwich
            return Vec::new();
        }
        r += dr;
        c += dc;
    }

    // Ran off the board
    Vec::new()
}

/// Find positions that would be captured if `player` claims `pos`.
///
/// `pos` itself is treated as owned by `player` whatever its current value,
/// so this works both before and after the placement is written.
/// Returned positions are unique and sorted by index.
pub fn get_captured_positions(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let mut captured: Vec<Pos> = DIRECTIONS
        .iter()
        .flat_map(|&(dr, dc)| scan_run(board, pos, player, dr, dc))
        .collect();
    captured.sort_unstable();
    captured.dedup();
    captured
}

/// Increment every captured cell and return the positions touched.
pub fn execute_captures(board: &mut Board, pos: Pos, player: Player) -> Vec<Pos> {
    let captured = get_captured_positions(board, pos, player);
    for &cap in &captured {
        let value = board.get(cap);
        board.set(cap, value + 1);
    }
    captured
}

/// Check if a move would capture in any direction.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !scan_run(board, pos, player, dr, dc).is_empty())
}

/// Count how many cells a move would capture.
#[inline]
pub fn count_captures(board: &Board, pos: Pos, player: Player) -> usize {
    get_captured_positions(board, pos, player).len()
}
