//! Win conditions for capture-and-fill
//!
//! Win conditions:
//! 1. Own all five cells of a row, column, or main diagonal
//! 2. Full board with no won line: the parity holding more cells wins

use crate::board::bitboard::LINE_MASKS;
use crate::board::{Bitboard, Board, Player};

/// Number of lines fully owned by `player`
pub fn completed_lines(board: &Board, player: Player) -> usize {
    let owned = board.owned(player);
    LINE_MASKS.iter().filter(|&&m| owned.contains_all(m)).count()
}

/// Check if `player` owns at least one complete line
#[inline]
pub fn has_line(board: &Board, player: Player) -> bool {
    let owned = board.owned(player);
    LINE_MASKS.iter().any(|&m| owned.contains_all(m))
}

/// Winner by the line rule alone.
///
/// If both sides somehow own a line, the side with more completed lines
/// wins and an equal count is treated as no winner.
pub fn line_winner(board: &Board) -> Option<Player> {
    let p1 = completed_lines(board, Player::P1);
    let p2 = completed_lines(board, Player::P2);
    match (p1, p2) {
        (0, 0) => None,
        (a, b) if a > b => Some(Player::P1),
        (a, b) if b > a => Some(Player::P2),
        _ => None,
    }
}

/// Winner of a full board by parity majority; `None` while cells remain.
pub fn fill_winner(board: &Board) -> Option<Player> {
    if !board.is_full() {
        return None;
    }
    let even = board.count_owned(Player::P1);
    let odd = board.count_owned(Player::P2);
    match even.cmp(&odd) {
        std::cmp::Ordering::Greater => Some(Player::P1),
        std::cmp::Ordering::Less => Some(Player::P2),
        std::cmp::Ordering::Equal => None,
    }
}

/// Check for a winner
///
/// Returns `Some(Player)` if there's a winner, `None` otherwise.
///
/// Win conditions checked:
/// 1. Completed line
/// 2. Fill tiebreak on a full board
pub fn check_winner(board: &Board) -> Option<Player> {
    line_winner(board).or_else(|| fill_winner(board))
}

/// Winner right after `mover` played: a mover-owned line takes precedence.
pub(crate) fn winner_after_move(board: &Board, mover: Player) -> Option<Player> {
    if has_line(board, mover) {
        return Some(mover);
    }
    if has_line(board, mover.opponent()) {
        return Some(mover.opponent());
    }
    fill_winner(board)
}

/// Union of every cell on a currently won line, for highlighting.
pub fn winning_lines(board: &Board) -> Bitboard {
    let p1 = board.owned(Player::P1);
    let p2 = board.owned(Player::P2);
    LINE_MASKS
        .iter()
        .filter(|&&m| p1.contains_all(m) || p2.contains_all(m))
        .fold(Bitboard::new(), |acc, &m| acc.union(m))
}

/// Points awarded to `winner` for a finished shogo round:
/// completed lines plus one for holding the fill majority, capped at
/// `max_points`, never below one.
pub fn round_points(board: &Board, winner: Player, max_points: u32) -> u32 {
    let lines = completed_lines(board, winner) as u32;
    let fill_bonus = u32::from(fill_winner(board) == Some(winner));
    (lines + fill_bonus).clamp(1, max_points.max(1))
}
