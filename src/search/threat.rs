//! One-ply threat detection
//!
//! Threats on a 5×5 board are short: a side either wins on its next
//! placement or it does not. This module answers the three questions the
//! selectors ask before (or instead of) searching:
//! - Which placements win right now?
//! - Which placements win right now by completing a line?
//! - Does a move hand the opponent an immediate line win?

use crate::board::{Board, Player, Pos};
use crate::rules::{apply_move, has_line, legal_moves, MoveOutcome};

/// Legal placements for `player` that end the game in `player`'s favor,
/// by line or by filling the board.
pub fn winning_moves(board: &Board, player: Player) -> Vec<Pos> {
    winning_outcomes(board, player)
        .into_iter()
        .map(|(pos, _)| pos)
        .collect()
}

/// Winning placements together with their outcomes, in index order.
pub fn winning_outcomes(board: &Board, player: Player) -> Vec<(Pos, MoveOutcome)> {
    legal_moves(board, player)
        .into_iter()
        .filter_map(|pos| {
            apply_move(board, pos, player)
                .ok()
                .filter(|o| o.winner == Some(player))
                .map(|o| (pos, o))
        })
        .collect()
}

/// Check if `player` can complete a line with a single placement.
pub fn has_line_win(board: &Board, player: Player) -> bool {
    legal_moves(board, player).into_iter().any(|pos| {
        apply_move(board, pos, player)
            .map(|o| has_line(&o.board, player))
            .unwrap_or(false)
    })
}

/// Check if `player` placing at `pos` lets the opponent win by the line
/// rule on the very next ply. A move that wins outright is never dangerous.
pub fn is_dangerous_move(board: &Board, pos: Pos, player: Player) -> bool {
    match apply_move(board, pos, player) {
        Ok(outcome) => is_dangerous_outcome(&outcome, player),
        Err(_) => false,
    }
}

/// `is_dangerous_move` for an already applied move.
pub fn is_dangerous_outcome(outcome: &MoveOutcome, player: Player) -> bool {
    if outcome.winner.is_some() {
        return false;
    }
    has_line_win(&outcome.board, player.opponent())
}
