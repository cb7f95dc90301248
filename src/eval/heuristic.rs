//! Heuristic evaluation function for capture-and-fill positions
//!
//! This module provides the static evaluation used at search leaves and by
//! the greedy CPU tiers. It scores a board based on:
//! - Uncontested lines (squared cell count, weighted)
//! - Center control bonus
//!
//! The score is from one player's point of view and is not symmetric: the
//! center bonus only ever adds to the side that holds the center.

use crate::board::{Board, Player, CENTER};
use crate::config::EvalConfig;

use super::patterns::line_tallies;

/// Evaluate the board for `player` with the given weights.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - Negative values indicate disadvantage for `player`
///
/// # Arguments
/// * `board` - The current board state
/// * `player` - The side to evaluate for
/// * `weights` - Line weight and center bonus
#[must_use]
pub fn evaluate(board: &Board, player: Player, weights: &EvalConfig) -> i32 {
    let line_score: i32 = line_tallies(board, player)
        .iter()
        .map(|t| t.score(weights.line_weight))
        .sum();

    let center_score = if board.owner(CENTER) == Some(player) {
        weights.center_bonus
    } else {
        0
    };

    line_score + center_score
}

/// Evaluate with the default weights.
#[must_use]
pub fn evaluate_board(board: &Board, player: Player) -> i32 {
    evaluate(board, player, &EvalConfig::default())
}

/// Sum of squared own counts over lines the opponent has not touched.
#[must_use]
pub fn open_line_potential(board: &Board, player: Player) -> i32 {
    line_tallies(board, player)
        .iter()
        .filter(|t| t.opp == 0)
        .map(|t| (t.own * t.own) as i32)
        .sum()
}
