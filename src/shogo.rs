//! Move selection for shogo rounds
//!
//! Shogo scores each round by how convincingly it was won, so this selector
//! cares about more than winning: it picks the win worth the most points and
//! otherwise plays for open lines. It never searches and is deterministic.

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::{evaluate, open_line_potential};
use crate::rules::{apply_move, is_legal, legal_moves, round_points};
use crate::search::{winning_moves, winning_outcomes};

/// Which rule picked a shogo move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShogoStep {
    /// Wins the round; score is the round points
    Win,
    /// Occupies a cell the opponent would win with
    Block,
    /// Best weighted evaluation plus open-line potential
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShogoChoice {
    pub pos: Pos,
    pub step: ShogoStep,
    pub score: i32,
}

/// Shogo evaluator for `cpu` on the board after its move:
/// `2·eval(cpu) + 85·potential(cpu) − 75·potential(opponent)` with the
/// default weights.
pub fn shogo_score(board: &Board, cpu: Player, config: &EngineConfig) -> i32 {
    let weights = &config.shogo;
    weights.eval_weight * evaluate(board, cpu, &config.eval)
        + weights.own_potential_weight * open_line_potential(board, cpu)
        - weights.opp_potential_weight * open_line_potential(board, cpu.opponent())
}

/// Pick a shogo move for `cpu`, or `None` when it has no legal move.
pub fn find_shogo_move(board: &Board, cpu: Player, config: &EngineConfig) -> Option<ShogoChoice> {
    // 1. Outright wins, most round points first, then evaluation
    let mut best_win: Option<(u32, i32, Pos)> = None;
    for (pos, outcome) in winning_outcomes(board, cpu) {
        let points = round_points(&outcome.board, cpu, config.shogo.max_round_points);
        let eval = evaluate(&outcome.board, cpu, &config.eval);
        if best_win.map_or(true, |(p, e, _)| (points, eval) > (p, e)) {
            best_win = Some((points, eval, pos));
        }
    }
    if let Some((points, _, pos)) = best_win {
        return Some(ShogoChoice {
            pos,
            step: ShogoStep::Win,
            score: points as i32,
        });
    }

    // 2. Block the opponent's winning cells
    let blocks: Vec<Pos> = winning_moves(board, cpu.opponent())
        .into_iter()
        .filter(|&pos| is_legal(board, pos, cpu))
        .collect();
    if let Some((pos, score)) = best_by_shogo_score(board, cpu, config, &blocks) {
        return Some(ShogoChoice {
            pos,
            step: ShogoStep::Block,
            score,
        });
    }

    // 3. Weighted evaluation over every legal move
    let moves = legal_moves(board, cpu);
    best_by_shogo_score(board, cpu, config, &moves).map(|(pos, score)| ShogoChoice {
        pos,
        step: ShogoStep::Heuristic,
        score,
    })
}

/// Highest shogo score among `candidates`; the earliest wins ties.
fn best_by_shogo_score(
    board: &Board,
    cpu: Player,
    config: &EngineConfig,
    candidates: &[Pos],
) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;
    for &pos in candidates {
        let Ok(outcome) = apply_move(board, pos, cpu) else {
            continue;
        };
        let score = shogo_score(&outcome.board, cpu, config);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_shogo_takes_win() {
        let b = board("22220/00000/00000/00000/11100");
        let choice = find_shogo_move(&b, Player::P1, &EngineConfig::default()).unwrap();
        assert_eq!(choice.pos, Pos::new(0, 4));
        assert_eq!(choice.step, ShogoStep::Win);
        assert_eq!(choice.score, 1);
    }

    #[test]
    fn test_shogo_prefers_higher_round_points() {
        // (0,4) completes row 0 only; (4,4) completes row 4 and the diagonal
        let b = board("22220/02000/00200/00020/22220");
        let choice = find_shogo_move(&b, Player::P1, &EngineConfig::default()).unwrap();
        assert_eq!(choice.step, ShogoStep::Win);
        assert_eq!(choice.pos, Pos::new(4, 4));
        assert_eq!(choice.score, 2);
    }

    #[test]
    fn test_shogo_blocks_opponent() {
        let b = board("20000/00000/00000/00000/11110");
        let choice = find_shogo_move(&b, Player::P1, &EngineConfig::default()).unwrap();
        assert_eq!(choice.step, ShogoStep::Block);
        assert_eq!(choice.pos, Pos::new(4, 4));
    }

    #[test]
    fn test_shogo_heuristic_on_empty_board() {
        let config = EngineConfig::default();
        let choice = find_shogo_move(&Board::new(), Player::P2, &config).unwrap();
        assert_eq!(choice.step, ShogoStep::Heuristic);
        // Center touches four lines, more than any other cell
        assert_eq!(choice.pos, Pos::new(2, 2));

        let after = apply_move(&Board::new(), choice.pos, Player::P2).unwrap().board;
        assert_eq!(choice.score, shogo_score(&after, Player::P2, &config));
    }

    #[test]
    fn test_shogo_is_deterministic() {
        let b = board("20000/01000/00200/00010/00000");
        let config = EngineConfig::default();
        let first = find_shogo_move(&b, Player::P1, &config);
        for _ in 0..5 {
            assert_eq!(find_shogo_move(&b, Player::P1, &config), first);
        }
    }

    #[test]
    fn test_shogo_no_legal_moves() {
        let b = board("21212/12121/12121/21212/12121");
        assert_eq!(find_shogo_move(&b, Player::P1, &EngineConfig::default()), None);
    }

    #[test]
    fn test_shogo_score_weights() {
        let mut b = Board::new();
        b.set(Pos::new(0, 0), 2);
        let config = EngineConfig::default();
        // eval 60, own potential 3, opponent potential 0
        assert_eq!(shogo_score(&b, Player::P1, &config), 2 * 60 + 85 * 3);
        // eval -60, own potential 0, opponent potential 3
        assert_eq!(shogo_score(&b, Player::P2, &config), 2 * -60 - 75 * 3);
    }
}
