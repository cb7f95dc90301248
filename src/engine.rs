//! CPU engine integrating the difficulty tiers and the shogo selector
//!
//! This module provides the entry point a game calls on the CPU's turn. Each
//! tier follows a fixed priority:
//!
//! 1. **Immediate win**: every tier plays a move that wins on the spot
//! 2. **easy**: otherwise a uniformly random legal cell
//! 3. **medium**: otherwise block an opponent win, else the best evaluation
//! 4. **hard**: otherwise alpha-beta search
//! 5. **extreme**: otherwise a corner while one is empty, else as hard
//!
//! # Example
//!
//! ```
//! use capfill::{Board, CpuEngine, Difficulty, Player};
//!
//! let mut engine = CpuEngine::with_seed(42);
//! let board = Board::new();
//!
//! let result = engine.find_cpu_move_with_stats(&board, Player::P2, Difficulty::Medium);
//! println!("Best move: {:?}", result.best_move);
//! println!("Decision: {:?}", result.decision);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player, Pos, CORNERS};
use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::rules::{apply_move, is_legal, legal_moves};
use crate::search::{ordered_children, winning_moves, SearchStats, Searcher};
use crate::shogo::{find_shogo_move, ShogoStep};

/// CPU difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown difficulty '{s}' (expected easy, medium, hard or extreme)")
            })
    }
}

/// Which rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Move that wins on the spot
    ImmediateWin,
    /// Occupies a cell the opponent would win with
    Block,
    /// Uniform random legal cell
    Random,
    /// Greedy evaluation (medium tier, shogo fallback)
    Heuristic,
    /// Extreme tier corner preference
    Corner,
    /// Alpha-beta search result
    AlphaBeta,
}

/// Result of a CPU decision with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` only when no legal move exists
    pub best_move: Option<Pos>,
    /// Score of the move for the rule that chose it
    pub score: i32,
    pub decision: DecisionKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
    /// Cutoff and cache counters, zero unless the search ran
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn picked(pos: Pos, score: i32, decision: DecisionKind) -> Self {
        Self {
            best_move: Some(pos),
            score,
            decision,
            time_ms: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn no_move(decision: DecisionKind) -> Self {
        Self {
            best_move: None,
            score: 0,
            decision,
            time_ms: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// CPU opponent.
///
/// Owns the configuration and the random source; everything else is built
/// fresh for each decision, so two decisions never share search state.
pub struct CpuEngine<R: Rng = StdRng> {
    config: EngineConfig,
    rng: R,
}

impl CpuEngine<StdRng> {
    /// Create an engine with default settings, seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration, seeded from the OS.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a reproducible engine with default settings.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(EngineConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for CpuEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CpuEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the move for `cpu` at the given tier.
    ///
    /// Returns `None` only when `cpu` has no legal move.
    #[must_use]
    pub fn find_cpu_move(&mut self, board: &Board, cpu: Player, tier: Difficulty) -> Option<Pos> {
        self.find_cpu_move_with_stats(board, cpu, tier).best_move
    }

    /// Get the move with decision details and timing.
    pub fn find_cpu_move_with_stats(
        &mut self,
        board: &Board,
        cpu: Player,
        tier: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();

        let mut result = match self.find_immediate_win(board, cpu) {
            Some(win) => win,
            None => match tier {
                Difficulty::Easy => self.random_move(board, cpu),
                Difficulty::Medium => self.greedy_move(board, cpu),
                Difficulty::Hard => self.search_move(board, cpu),
                Difficulty::Extreme => self
                    .corner_move(board, cpu)
                    .unwrap_or_else(|| self.search_move(board, cpu)),
            },
        };
        result.time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "{} {} -> {:?} via {:?} (score {}, {} nodes, {}ms)",
            tier,
            cpu,
            result.best_move,
            result.decision,
            result.score,
            result.nodes,
            result.time_ms
        );
        result
    }

    /// Get the shogo move for `cpu`.
    #[must_use]
    pub fn find_shogo_cpu_move(&mut self, board: &Board, cpu: Player) -> Option<Pos> {
        self.find_shogo_cpu_move_with_stats(board, cpu).best_move
    }

    /// Shogo decision with details and timing.
    pub fn find_shogo_cpu_move_with_stats(&mut self, board: &Board, cpu: Player) -> MoveResult {
        let start = Instant::now();
        let mut result = match find_shogo_move(board, cpu, &self.config) {
            Some(choice) => {
                let decision = match choice.step {
                    ShogoStep::Win => DecisionKind::ImmediateWin,
                    ShogoStep::Block => DecisionKind::Block,
                    ShogoStep::Heuristic => DecisionKind::Heuristic,
                };
                MoveResult::picked(choice.pos, choice.score, decision)
            }
            None => MoveResult::no_move(DecisionKind::Heuristic),
        };
        result.time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "shogo {} -> {:?} via {:?} (score {})",
            cpu,
            result.best_move,
            result.decision,
            result.score
        );
        result
    }

    /// First winning move in search order.
    fn find_immediate_win(&self, board: &Board, cpu: Player) -> Option<MoveResult> {
        ordered_children(board, cpu, &self.config.eval)
            .into_iter()
            .find(|c| c.outcome.winner == Some(cpu))
            .map(|c| {
                MoveResult::picked(c.pos, self.config.search.win_score, DecisionKind::ImmediateWin)
            })
    }

    /// easy: uniform random legal cell.
    fn random_move(&mut self, board: &Board, cpu: Player) -> MoveResult {
        let moves = legal_moves(board, cpu);
        if moves.is_empty() {
            return MoveResult::no_move(DecisionKind::Random);
        }
        let pos = moves[self.rng.random_range(0..moves.len())];
        MoveResult::picked(pos, 0, DecisionKind::Random)
    }

    /// medium: block an opponent win, else maximize the evaluation.
    fn greedy_move(&self, board: &Board, cpu: Player) -> MoveResult {
        let blocks: Vec<Pos> = winning_moves(board, cpu.opponent())
            .into_iter()
            .filter(|&pos| is_legal(board, pos, cpu))
            .collect();
        if let Some((pos, score)) = self.best_by_eval(board, cpu, &blocks) {
            return MoveResult::picked(pos, score, DecisionKind::Block);
        }

        // Candidates in search order so ties fall to the center
        let ordered: Vec<Pos> = ordered_children(board, cpu, &self.config.eval)
            .into_iter()
            .map(|c| c.pos)
            .collect();
        match self.best_by_eval(board, cpu, &ordered) {
            Some((pos, score)) => MoveResult::picked(pos, score, DecisionKind::Heuristic),
            None => MoveResult::no_move(DecisionKind::Heuristic),
        }
    }

    /// hard: alpha-beta search with a fresh searcher.
    fn search_move(&mut self, board: &Board, cpu: Player) -> MoveResult {
        let mut searcher = Searcher::new(&self.config);
        let result = searcher.search(board, cpu, &mut self.rng);
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            decision: DecisionKind::AlphaBeta,
            time_ms: 0,
            nodes: result.nodes,
            stats: result.stats,
        }
    }

    /// extreme: corner preference while any corner is empty.
    ///
    /// Takes the corner opposite one the CPU owns if it is free, otherwise
    /// the best-ordered free corner. `None` means no corner is free.
    fn corner_move(&self, board: &Board, cpu: Player) -> Option<MoveResult> {
        let corner_score = |pos: Pos| -> Option<i32> {
            let outcome = apply_move(board, pos, cpu).ok()?;
            Some(evaluate(&outcome.board, cpu, &self.config.eval))
        };

        for corner in CORNERS {
            if board.owner(corner) != Some(cpu) {
                continue;
            }
            let Some(opposite) = corner.opposite_corner() else {
                continue;
            };
            if let Some(score) = corner_score(opposite) {
                return Some(MoveResult::picked(opposite, score, DecisionKind::Corner));
            }
        }

        // All corners share a center distance, so ordering reduces to the
        // evaluation; ties keep corner order.
        let mut best: Option<(Pos, i32)> = None;
        for corner in CORNERS {
            if let Some(score) = corner_score(corner) {
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((corner, score));
                }
            }
        }
        best.map(|(pos, score)| MoveResult::picked(pos, score, DecisionKind::Corner))
    }

    /// Highest evaluation among `candidates`; the earliest wins ties.
    fn best_by_eval(&self, board: &Board, cpu: Player, candidates: &[Pos]) -> Option<(Pos, i32)> {
        let mut best: Option<(Pos, i32)> = None;
        for &pos in candidates {
            let Ok(outcome) = apply_move(board, pos, cpu) else {
                continue;
            };
            let score = evaluate(&outcome.board, cpu, &self.config.eval);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best
    }
}
