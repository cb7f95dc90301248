//! Alpha-Beta search with iterative deepening and a transposition cache
//!
//! This module implements the deep search behind the hard and extreme CPU
//! tiers. It is a plain minimax with a maximizing flag: every leaf is
//! evaluated from the CPU's point of view, because the evaluation is not
//! symmetric between the two sides.
//!
//! # Features
//!
//! - Iterative deepening up to a depth cap that grows as the board fills
//! - Exact-key transposition cache with bound flags, scoped to one decision
//! - Move ordering by center distance, then by the mover's evaluation
//! - Root filtering of moves that hand the opponent a line win
//! - Random choice among near-best root moves
//!
//! # Example
//!
//! ```
//! use capfill::board::{Board, Player};
//! use capfill::config::EngineConfig;
//! use capfill::search::Searcher;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = EngineConfig::default();
//! let mut searcher = Searcher::new(&config);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let board: Board = "22220/00000/00000/00000/11100".parse().unwrap();
//! let result = searcher.search(&board, Player::P1, &mut rng);
//! assert_eq!(result.best_move.map(|p| p.to_index()), Some(4));
//! ```

use std::cmp::Reverse;

use rand::Rng;

use crate::board::{Board, Player, Pos};
use crate::config::{EngineConfig, EvalConfig, SearchConfig};
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves, MoveOutcome};

use super::threat::is_dangerous_outcome;
use super::{EntryType, TranspositionCache};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX / 2;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cache probes
    pub cache_probes: u64,
    /// Probes that returned a usable score
    pub cache_hits: u64,
}

impl SearchStats {
    /// Cache hit rate in percent
    pub fn cache_hit_rate(&self) -> f64 {
        if self.cache_probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.cache_probes as f64 * 100.0
        }
    }
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Chosen move, `None` only when no legal move exists
    pub best_move: Option<Pos>,
    /// Score of the chosen move
    pub score: i32,
    /// Last depth completed in iterative deepening
    pub depth: u8,
    /// Root scores from the last completed depth, in ordering order
    pub root_scores: Vec<(Pos, i32)>,
    /// Total nodes searched across all depths
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// A legal move with its applied outcome.
#[derive(Debug, Clone)]
pub struct Child {
    pub pos: Pos,
    pub outcome: MoveOutcome,
}

/// Legal moves for `mover`, applied and sorted: closest to the center
/// first, then by the mover's evaluation of the resulting board, best first.
/// Remaining ties keep index order.
pub fn ordered_children(board: &Board, mover: Player, eval: &EvalConfig) -> Vec<Child> {
    let mut children: Vec<(u8, i32, Child)> = legal_moves(board, mover)
        .into_iter()
        .filter_map(|pos| {
            apply_move(board, pos, mover).ok().map(|outcome| {
                let score = evaluate(&outcome.board, mover, eval);
                (pos.center_distance(), score, Child { pos, outcome })
            })
        })
        .collect();
    children.sort_by_key(|(dist, score, _)| (*dist, Reverse(*score)));
    children.into_iter().map(|(_, _, child)| child).collect()
}

/// Alpha-beta searcher. One instance serves one decision at a time; the
/// cache is cleared at the start of every `search`.
pub struct Searcher {
    search: SearchConfig,
    eval: EvalConfig,
    cache: TranspositionCache,
    cpu: Player,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher using the search and eval sections of `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            search: config.search.clone(),
            eval: config.eval.clone(),
            cache: TranspositionCache::new(),
            cpu: Player::P1,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Search for the best move for `cpu` using iterative deepening.
    ///
    /// Depth runs from the configured minimum up to the cap for the number
    /// of empty cells; the last completed depth's root scores decide.
    #[must_use]
    pub fn search<R: Rng>(
        &mut self,
        board: &Board,
        cpu: Player,
        rng: &mut R,
    ) -> SearchResult {
        let cap = self.search.depth_cap(board.empty_count());
        self.search_to_depth(board, cpu, cap, rng)
    }

    /// Iterative deepening with an explicit depth cap.
    #[must_use]
    pub fn search_to_depth<R: Rng>(
        &mut self,
        board: &Board,
        cpu: Player,
        max_depth: u8,
        rng: &mut R,
    ) -> SearchResult {
        self.cache.clear();
        self.cpu = cpu;
        self.nodes = 0;
        self.stats = SearchStats::default();

        let root = ordered_children(board, cpu, &self.eval);
        if root.is_empty() {
            return SearchResult::default();
        }

        // Moves that leave the opponent an immediate line win are dropped,
        // unless every move does.
        let safe: Vec<Child> = root
            .iter()
            .filter(|c| !is_dangerous_outcome(&c.outcome, cpu))
            .cloned()
            .collect();
        let candidates = if safe.is_empty() { root } else { safe };

        let min_depth = self.search.min_depth.max(1);
        let max_depth = max_depth.max(min_depth);
        let mut root_scores = Vec::new();
        let mut depth_done = 0;

        for depth in min_depth..=max_depth {
            root_scores = candidates
                .iter()
                .map(|c| {
                    let score = self.minimax(
                        &c.outcome.board,
                        c.outcome.winner,
                        depth - 1,
                        -INF,
                        INF,
                        false,
                    );
                    (c.pos, score)
                })
                .collect();
            depth_done = depth;

            log::trace!("depth {} root scores {:?}", depth, root_scores);
        }

        let (best_move, score) = self.pick_root_move(&root_scores, rng);
        log::debug!(
            "search {} depth={} nodes={} cutoffs={} cache_hit_rate={:.1}% move={:?} score={}",
            cpu,
            depth_done,
            self.nodes,
            self.stats.cutoffs,
            self.stats.cache_hit_rate(),
            best_move,
            score
        );

        SearchResult {
            best_move,
            score,
            depth: depth_done,
            root_scores,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Uniform choice among root moves scoring within the margin of the best.
    fn pick_root_move<R: Rng>(
        &self,
        scores: &[(Pos, i32)],
        rng: &mut R,
    ) -> (Option<Pos>, i32) {
        let Some(best) = scores.iter().map(|&(_, s)| s).max() else {
            return (None, 0);
        };
        let near_best: Vec<(Pos, i32)> = scores
            .iter()
            .copied()
            .filter(|&(_, s)| s >= best - self.search.root_margin)
            .collect();
        let (pos, score) = near_best[rng.random_range(0..near_best.len())];
        (Some(pos), score)
    }

    /// Score a decided game; quicker wins and slower losses score higher.
    fn terminal_score(&self, winner: Player, depth: u8) -> i32 {
        let score = self.search.win_score + i32::from(depth);
        if winner == self.cpu {
            score
        } else {
            -score
        }
    }

    /// Minimax with alpha-beta pruning, scored for the CPU.
    ///
    /// `winner` is the result of the move that produced `board`.
    fn minimax(
        &mut self,
        board: &Board,
        winner: Option<Player>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if let Some(w) = winner {
            return self.terminal_score(w, depth);
        }
        if depth == 0 {
            return evaluate(board, self.cpu, &self.eval);
        }

        let key = cache_key(board, maximizing);
        self.stats.cache_probes += 1;
        if let Some(score) = self.cache.probe(key, depth, alpha, beta) {
            self.stats.cache_hits += 1;
            return score;
        }

        let mover = if maximizing { self.cpu } else { self.cpu.opponent() };
        let children = ordered_children(board, mover, &self.eval);
        if children.is_empty() {
            return 0;
        }

        let alpha_orig = alpha;
        let beta_orig = beta;
        let mut best = if maximizing { -INF } else { INF };

        for child in &children {
            let score = self.minimax(
                &child.outcome.board,
                child.outcome.winner,
                depth - 1,
                alpha,
                beta,
                !maximizing,
            );
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let entry_type = if best <= alpha_orig {
            EntryType::UpperBound
        } else if best >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.cache.store(key, depth, best, entry_type);

        best
    }
}

/// Exact board encoding with the side to move in the low bit.
#[inline]
fn cache_key(board: &Board, maximizing: bool) -> u128 {
    (board.key() << 1) | u128::from(maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn searcher() -> Searcher {
        Searcher::new(&EngineConfig::default())
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_empty_board_prefers_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = searcher().search_to_depth(&Board::new(), Player::P1, 2, &mut rng);
        assert!(result.best_move.is_some());
        assert_eq!(result.root_scores.len(), 25);
        // Center is ordered first
        assert_eq!(result.root_scores[0].0, Pos::new(2, 2));
        assert_eq!(result.depth, 2);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let b = board("22220/00000/00000/00000/11100");
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = searcher().search(&b, Player::P1, &mut rng);
            assert_eq!(result.best_move, Some(Pos::new(0, 4)));
            assert!(result.score > 10_000);
        }
    }

    #[test]
    fn test_search_blocks_opponent_line() {
        // P2 threatens row 4; P1 has nothing faster
        let b = board("20000/00000/00000/00000/11110");
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = searcher().search(&b, Player::P1, &mut rng);
            assert_eq!(result.best_move, Some(Pos::new(4, 4)));
        }
    }

    #[test]
    fn test_forced_win_still_searches_to_cap() {
        let b = board("22220/00000/00000/00000/11100");
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let result = Searcher::new(&config).search(&b, Player::P1, &mut rng);
        assert_eq!(result.depth, config.search.depth_cap(b.empty_count()));
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_reused_searcher_matches_fresh_one() {
        let first = board("20000/01000/00200/00010/00000");
        let second = board("00001/02100/00000/01200/00000");

        let mut reused = searcher();
        let mut rng = StdRng::seed_from_u64(9);
        let _ = reused.search_to_depth(&first, Player::P1, 3, &mut rng);
        let mut rng = StdRng::seed_from_u64(5);
        let from_reused = reused.search_to_depth(&second, Player::P2, 3, &mut rng);

        let mut rng = StdRng::seed_from_u64(5);
        let from_fresh = searcher().search_to_depth(&second, Player::P2, 3, &mut rng);

        assert_eq!(from_reused.root_scores, from_fresh.root_scores);
        assert_eq!(from_reused.best_move, from_fresh.best_move);
        assert_eq!(from_reused.nodes, from_fresh.nodes);
    }

    #[test]
    fn test_search_no_legal_moves() {
        let b = board("21212/12121/12121/21212/12121");
        let mut rng = StdRng::seed_from_u64(0);
        let result = searcher().search(&b, Player::P1, &mut rng);
        assert_eq!(result.best_move, None);
        assert!(result.root_scores.is_empty());
    }

    #[test]
    fn test_search_uses_cache_and_counts_nodes() {
        let b = board("20000/01000/00000/00000/00000");
        let mut rng = StdRng::seed_from_u64(3);
        let result = searcher().search_to_depth(&b, Player::P1, 3, &mut rng);
        assert!(result.nodes > 0);
        assert!(result.stats.cache_probes > 0);
        assert_eq!(result.depth, 3);
    }

    #[test]
    fn test_search_losing_score() {
        // P2 has two separate line threats; P1 can block only one
        let b = board("11110/00000/00000/00000/11110");
        let mut rng = StdRng::seed_from_u64(0);
        let result = searcher().search(&b, Player::P1, &mut rng);
        assert!(result.best_move.is_some());
        assert!(result.score <= -10_000);
    }

    #[test]
    fn test_root_choice_within_margin() {
        let b = board("00000/00000/00100/00000/00000");
        let mut picks = std::collections::HashSet::new();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = searcher().search_to_depth(&b, Player::P1, 2, &mut rng);
            let best = result.root_scores.iter().map(|&(_, s)| s).max().unwrap();
            let chosen = result.best_move.unwrap();
            let chosen_score = result
                .root_scores
                .iter()
                .find(|&&(p, _)| p == chosen)
                .map(|&(_, s)| s)
                .unwrap();
            assert!(chosen_score >= best - 25);
            picks.insert(chosen);
        }
        assert!(!picks.is_empty());
    }

    #[test]
    fn test_ordered_children_center_first() {
        let children = ordered_children(&Board::new(), Player::P2, &EvalConfig::default());
        assert_eq!(children.len(), 25);
        assert_eq!(children[0].pos, Pos::new(2, 2));
        let dists: Vec<u8> = children.iter().map(|c| c.pos.center_distance()).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ordered_children_eval_breaks_ties() {
        // (1,2) and (3,2) both extend column 2 and outscore (2,1) and (2,3);
        // the tie keeps index order
        let b = board("00200/00000/00000/00000/00000");
        let children = ordered_children(&b, Player::P1, &EvalConfig::default());
        assert_eq!(children[0].pos, Pos::new(2, 2));
        assert_eq!(children[1].pos, Pos::new(1, 2));
    }

    #[test]
    fn test_cache_key_distinguishes_side_to_move() {
        let b = Board::new();
        assert_ne!(cache_key(&b, true), cache_key(&b, false));
    }
}
