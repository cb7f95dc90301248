//! Search module for the CPU opponent
//!
//! Contains:
//! - Transposition cache for one decision
//! - One-ply threat detection (immediate wins, dangerous moves)
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod threat;
pub mod tt;

pub use alphabeta::{ordered_children, Child, SearchResult, SearchStats, Searcher};
pub use threat::{
    has_line_win, is_dangerous_move, is_dangerous_outcome, winning_moves, winning_outcomes,
};
pub use tt::{CacheEntry, EntryType, TranspositionCache};
