//! Position evaluation
//!
//! Contains:
//! - Per-line ownership tallies
//! - The line-ownership heuristic used by search and the CPU tiers
//! - Open-line potential used by the shogo selector

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_board, open_line_potential};
pub use patterns::{line_tallies, LineTally};
