//! Game rules for capture-and-fill
//!
//! This module implements the rule set including:
//! - Capture rules (sandwich runs, locked walls)
//! - Corner-adjacency restriction
//! - Win conditions (completed line, fill tiebreak)
//! - Move validation and application

pub mod capture;
pub mod corner;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use capture::{count_captures, execute_captures, get_captured_positions, has_capture};
pub use corner::{is_corner_restricted, EdgeRun, EDGE_RUNS};
pub use moves::{
    apply_move, apply_move_at, is_legal, legal_moves, validate_move, CellChange,
    IllegalMove, MoveOutcome,
};
pub use win::{
    check_winner, completed_lines, fill_winner, has_line, line_winner, round_points,
    winning_lines,
};
