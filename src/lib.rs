//! Capture-and-fill engine for a 5×5 board
//!
//! Two players claim cells in turn. Cell values encode ownership by parity
//! (even for P1, odd for P2, 5 is locked):
//! - Placing sandwiches opponent runs in all 8 directions and flips them
//! - A completed row, column or main diagonal wins
//! - A full board goes to the player owning the majority of cells
//! - A player holding two corners of an edge may not enter that edge's
//!   interior while it is empty
//!
//! # Architecture
//!
//! - [`board`]: Cell array, positions, line masks
//! - [`rules`]: Captures, corner restriction, win detection, move application
//! - [`eval`]: Static evaluation
//! - [`search`]: Alpha-beta minimax with a transposition cache
//! - [`engine`]: CPU opponent with four difficulty tiers
//! - [`shogo`]: Selector for point-scored shogo rounds
//! - [`game`]: Turn-by-turn game driver
//! - [`config`]: TOML-backed tuning knobs
//!
//! # Quick Start
//!
//! ```
//! use capfill::{apply_move, Board, CpuEngine, Difficulty, Player};
//!
//! let board = Board::new();
//! let mut engine = CpuEngine::with_seed(1);
//!
//! if let Some(pos) = engine.find_cpu_move(&board, Player::P1, Difficulty::Hard) {
//!     let outcome = apply_move(&board, pos, Player::P1).unwrap();
//!     println!("CPU plays {} and flips {} cells", pos, outcome.captured());
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod shogo;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, Player, Pos, BOARD_SIZE, CENTER, CORNERS, LOCKED};
pub use config::EngineConfig;
pub use engine::{CpuEngine, DecisionKind, Difficulty, MoveResult};
pub use eval::evaluate;
pub use game::{Controller, GameError, GameResult, GameState, WinType};
pub use rules::{apply_move, check_winner, legal_moves, winning_lines, IllegalMove, MoveOutcome};
pub use shogo::{find_shogo_move, ShogoChoice, ShogoStep};
