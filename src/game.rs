//! Turn-by-turn game driver
//!
//! `GameState` owns a board, the side to move and the move history. It is
//! what the CLI plays through and what the integration tests drive; callers
//! that keep their own board can use the rule engine directly instead.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::board::{Bitboard, Board, Player, Pos};
use crate::engine::{CpuEngine, Difficulty, MoveResult};
use crate::rules::{
    apply_move, check_winner, has_line, legal_moves, round_points, winning_lines, IllegalMove,
    MoveOutcome,
};

/// How a finished game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// A completed row, column or diagonal
    Line,
    /// Full board, decided by the even/odd majority
    Fill,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub win_type: WinType,
    /// Cells on won lines, empty for a fill win
    pub winning_cells: Bitboard,
}

/// Errors from driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("{0} has no legal move")]
    NoLegalMove(Player),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
}

/// Who picks moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Cpu(Difficulty),
    Shogo,
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Cpu(tier) => write!(f, "{tier}"),
            Controller::Shogo => f.write_str("shogo"),
        }
    }
}

impl FromStr for Controller {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("shogo") {
            return Ok(Controller::Shogo);
        }
        s.parse().map(Controller::Cpu)
    }
}

/// One played move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub pos: Pos,
    /// Cells flipped by the move, placed cell excluded
    pub captured: usize,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Player,
    pub result: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<MoveRecord>,
    /// Boards before each move, for undo
    snapshots: Vec<(Board, Player)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::P1)
    }
}

impl GameState {
    /// Start a game on an empty board.
    pub fn new(first: Player) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Continue from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_turn: to_move,
            result: None,
            last_move: None,
            move_history: Vec::new(),
            snapshots: Vec::new(),
        };
        state.result = state.result_from_board();
        state
    }

    /// Reset to an empty board, keeping who moves first.
    pub fn reset(&mut self) {
        let first = self
            .snapshots
            .first()
            .map_or(self.current_turn, |&(_, p)| p);
        *self = Self::new(first);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some() || self.board.is_full()
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.map(|r| r.winner)
    }

    /// Play a move for the side to move.
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current_turn;
        let outcome = apply_move(&self.board, pos, player)?;

        self.snapshots.push((self.board, player));
        self.board = outcome.board;
        self.last_move = Some(pos);
        self.move_history.push(MoveRecord {
            player,
            pos,
            captured: outcome.captured(),
        });

        if let Some(winner) = outcome.winner {
            self.result = Some(self.describe_win(winner));
            log::info!("{} wins after {} plies", winner, self.move_history.len());
            return Ok(outcome);
        }

        self.advance_turn(player);
        Ok(outcome)
    }

    /// Let `controller` pick and play the move for the side to move.
    pub fn play_turn<R: Rng>(
        &mut self,
        engine: &mut CpuEngine<R>,
        controller: Controller,
    ) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current_turn;
        let decision = match controller {
            Controller::Cpu(tier) => engine.find_cpu_move_with_stats(&self.board, player, tier),
            Controller::Shogo => engine.find_shogo_cpu_move_with_stats(&self.board, player),
        };
        let pos = decision.best_move.ok_or(GameError::NoLegalMove(player))?;
        self.play(pos)?;
        Ok(decision)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> bool {
        let Some((board, player)) = self.snapshots.pop() else {
            return false;
        };
        self.board = board;
        self.current_turn = player;
        self.move_history.pop();
        self.last_move = self.move_history.last().map(|m| m.pos);
        self.result = None;
        true
    }

    /// Points the winner scores for this round in shogo, if the game is won.
    pub fn round_points(&self, max_points: u32) -> Option<u32> {
        self.winner().map(|w| round_points(&self.board, w, max_points))
    }

    /// The turn passes to the opponent; if the opponent has no legal move
    /// it stays with `mover`.
    fn advance_turn(&mut self, mover: Player) {
        let next = mover.opponent();
        if legal_moves(&self.board, next).is_empty() && !self.board.is_full() {
            log::info!("{} has no legal move, turn passes back to {}", next, mover);
            self.current_turn = mover;
        } else {
            self.current_turn = next;
        }
    }

    fn describe_win(&self, winner: Player) -> GameResult {
        if has_line(&self.board, winner) {
            GameResult {
                winner,
                win_type: WinType::Line,
                winning_cells: winning_lines(&self.board),
            }
        } else {
            GameResult {
                winner,
                win_type: WinType::Fill,
                winning_cells: Bitboard::new(),
            }
        }
    }

    fn result_from_board(&self) -> Option<GameResult> {
        check_winner(&self.board).map(|winner| self.describe_win(winner))
    }
}
