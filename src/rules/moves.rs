//! Move validation and application
//!
//! `apply_move` is the single entry point for changing a board. It never
//! touches its input; a successful move yields a fresh board together with
//! the list of changed cells and the winner, if the move ended the game.

use crate::board::{Board, Player, Pos, TOTAL_CELLS};

use super::capture::execute_captures;
use super::corner::is_corner_restricted;
use super::win::winner_after_move;

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("position out of range: {0}")]
    OutOfRange(usize),
    #[error("not empty")]
    NotEmpty(Pos),
    #[error("corner rule forbids this cell")]
    CornerRule(Pos),
}

/// One changed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub pos: Pos,
    pub before: u8,
    pub after: u8,
}

/// Result of a legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after placement and captures
    pub board: Board,
    /// Placed cell first, then captured cells in index order
    pub changed: Vec<CellChange>,
    /// Declared winner, if this move ended the game
    pub winner: Option<Player>,
}

impl MoveOutcome {
    /// Number of opponent cells flipped by the move
    #[inline]
    pub fn captured(&self) -> usize {
        self.changed.len().saturating_sub(1)
    }
}

/// Validate a placement without applying it.
pub fn validate_move(board: &Board, pos: Pos, player: Player) -> Result<(), IllegalMove> {
    if !board.is_empty(pos) {
        return Err(IllegalMove::NotEmpty(pos));
    }
    if is_corner_restricted(board, pos, player) {
        return Err(IllegalMove::CornerRule(pos));
    }
    Ok(())
}

#[inline]
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    validate_move(board, pos, player).is_ok()
}

/// Legal placements for `player`, in index order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| !is_corner_restricted(board, pos, player))
        .collect()
}

/// Validate and apply a placement.
///
/// # Arguments
/// * `board` - Current board state (left untouched)
/// * `pos` - Target cell
/// * `player` - Side placing
///
/// # Returns
/// The new board with captures resolved, or the reason the move is illegal.
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> Result<MoveOutcome, IllegalMove> {
    validate_move(board, pos, player)?;

    let mut next = *board;
    next.set(pos, player.base_value());
    let captured = execute_captures(&mut next, pos, player);

    let mut changed = Vec::with_capacity(captured.len() + 1);
    changed.push(CellChange {
        pos,
        before: 0,
        after: player.base_value(),
    });
    changed.extend(captured.into_iter().map(|cap| CellChange {
        pos: cap,
        before: board.get(cap),
        after: next.get(cap),
    }));

    let winner = winner_after_move(&next, player);
    Ok(MoveOutcome {
        board: next,
        changed,
        winner,
    })
}

/// `apply_move` for a raw cell index, as received from callers.
pub fn apply_move_at(
    board: &Board,
    index: usize,
    player: Player,
) -> Result<MoveOutcome, IllegalMove> {
    let pos = Pos::try_from_index(index).ok_or(IllegalMove::OutOfRange(index))?;
    debug_assert!(index < TOTAL_CELLS);
    apply_move(board, pos, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LOCKED;

    fn board_from(cells: &[(usize, u8)]) -> Board {
        let mut board = Board::new();
        for &(i, v) in cells {
            board.set(Pos::from_index(i), v);
        }
        board
    }

    #[test]
    fn test_place_on_empty() {
        let board = Board::new();
        let outcome = apply_move(&board, Pos::new(2, 2), Player::P2).unwrap();
        assert_eq!(outcome.board.get(Pos::new(2, 2)), 1);
        assert_eq!(outcome.changed.len(), 1);
        assert_eq!(outcome.winner, None);
        // Input untouched
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_occupied_rejected() {
        let board = board_from(&[(7, 3)]);
        let before = board;
        for player in [Player::P1, Player::P2] {
            let err = apply_move(&board, Pos::from_index(7), player).unwrap_err();
            assert_eq!(err, IllegalMove::NotEmpty(Pos::from_index(7)));
            assert_eq!(err.to_string(), "not empty");
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_run_changes() {
        let board = board_from(&[(11, 1), (12, 1), (13, 1), (14, 2)]);
        let outcome = apply_move(&board, Pos::from_index(10), Player::P1).unwrap();

        let changed: Vec<(usize, u8, u8)> = outcome
            .changed
            .iter()
            .map(|c| (c.pos.to_index(), c.before, c.after))
            .collect();
        assert_eq!(
            changed,
            vec![(10, 0, 2), (11, 1, 2), (12, 1, 2), (13, 1, 2)]
        );
        assert_eq!(outcome.captured(), 3);
    }

    #[test]
    fn test_lock_wall_only_placed_cell_changes() {
        let board = board_from(&[(11, LOCKED), (12, 1), (13, 2)]);
        let outcome = apply_move(&board, Pos::from_index(10), Player::P1).unwrap();
        assert_eq!(outcome.changed.len(), 1);
        assert_eq!(outcome.board.get(Pos::from_index(10)), 2);
        assert_eq!(outcome.board.get(Pos::from_index(11)), LOCKED);
        assert_eq!(outcome.board.get(Pos::from_index(12)), 1);
    }

    #[test]
    fn test_corner_rule_reason() {
        let board = board_from(&[(0, 2), (4, 2)]);
        for i in [1, 2, 3] {
            let err = apply_move(&board, Pos::from_index(i), Player::P1).unwrap_err();
            assert_eq!(err, IllegalMove::CornerRule(Pos::from_index(i)));
            assert_eq!(err.to_string(), "corner rule forbids this cell");
        }
        // Opponent fills one; the rest open up
        let board = apply_move(&board, Pos::from_index(2), Player::P2).unwrap().board;
        assert!(apply_move(&board, Pos::from_index(1), Player::P1).is_ok());
        assert!(apply_move(&board, Pos::from_index(3), Player::P1).is_ok());
    }

    #[test]
    fn test_out_of_range_index() {
        let err = apply_move_at(&Board::new(), 25, Player::P1).unwrap_err();
        assert_eq!(err, IllegalMove::OutOfRange(25));
    }

    #[test]
    fn test_completing_row_declares_winner() {
        // Row 0: 2 2 _ 2 2 ; the edge interior is no longer untouched
        let board = board_from(&[(0, 2), (1, 2), (3, 2), (4, 2)]);
        let outcome = apply_move(&board, Pos::from_index(2), Player::P1).unwrap();
        assert_eq!(outcome.winner, Some(Player::P1));
    }

    #[test]
    fn test_capture_completes_line() {
        // Row 1: 2 1 1 1 _ ; P1 plays (1,4) flipping the run into a full row
        let board = board_from(&[(5, 2), (6, 1), (7, 1), (8, 1)]);
        let outcome = apply_move(&board, Pos::from_index(9), Player::P1).unwrap();
        assert_eq!(outcome.captured(), 3);
        assert_eq!(outcome.winner, Some(Player::P1));
    }

    #[test]
    fn test_legal_moves_skip_restricted() {
        let board = board_from(&[(0, 1), (4, 1)]);
        let p2_moves = legal_moves(&board, Player::P2);
        assert_eq!(p2_moves.len(), 20);
        assert!(!p2_moves.contains(&Pos::from_index(2)));
        assert_eq!(legal_moves(&board, Player::P1).len(), 23);
    }

    #[test]
    fn test_filling_move_declares_winner() {
        let cells: [u8; 25] = [
            2, 1, 2, 1, 2, //
            1, 2, 1, 2, 1, //
            1, 2, 0, 2, 1, //
            2, 1, 2, 1, 2, //
            1, 2, 1, 2, 1,
        ];
        let board = Board::from_cells(cells);
        let outcome = apply_move(&board, Pos::new(2, 2), Player::P1).unwrap();
        assert!(outcome.board.is_full());
        assert_eq!(outcome.winner, Some(Player::P1));

        // P2 flips (2,1) and (2,3), completing row 2
        let outcome = apply_move(&board, Pos::new(2, 2), Player::P2).unwrap();
        assert_eq!(outcome.captured(), 3);
        assert_eq!(outcome.winner, Some(Player::P2));
    }
}
