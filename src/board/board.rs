//! Board structure: 25 value-encoded cells

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{owner_of, Player, Pos, BOARD_SIZE, LOCKED, TOTAL_CELLS};

/// Game board.
///
/// Each cell holds 0 (empty) or 1..=5. Even values belong to P1, odd values
/// to P2, and 5 is locked. Ownership is encoded in the value itself, so the
/// board is `Copy` and hashing it is cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [u8; TOTAL_CELLS],
}

/// Errors from parsing the textual board form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("invalid cell character '{0}' (expected 0-5)")]
    InvalidCell(char),
    #[error("expected 25 cells, found {0}")]
    WrongLength(usize),
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            cells: [0; TOTAL_CELLS],
        }
    }

    /// Build a board from raw values. Values above 5 are clamped to the lock.
    pub fn from_cells(cells: [u8; TOTAL_CELLS]) -> Self {
        let mut board = Self { cells };
        for v in board.cells.iter_mut() {
            *v = (*v).min(LOCKED);
        }
        board
    }

    /// Get value at position
    #[inline]
    pub fn get(&self, pos: Pos) -> u8 {
        self.cells[pos.to_index()]
    }

    /// Overwrite a cell without any rule processing.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, value: u8) {
        self.cells[pos.to_index()] = value.min(LOCKED);
    }

    #[inline]
    pub fn owner(&self, pos: Pos) -> Option<Player> {
        owner_of(self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == 0
    }

    #[inline]
    pub fn is_locked(&self, pos: Pos) -> bool {
        self.get(pos) == LOCKED
    }

    /// Cells owned by `player`
    pub fn owned(&self, player: Player) -> Bitboard {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| player.owns(v))
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    /// Empty cells
    pub fn empty(&self) -> Bitboard {
        self.empty_cells().collect()
    }

    /// Empty positions in index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| Pos::from_index(i))
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    #[inline]
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&v| player.owns(v)).count()
    }

    /// Exact transposition key: 3 bits per cell.
    #[inline]
    pub fn key(&self) -> u128 {
        self.cells
            .iter()
            .enumerate()
            .fold(0u128, |k, (i, &v)| k | (u128::from(v) << (3 * i)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for v in row {
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse 25 digits in row-major order; whitespace, `/`, `,` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [0u8; TOTAL_CELLS];
        let mut n = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' || ch == ',' {
                continue;
            }
            let value = match ch.to_digit(10) {
                Some(d) if d <= u32::from(LOCKED) => d as u8,
                _ => return Err(ParseBoardError::InvalidCell(ch)),
            };
            if n < TOTAL_CELLS {
                cells[n] = value;
            }
            n += 1;
        }
        if n != TOTAL_CELLS {
            return Err(ParseBoardError::WrongLength(n));
        }
        Ok(Self { cells })
    }
}
