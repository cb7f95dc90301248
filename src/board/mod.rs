//! Board representation for capture-and-fill

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};

/// Board side length (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Locked cell value: never incremented, blocks capture scans
pub const LOCKED: u8 = 5;

/// Center cell (row 2, col 2)
pub const CENTER: Pos = Pos { row: 2, col: 2 };

/// The four corners, clockwise from top-left
pub const CORNERS: [Pos; 4] = [
    Pos { row: 0, col: 0 },
    Pos { row: 0, col: 4 },
    Pos { row: 4, col: 4 },
    Pos { row: 4, col: 0 },
];

/// Every line: 5 rows, 5 columns, then the two main diagonals.
pub const LINES: [[usize; BOARD_SIZE]; 12] = build_lines();

const fn build_lines() -> [[usize; BOARD_SIZE]; 12] {
    let mut lines = [[0usize; BOARD_SIZE]; 12];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = idx(i, j);
            lines[BOARD_SIZE + i][j] = idx(j, i);
            j += 1;
        }
        lines[10][i] = idx(i, i);
        lines[11][i] = idx(i, BOARD_SIZE - 1 - i);
        i += 1;
    }
    lines
}

/// Row-major cell index.
#[inline]
pub const fn idx(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// The two sides. P1 owns even values, P2 owns odd values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Value written into a freshly claimed cell
    #[inline]
    pub fn base_value(self) -> u8 {
        match self {
            Player::P1 => 2,
            Player::P2 => 1,
        }
    }

    #[inline]
    pub fn owns(self, value: u8) -> bool {
        owner_of(value) == Some(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p1" | "1" | "even" => Ok(Player::P1),
            "p2" | "2" | "odd" => Ok(Player::P2),
            other => Err(format!("unknown player '{other}' (expected p1 or p2)")),
        }
    }
}

/// Owner of a cell value: none for 0, P1 for even, P2 for odd.
#[inline]
pub fn owner_of(value: u8) -> Option<Player> {
    match value {
        0 => None,
        v if v % 2 == 0 => Some(Player::P1),
        _ => Some(Player::P2),
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        idx(self.row as usize, self.col as usize)
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < TOTAL_CELLS);
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Checked conversion for indices coming from callers.
    #[inline]
    pub fn try_from_index(index: usize) -> Option<Self> {
        (index < TOTAL_CELLS).then(|| Self::from_index(index))
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Manhattan distance to the center cell
    #[inline]
    pub fn center_distance(self) -> u8 {
        self.row.abs_diff(CENTER.row) + self.col.abs_diff(CENTER.col)
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Diagonally opposite corner, for corner cells only.
    pub fn opposite_corner(self) -> Option<Pos> {
        if !self.is_corner() {
            return None;
        }
        let last = (BOARD_SIZE - 1) as u8;
        Some(Pos::new(last - self.row, last - self.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({},{})", self.to_index(), self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
