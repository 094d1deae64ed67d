//! Validated board coordinates.

/// A coordinate on the 3x3 board.
///
/// Construction validates the range, so a `Position` always addresses a
/// real square; the move path never has to re-check bounds. Row and column
/// each run 0-2, and the flat index is `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column, rejecting out-of-range input.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a position from a flat board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Self::new(index / 3, index % 3)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Flat board index (0-8, row-major).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
