//! Common types for the board engine: cell states, attack outcomes and errors.

use core::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Open water, never attacked.
    #[default]
    Empty,
    /// Intact ship segment.
    Ship,
    /// Struck ship segment whose ship is still afloat.
    Hit,
    /// Segment of a fully destroyed ship.
    Sunk,
    /// Open water that has been attacked.
    Miss,
}

impl CellState {
    /// Whether the cell has already been attacked.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Sunk | CellState::Miss)
    }

    /// Whether the cell belongs to a ship, struck or not.
    pub fn is_ship_segment(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit | CellState::Sunk)
    }

    /// Whether a cell in this state may be overwritten with `next`. Cells
    /// only move forward; rewriting the current state is allowed.
    pub fn can_become(self, next: CellState) -> bool {
        self == next
            || match self {
                CellState::Empty => true,
                CellState::Ship => matches!(next, CellState::Hit | CellState::Sunk),
                CellState::Hit => next == CellState::Sunk,
                CellState::Sunk | CellState::Miss => false,
            }
    }
}

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Struck a ship that still has intact segments.
    Hit,
    /// Struck the last intact segment of a ship.
    Sunk,
    /// Struck open water.
    Miss,
    /// The cell had already been attacked; nothing changed.
    AlreadyAttacked,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside `[0, size)`.
    OutOfBounds { row: usize, col: usize },
    /// Requested side length is zero or larger than the lettered column range.
    InvalidSize(usize),
    /// Defender and tracking boards disagree on their size.
    SizeMismatch { expected: usize, found: usize },
    /// The write would move a cell backwards, e.g. `Sunk` to `Empty`.
    InvalidTransition {
        row: usize,
        col: usize,
        from: CellState,
        to: CellState,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
            BoardError::InvalidSize(size) => {
                write!(f, "Invalid board size {} (must be 1..=26)", size)
            }
            BoardError::SizeMismatch { expected, found } => {
                write!(f, "Board size mismatch: expected {}, found {}", expected, found)
            }
            BoardError::InvalidTransition { row, col, from, to } => write!(
                f,
                "InvalidTransition: row={}, col={}, {:?} -> {:?}",
                row, col, from, to
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
