//! Game board: a square grid of [`CellState`] values.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, CellState};
use crate::config::{BoardSize, MAX_BOARD_SIZE};

/// Square `size × size` grid. Every cell mutation goes through [`Board::set`]
/// or [`Board::reset`], so a cell never reverts except on a full reset.
///
/// `Clone` allocates fresh storage, so a cloned board never aliases the
/// original.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty board with side length `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            cells: vec![CellState::Empty; size * size],
        })
    }

    /// Create an empty board for one of the game sizes.
    pub fn with_size(size: BoardSize) -> Self {
        let n = size.side();
        Board {
            size: n,
            cells: vec![CellState::Empty; n * n],
        }
    }

    /// Empty board with the same side length as `other`.
    pub fn with_size_of(other: &Board) -> Self {
        let n = other.size;
        Board {
            size: n,
            cells: vec![CellState::Empty; n * n],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// State of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Write `state` into the cell at (row, col).
    ///
    /// Only forward transitions are accepted (see [`CellState::can_become`]);
    /// [`Board::reset`] is the only way back to [`CellState::Empty`].
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        let from = self.cells[idx];
        if !from.can_become(state) {
            return Err(BoardError::InvalidTransition {
                row,
                col,
                from,
                to: state,
            });
        }
        self.cells[idx] = state;
        Ok(())
    }

    /// Clear every cell back to [`CellState::Empty`].
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Independent deep copy for external readers.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Returns `true` if at least one cell is in `state`.
    pub fn contains(&self, state: CellState) -> bool {
        self.cells.iter().any(|&c| c == state)
    }

    /// Iterator over `((row, col), state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i / n, i % n), state))
    }

    /// In-bounds neighbours of (row, col), diagonals included.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds(r, c).then_some((r, c))
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => '*',
                    CellState::Sunk => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
