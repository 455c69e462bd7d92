//! Attack resolution and sink detection.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, CellState};

/// The four cardinal steps as signed (row, col) offsets.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells of the ship run through (row, col): the struck cell plus every
/// contiguous non-empty, non-miss cell in each cardinal direction.
pub fn ship_run(board: &Board, row: usize, col: usize) -> Result<Vec<(usize, usize)>, BoardError> {
    board.get(row, col)?;
    let mut run = Vec::with_capacity(5);
    run.push((row, col));
    for (dr, dc) in DIRECTIONS {
        let (mut r, mut c) = (row, col);
        loop {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                break;
            };
            match board.get(nr, nc) {
                Ok(state) if state.is_ship_segment() => run.push((nr, nc)),
                _ => break,
            }
            (r, c) = (nr, nc);
        }
    }
    Ok(run)
}

/// Whether the ship run through (row, col) has no intact segment left.
pub fn is_sunk(board: &Board, row: usize, col: usize) -> Result<bool, BoardError> {
    let run = ship_run(board, row, col)?;
    Ok(run
        .iter()
        .all(|&(r, c)| board.get(r, c) != Ok(CellState::Ship)))
}

/// Attack (row, col) on `defender`, mirroring the result onto `tracker`.
///
/// An out-of-bounds coordinate or mismatched boards return an error without
/// touching either board.
pub fn attack(
    defender: &mut Board,
    tracker: &mut Board,
    row: usize,
    col: usize,
) -> Result<AttackOutcome, BoardError> {
    if defender.size() != tracker.size() {
        return Err(BoardError::SizeMismatch {
            expected: defender.size(),
            found: tracker.size(),
        });
    }
    let outcome = match defender.get(row, col)? {
        CellState::Ship => {
            defender.set(row, col, CellState::Hit)?;
            if is_sunk(defender, row, col)? {
                for (r, c) in ship_run(defender, row, col)? {
                    defender.set(r, c, CellState::Sunk)?;
                    tracker.set(r, c, CellState::Sunk)?;
                }
                AttackOutcome::Sunk
            } else {
                tracker.set(row, col, CellState::Hit)?;
                AttackOutcome::Hit
            }
        }
        CellState::Empty => {
            defender.set(row, col, CellState::Miss)?;
            tracker.set(row, col, CellState::Miss)?;
            AttackOutcome::Miss
        }
        CellState::Hit | CellState::Sunk | CellState::Miss => AttackOutcome::AlreadyAttacked,
    };
    log::trace!("attack ({}, {}) -> {:?}", row, col, outcome);
    Ok(outcome)
}
