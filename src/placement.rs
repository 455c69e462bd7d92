//! Random fleet placement.
//!
//! Ships are placed longest first. Every rejected candidate draws from one
//! budget shared by the whole episode; once the budget is spent the board is
//! wiped and the episode starts over from the first ship. There is no
//! per-ship backtracking.

use core::fmt;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, CellState};
use crate::ship::{fleet_cells, ship_cells, Orientation, ShipType};

/// Rejected candidates allowed in one placement episode.
pub const PLACEMENT_ATTEMPT_BUDGET: u32 = 400;

/// Summary of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    /// Episodes run, including the successful one.
    pub episodes: u32,
    /// Budget consumed by the successful episode.
    pub failed_attempts: u32,
}

/// Errors returned by [`try_place_fleet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No episode succeeded within the episode cap.
    Infeasible { episodes: u32 },
    /// The fleet cannot fit on the board at all.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Infeasible { episodes } => {
                write!(f, "Unable to place fleet after {} episodes", episodes)
            }
            PlacementError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Whether a ship of `length` can be anchored at (row, col) with
/// `orientation`: every cell in bounds, empty, and not touching any other
/// ship, diagonals included.
pub fn is_placeable(
    board: &Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> bool {
    ship_cells(row, col, orientation, length).all(|(r, c)| {
        board.get(r, c) == Ok(CellState::Empty)
            && board
                .neighbors(r, c)
                .all(|(nr, nc)| board.get(nr, nc) != Ok(CellState::Ship))
    })
}

/// Mark the ship's cells. The caller has checked [`is_placeable`].
fn commit(
    board: &mut Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> Result<(), BoardError> {
    for (r, c) in ship_cells(row, col, orientation, length) {
        board.set(r, c, CellState::Ship)?;
    }
    Ok(())
}

/// Fleet entries ordered longest first; ties keep input order.
fn by_length_desc(fleet: &[ShipType]) -> alloc::vec::Vec<ShipType> {
    let mut order = fleet.to_vec();
    order.sort_by(|a, b| b.length().cmp(&a.length()));
    order
}

/// One episode. Returns the budget consumed on success, `None` when the
/// budget ran out.
fn run_episode<R: Rng>(board: &mut Board, order: &[ShipType], rng: &mut R) -> Option<u32> {
    let size = board.size();
    let mut failures = 0u32;
    for def in order {
        for _ in 0..def.count() {
            loop {
                if failures >= PLACEMENT_ATTEMPT_BUDGET {
                    return None;
                }
                let row = rng.random_range(0..size);
                let col = rng.random_range(0..size);
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if is_placeable(board, row, col, orientation, def.length())
                    && commit(board, row, col, orientation, def.length()).is_ok()
                {
                    break;
                }
                failures += 1;
            }
        }
    }
    Some(failures)
}

fn check_capacity(board: &Board, fleet: &[ShipType]) -> Result<(), PlacementError> {
    let cells = fleet_cells(fleet);
    let capacity = board.size() * board.size();
    let longest = fleet
        .iter()
        .filter(|s| s.count() > 0)
        .map(ShipType::length)
        .max()
        .unwrap_or(0);
    if cells > capacity || longest > board.size() {
        return Err(PlacementError::FleetTooLarge { cells, capacity });
    }
    Ok(())
}

/// Place `fleet` on `board`, retrying whole episodes until one succeeds.
///
/// The board is reset before every episode, so any previous contents are
/// discarded.
///
/// # Panics
///
/// If the fleet can never fit (more cells than the board has, or a ship
/// longer than the board side). Use [`try_place_fleet`] for custom fleets.
pub fn place_fleet<R: Rng>(board: &mut Board, fleet: &[ShipType], rng: &mut R) -> PlacementReport {
    if let Err(e) = check_capacity(board, fleet) {
        panic!("place_fleet: {}", e);
    }
    let order = by_length_desc(fleet);
    let mut episodes = 0u32;
    loop {
        episodes += 1;
        board.reset();
        if let Some(failed_attempts) = run_episode(board, &order, rng) {
            log::debug!(
                "fleet placed on {}x{} board after {} episode(s), {} rejected candidates",
                board.size(),
                board.size(),
                episodes,
                failed_attempts
            );
            return PlacementReport {
                episodes,
                failed_attempts,
            };
        }
        log::debug!("placement episode {} exhausted its budget, restarting", episodes);
    }
}

/// Like [`place_fleet`], but gives up after `max_episodes` episodes and
/// leaves the board empty.
pub fn try_place_fleet<R: Rng>(
    board: &mut Board,
    fleet: &[ShipType],
    rng: &mut R,
    max_episodes: u32,
) -> Result<PlacementReport, PlacementError> {
    check_capacity(board, fleet)?;
    let order = by_length_desc(fleet);
    for episode in 1..=max_episodes {
        board.reset();
        if let Some(failed_attempts) = run_episode(board, &order, rng) {
            log::debug!("fleet placed after {} episode(s)", episode);
            return Ok(PlacementReport {
                episodes: episode,
                failed_attempts,
            });
        }
        log::debug!("placement episode {} exhausted its budget", episode);
    }
    board.reset();
    log::warn!("giving up on fleet placement after {} episodes", max_episodes);
    Err(PlacementError::Infeasible {
        episodes: max_episodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn order_is_longest_first() {
        let fleet = [
            ShipType::new("a", 2, 1),
            ShipType::new("b", 5, 1),
            ShipType::new("c", 3, 2),
        ];
        let lens: alloc::vec::Vec<_> = by_length_desc(&fleet).iter().map(|s| s.length()).collect();
        assert_eq!(lens, [5, 3, 2]);
    }

    #[test]
    fn commit_reports_cells_off_the_board() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            commit(&mut board, 0, 2, Orientation::Horizontal, 2),
            Err(BoardError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(commit(&mut board, 0, 0, Orientation::Vertical, 3), Ok(()));
        assert_eq!(board.count(CellState::Ship), 4);
    }

    #[test]
    fn episode_stops_once_budget_is_spent() {
        // Nothing of length 4 fits on a 3x3 board.
        let mut board = Board::new(3).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let order = [ShipType::new("long", 4, 1)];
        assert_eq!(run_episode(&mut board, &order, &mut rng), None);
        assert_eq!(board.count(CellState::Ship), 0);
    }
}
