//! Commonly used types and functions for ease of import.

pub use crate::attack::attack;
pub use crate::{
    evaluate, place_fleet, AttackOutcome, Board, BoardError, BoardSize, CellState, Difficulty,
    GameSession, GameState, Settings, ShipType, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{run_menu, SystemClock};
