#![cfg(feature = "std")]

//! Text rendering for boards and game information. Everything writes into a
//! caller-supplied `io::Write` so the CLI can be driven from buffers.

use std::io::{self, Write};
use std::time::Duration;

use crate::{
    board::Board,
    common::{AttackOutcome, CellState},
    config::Settings,
    game::GameState,
    ship::ShipType,
};

/// Which cells to show when rendering a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Show intact ship segments as `S`.
    pub reveal_ships: bool,
    /// Show attacked water as `o`.
    pub show_misses: bool,
}

impl BoardView {
    /// Everything visible: used to reveal the defender board.
    pub const REVEAL: BoardView = BoardView {
        reveal_ships: true,
        show_misses: true,
    };
    /// The player's own record of shots.
    pub const TRACKING: BoardView = BoardView {
        reveal_ships: false,
        show_misses: true,
    };
    /// Tracking board with misses hidden.
    pub const HITS_ONLY: BoardView = BoardView {
        reveal_ships: false,
        show_misses: false,
    };
}

fn cell_char(state: CellState, view: BoardView) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship if view.reveal_ships => 'S',
        CellState::Ship => '.',
        CellState::Hit => '*',
        CellState::Sunk => 'X',
        CellState::Miss if view.show_misses => 'o',
        CellState::Miss => '.',
    }
}

/// Render `board` with lettered columns and 1-based row numbers.
pub fn write_board<W: Write + ?Sized>(out: &mut W, board: &Board, view: BoardView) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..board.size() {
        let ch = (b'A' + c as u8) as char;
        write!(out, " {}", ch)?;
    }
    writeln!(out)?;
    for r in 0..board.size() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..board.size() {
            let state = board.get(r, c).unwrap_or_default();
            write!(out, " {}", cell_char(state, view))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// List the ship classes of a fleet.
pub fn write_fleet<W: Write + ?Sized>(out: &mut W, fleet: &[ShipType]) -> io::Result<()> {
    writeln!(out, "Fleet:")?;
    for def in fleet {
        writeln!(
            out,
            "  {:<11} {:<6} x{}",
            def.name(),
            "#".repeat(def.length()),
            def.count()
        )?;
    }
    Ok(())
}

pub fn write_level<W: Write + ?Sized>(out: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(
        out,
        "Difficulty: {} ({} failed attempts allowed)",
        settings.difficulty(),
        settings.max_failures()
    )
}

pub fn write_time_remaining<W: Write + ?Sized>(out: &mut W, remaining: Duration) -> io::Result<()> {
    let secs = remaining.as_secs();
    writeln!(out, "Time remaining: {} minutes and {} seconds", secs / 60, secs % 60)
}

pub fn write_attempts<W: Write + ?Sized>(out: &mut W, failures: u32, max_failures: u32) -> io::Result<()> {
    writeln!(out, "Total attempts:  {}", max_failures)?;
    writeln!(out, "Attempts left:   {}", max_failures.saturating_sub(failures))?;
    writeln!(out, "Failed attempts: {}", failures)
}

pub fn outcome_message(outcome: AttackOutcome) -> &'static str {
    match outcome {
        AttackOutcome::Hit => "Hit!",
        AttackOutcome::Sunk => "Hit and sunk!",
        AttackOutcome::Miss => "Miss.",
        AttackOutcome::AlreadyAttacked => "That position was already attacked.",
    }
}

pub fn state_message(state: GameState) -> &'static str {
    match state {
        GameState::InProgress => "The battle goes on.",
        GameState::Win => "Victory! Every enemy ship has been sunk.",
        GameState::LossTimeout => "Time is up, you lost.",
        GameState::LossAttempts => "You ran out of attempts, you lost.",
        GameState::Abandoned => "You abandoned the game.",
    }
}

pub fn write_main_help<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Main menu commands:")?;
    writeln!(out, "  /help                 show this list")?;
    writeln!(out, "  /play                 start a new game")?;
    writeln!(out, "  /quit                 leave the game")?;
    writeln!(out, "  /easy /medium /hard   select a difficulty")?;
    writeln!(out, "  /easy N (etc.)        change a difficulty's attempt budget and select it")?;
    writeln!(out, "  /attempts N           play with a custom attempt budget")?;
    writeln!(out, "  /time N               set the time limit in minutes")?;
    writeln!(out, "  /standard /large /extralarge  board of 10, 18 or 26 cells")?;
    writeln!(out, "  /showlevel            show difficulty and attempt budget")?;
    writeln!(out, "  /showships            show the fleet")?;
    writeln!(out, "  /revealgrid           show an empty grid of the selected size")?;
    writeln!(out, "  /showtime             show the time limit")
}

pub fn write_game_help<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Game commands:")?;
    writeln!(out, "  <letter>-<number>     attack a cell, e.g. b-4")?;
    writeln!(out, "  /help                 show this list")?;
    writeln!(out, "  /quit                 leave the game")?;
    writeln!(out, "  /showlevel            show difficulty and attempt budget")?;
    writeln!(out, "  /showships            show the fleet")?;
    writeln!(out, "  /showattempts         show used and remaining attempts")?;
    writeln!(out, "  /showgrid             show your shots without misses")?;
    writeln!(out, "  /revealgrid           reveal the enemy fleet")?;
    writeln!(out, "  /showtime             show the time remaining")?;
    writeln!(out, "  /abandon              give up and return to the main menu")
}
