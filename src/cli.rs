#![cfg(feature = "std")]

//! Interactive text front end: main menu, game menu and confirmations.
//!
//! The loops read from any `BufRead` and write to any `Write`, so the whole
//! front end can be exercised with in-memory buffers.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    board::Board,
    command::{parse_confirm, parse_game_menu, parse_main_menu, GameCommand, MainMenuCommand},
    config::{Settings, FLEET},
    game::{Clock, GameSession, GameState},
    ui::{self, BoardView},
};

/// Where control goes after a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    MainMenu,
    Exit,
}

/// Read one line; `None` on end of input.
fn read_line<I: BufRead>(input: &mut I) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until a yes/no answer is given. End of input counts as "no".
fn confirm<I: BufRead, W: Write>(input: &mut I, out: &mut W, question: &str) -> anyhow::Result<bool> {
    loop {
        write!(out, "{} (yes/no) ", question)?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match parse_confirm(&line) {
            Ok(answer) => return Ok(answer),
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
}

/// Run the main menu until the player quits or input ends.
pub fn run_menu<R, C, I, W>(
    settings: &mut Settings,
    rng: &mut R,
    clock: &C,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng,
    C: Clock,
    I: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to Salvo! Type /help for the list of commands.")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let command = match parse_main_menu(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };
        match command {
            MainMenuCommand::Help => ui::write_main_help(out)?,
            MainMenuCommand::Play => {
                if run_game(settings, rng, clock, input, out)? == Flow::Exit {
                    writeln!(out, "Thanks for playing!")?;
                    return Ok(());
                }
            }
            MainMenuCommand::Quit => {
                if confirm(input, out, "Do you really want to quit?")? {
                    writeln!(out, "Thanks for playing!")?;
                    return Ok(());
                }
            }
            MainMenuCommand::Difficulty(d) => {
                settings.set_difficulty(d);
                ui::write_level(out, settings)?;
            }
            MainMenuCommand::SetAttempts(d, n) => match settings.set_attempts(d, n) {
                Ok(()) => {
                    writeln!(out, "{} now allows {} failed attempts", d, n)?;
                    ui::write_level(out, settings)?;
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            MainMenuCommand::SetTime(minutes) => match settings.set_time_limit(minutes) {
                Ok(()) => writeln!(out, "Time limit set to {} minutes", minutes)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            MainMenuCommand::Size(size) => {
                settings.size = size;
                writeln!(out, "Board size set to {0}x{0}", size.side())?;
            }
            MainMenuCommand::ShowLevel => ui::write_level(out, settings)?,
            MainMenuCommand::ShowShips => ui::write_fleet(out, &FLEET)?,
            MainMenuCommand::RevealGrid => {
                ui::write_board(out, &Board::with_size(settings.size), BoardView::REVEAL)?
            }
            MainMenuCommand::ShowTime => {
                writeln!(out, "Time limit: {} minutes", settings.time_limit_minutes())?
            }
        }
    }
}

fn run_game<R, C, I, W>(
    settings: &Settings,
    rng: &mut R,
    clock: &C,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<Flow>
where
    R: Rng,
    C: Clock,
    I: BufRead,
    W: Write,
{
    let mut session = GameSession::new(settings, rng, clock);
    writeln!(out, "The enemy fleet is in position. Attack with <letter>-<number>.")?;
    ui::write_board(out, session.tracker(), BoardView::TRACKING)?;

    loop {
        write!(out, "attack> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Flow::Exit);
        };
        let size = session.defender().size();
        let command = match parse_game_menu(&line, size) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };
        match command {
            GameCommand::Attack { row, col } => {
                let turn = session.fire(row, col)?;
                writeln!(out, "{}", ui::outcome_message(turn.outcome))?;
                ui::write_board(out, session.tracker(), BoardView::TRACKING)?;
                if turn.state.is_terminal() {
                    return end_game(&session, out);
                }
            }
            GameCommand::Help => ui::write_game_help(out)?,
            GameCommand::Quit => {
                if confirm(input, out, "Do you really want to quit?")? {
                    return Ok(Flow::Exit);
                }
            }
            GameCommand::ShowLevel => ui::write_level(out, settings)?,
            GameCommand::ShowShips => ui::write_fleet(out, &FLEET)?,
            GameCommand::RevealGrid => ui::write_board(out, &session.reveal(), BoardView::REVEAL)?,
            GameCommand::ShowTime => ui::write_time_remaining(out, session.time_remaining())?,
            GameCommand::ShowGrid => ui::write_board(out, session.tracker(), BoardView::HITS_ONLY)?,
            GameCommand::ShowAttempts => {
                ui::write_attempts(out, session.failures(), session.max_failures())?
            }
            GameCommand::Abandon => {
                if confirm(input, out, "Do you really want to abandon the game?")? {
                    session.abandon();
                    return end_game(&session, out);
                }
            }
        }

        // The clock keeps running between attacks.
        if session.state() == GameState::LossTimeout {
            return end_game(&session, out);
        }
    }
}

fn end_game<C: Clock, W: Write>(session: &GameSession<C>, out: &mut W) -> anyhow::Result<Flow> {
    writeln!(out, "{}", ui::state_message(session.state()))?;
    writeln!(out, "Enemy fleet:")?;
    ui::write_board(out, &session.reveal(), BoardView::REVEAL)?;
    Ok(Flow::MainMenu)
}
