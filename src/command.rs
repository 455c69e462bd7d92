//! Parsers for the text commands accepted in each input context.
//!
//! Each context (yes/no confirmation, main menu, game menu) has its own
//! parse function returning its own command enum. Input is trimmed and
//! matched case-insensitively.

use core::fmt;

use crate::config::{BoardSize, Difficulty};

/// Commands accepted from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuCommand {
    Help,
    Play,
    Quit,
    /// Select a difficulty.
    Difficulty(Difficulty),
    /// Change the attempt budget of a difficulty. `Custom` also selects it.
    SetAttempts(Difficulty, u32),
    /// Change the time limit, in minutes.
    SetTime(u64),
    Size(BoardSize),
    ShowLevel,
    ShowShips,
    /// Show an empty grid of the selected size.
    RevealGrid,
    ShowTime,
}

/// Commands accepted while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Help,
    Quit,
    ShowLevel,
    ShowShips,
    /// Show the defender board with every ship revealed.
    RevealGrid,
    ShowTime,
    /// Show the tracking board without misses.
    ShowGrid,
    ShowAttempts,
    Abandon,
    Attack { row: usize, col: usize },
}

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    /// Input does not start with `/` and is not a coordinate.
    NotACommand,
    UnknownCommand,
    /// Looks like a coordinate but is not `<letter>-<number>`.
    MalformedCoordinate,
    /// Well formed coordinate outside the board.
    CoordinateOutOfRange { size: usize },
    /// Missing or non-numeric argument.
    InvalidNumber,
    NotYesNo,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "No command entered"),
            CommandError::NotACommand => write!(f, "Commands start with '/'"),
            CommandError::UnknownCommand => write!(f, "Unknown command, type /help for the list"),
            CommandError::MalformedCoordinate => {
                write!(f, "Coordinates look like <letter>-<number>, e.g. b-4")
            }
            CommandError::CoordinateOutOfRange { size } => {
                let last = (b'a' + (*size as u8).saturating_sub(1)) as char;
                write!(f, "Coordinate outside the board (a-{} and 1-{})", last, size)
            }
            CommandError::InvalidNumber => write!(f, "Expected a number of at most two digits"),
            CommandError::NotYesNo => write!(f, "Only yes/no are accepted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

fn parse_small_number(s: &str) -> Result<u32, CommandError> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::InvalidNumber);
    }
    s.parse().map_err(|_| CommandError::InvalidNumber)
}

/// Parse `"<letter>-<number>"` into a zero-based `(row, col)`. The letter
/// selects the column, the 1-based number the row.
pub fn parse_coordinate(input: &str, size: usize) -> Result<(usize, usize), CommandError> {
    let input = input.trim();
    let (letter, number) = input
        .split_once('-')
        .ok_or(CommandError::MalformedCoordinate)?;
    let letter = match letter.as_bytes() {
        [b] if b.is_ascii_alphabetic() => b.to_ascii_lowercase(),
        _ => return Err(CommandError::MalformedCoordinate),
    };
    let number = parse_small_number(number).map_err(|_| CommandError::MalformedCoordinate)? as usize;
    let col = (letter - b'a') as usize;
    if number == 0 || number > size || col >= size {
        return Err(CommandError::CoordinateOutOfRange { size });
    }
    Ok((number - 1, col))
}

/// Parse a yes/no confirmation.
pub fn parse_confirm(input: &str) -> Result<bool, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        Err(CommandError::Empty)
    } else if input.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(CommandError::NotYesNo)
    }
}

/// Split `/name arg` into the lowercase-comparable name and optional argument.
fn split_command(input: &str) -> Result<(&str, Option<&str>), CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }
    let rest = input.strip_prefix('/').ok_or(CommandError::NotACommand)?;
    let mut parts = rest.split_whitespace();
    let name = parts.next().ok_or(CommandError::UnknownCommand)?;
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(CommandError::UnknownCommand);
    }
    Ok((name, arg))
}

/// Parse a main menu command.
pub fn parse_main_menu(input: &str) -> Result<MainMenuCommand, CommandError> {
    let (name, arg) = split_command(input)?;
    let is = |s: &str| name.eq_ignore_ascii_case(s);
    let difficulty = if is("easy") {
        Some(Difficulty::Easy)
    } else if is("medium") {
        Some(Difficulty::Medium)
    } else if is("hard") {
        Some(Difficulty::Hard)
    } else if is("attempts") {
        Some(Difficulty::Custom)
    } else {
        None
    };

    match (difficulty, arg) {
        (Some(Difficulty::Custom), None) => Err(CommandError::InvalidNumber),
        (Some(d), None) => Ok(MainMenuCommand::Difficulty(d)),
        (Some(d), Some(n)) => Ok(MainMenuCommand::SetAttempts(d, parse_small_number(n)?)),
        (None, Some(n)) if is("time") => Ok(MainMenuCommand::SetTime(parse_small_number(n)? as u64)),
        (None, None) if is("time") => Err(CommandError::InvalidNumber),
        (None, Some(_)) => Err(CommandError::UnknownCommand),
        (None, None) => {
            if is("help") {
                Ok(MainMenuCommand::Help)
            } else if is("play") {
                Ok(MainMenuCommand::Play)
            } else if is("quit") {
                Ok(MainMenuCommand::Quit)
            } else if is("standard") {
                Ok(MainMenuCommand::Size(BoardSize::Standard))
            } else if is("large") {
                Ok(MainMenuCommand::Size(BoardSize::Large))
            } else if is("extralarge") {
                Ok(MainMenuCommand::Size(BoardSize::ExtraLarge))
            } else if is("showlevel") {
                Ok(MainMenuCommand::ShowLevel)
            } else if is("showships") {
                Ok(MainMenuCommand::ShowShips)
            } else if is("revealgrid") {
                Ok(MainMenuCommand::RevealGrid)
            } else if is("showtime") {
                Ok(MainMenuCommand::ShowTime)
            } else {
                Err(CommandError::UnknownCommand)
            }
        }
    }
}

/// Parse a game menu command or an attack coordinate for a board of `size`.
pub fn parse_game_menu(input: &str, size: usize) -> Result<GameCommand, CommandError> {
    let trimmed = input.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        let looks_like_coordinate = match trimmed.as_bytes() {
            [letter, next, ..] => {
                letter.is_ascii_alphabetic() && (*next == b'-' || next.is_ascii_digit())
            }
            _ => false,
        };
        if !looks_like_coordinate {
            return Err(CommandError::NotACommand);
        }
        let (row, col) = parse_coordinate(trimmed, size)?;
        return Ok(GameCommand::Attack { row, col });
    }
    let (name, arg) = split_command(trimmed)?;
    if arg.is_some() {
        return Err(CommandError::UnknownCommand);
    }
    let is = |s: &str| name.eq_ignore_ascii_case(s);
    if is("help") {
        Ok(GameCommand::Help)
    } else if is("quit") {
        Ok(GameCommand::Quit)
    } else if is("showlevel") {
        Ok(GameCommand::ShowLevel)
    } else if is("showships") {
        Ok(GameCommand::ShowShips)
    } else if is("revealgrid") {
        Ok(GameCommand::RevealGrid)
    } else if is("showtime") {
        Ok(GameCommand::ShowTime)
    } else if is("showgrid") {
        Ok(GameCommand::ShowGrid)
    } else if is("showattempts") {
        Ok(GameCommand::ShowAttempts)
    } else if is("abandon") {
        Ok(GameCommand::Abandon)
    } else {
        Err(CommandError::UnknownCommand)
    }
}
