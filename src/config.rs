//! Game configuration: board sizes, the default fleet, difficulty budgets and
//! the per-game [`Settings`] value.

use core::fmt;
use core::time::Duration;

use crate::ship::ShipType;

/// Columns are addressed by a single letter, which caps the side length.
pub const MAX_BOARD_SIZE: usize = 26;

/// Default fleet, longest ships first.
pub const FLEET: [ShipType; 4] = [
    ShipType::new("Carrier", 5, 1),
    ShipType::new("Battleship", 4, 2),
    ShipType::new("Cruiser", 3, 3),
    ShipType::new("Destroyer", 2, 4),
];

/// Ship cells of [`FLEET`] once placed.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 * 2 + 3 * 3 + 2 * 4;

pub const DEFAULT_EASY_ATTEMPTS: u32 = 50;
pub const DEFAULT_MEDIUM_ATTEMPTS: u32 = 30;
pub const DEFAULT_HARD_ATTEMPTS: u32 = 10;
pub const MAX_ATTEMPTS: u32 = 99;
pub const MIN_EASY_ATTEMPTS: u32 = 15;
pub const MIN_MEDIUM_ATTEMPTS: u32 = 10;
pub const MIN_HARD_ATTEMPTS: u32 = 5;
pub const MIN_CUSTOM_ATTEMPTS: u32 = 5;

pub const DEFAULT_TIME_LIMIT_MINUTES: u64 = 30;
pub const MIN_TIME_LIMIT_MINUTES: u64 = 3;
pub const MAX_TIME_LIMIT_MINUTES: u64 = 99;

/// Selectable board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum BoardSize {
    #[default]
    Standard,
    Large,
    ExtraLarge,
}

impl BoardSize {
    /// Side length in cells.
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Standard => 10,
            BoardSize::Large => 18,
            BoardSize::ExtraLarge => 26,
        }
    }

    pub const fn all() -> [BoardSize; 3] {
        [BoardSize::Standard, BoardSize::Large, BoardSize::ExtraLarge]
    }
}

/// Difficulty levels; each carries its own failed-attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Custom,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Errors returned when changing [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Attempt count above [`MAX_ATTEMPTS`].
    AttemptsTooHigh { requested: u32, max: u32 },
    /// Attempt count below the minimum for the difficulty.
    AttemptsTooLow { difficulty: Difficulty, requested: u32, min: u32 },
    /// Easy must allow more attempts than medium, medium more than hard.
    AttemptsOutOfOrder { easy: u32, medium: u32, hard: u32 },
    /// Time limit below [`MIN_TIME_LIMIT_MINUTES`].
    TimeTooShort { requested: u64, min: u64 },
    /// Time limit above [`MAX_TIME_LIMIT_MINUTES`].
    TimeTooLong { requested: u64, max: u64 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::AttemptsTooHigh { requested, max } => {
                write!(f, "{} attempts is too many (max {})", requested, max)
            }
            SettingsError::AttemptsTooLow {
                difficulty,
                requested,
                min,
            } => write!(
                f,
                "{} attempts is too few for {} (min {})",
                requested, difficulty, min
            ),
            SettingsError::AttemptsOutOfOrder { easy, medium, hard } => write!(
                f,
                "attempts must satisfy easy > medium > hard (easy {}, medium {}, hard {})",
                easy, medium, hard
            ),
            SettingsError::TimeTooShort { requested, min } => write!(
                f,
                "{} minutes is too short (min {})",
                requested, min
            ),
            SettingsError::TimeTooLong { requested, max } => write!(
                f,
                "{} minutes is too long (max {})",
                requested, max
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

/// Per-game configuration. Created once by the front end and copied into
/// each [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub size: BoardSize,
    difficulty: Difficulty,
    easy_attempts: u32,
    medium_attempts: u32,
    hard_attempts: u32,
    custom_attempts: u32,
    time_limit_minutes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: BoardSize::Standard,
            difficulty: Difficulty::Medium,
            easy_attempts: DEFAULT_EASY_ATTEMPTS,
            medium_attempts: DEFAULT_MEDIUM_ATTEMPTS,
            hard_attempts: DEFAULT_HARD_ATTEMPTS,
            custom_attempts: DEFAULT_MEDIUM_ATTEMPTS,
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Failed-attempt budget configured for `difficulty`.
    pub fn attempts(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_attempts,
            Difficulty::Medium => self.medium_attempts,
            Difficulty::Hard => self.hard_attempts,
            Difficulty::Custom => self.custom_attempts,
        }
    }

    /// Failed-attempt budget of the active difficulty.
    pub fn max_failures(&self) -> u32 {
        self.attempts(self.difficulty)
    }

    /// Change the budget of one difficulty and make it the active one.
    /// Nothing changes when the new budget is rejected.
    pub fn set_attempts(&mut self, difficulty: Difficulty, attempts: u32) -> Result<(), SettingsError> {
        if attempts > MAX_ATTEMPTS {
            return Err(SettingsError::AttemptsTooHigh {
                requested: attempts,
                max: MAX_ATTEMPTS,
            });
        }
        let min = match difficulty {
            Difficulty::Easy => MIN_EASY_ATTEMPTS,
            Difficulty::Medium => MIN_MEDIUM_ATTEMPTS,
            Difficulty::Hard => MIN_HARD_ATTEMPTS,
            Difficulty::Custom => MIN_CUSTOM_ATTEMPTS,
        };
        if attempts < min {
            return Err(SettingsError::AttemptsTooLow {
                difficulty,
                requested: attempts,
                min,
            });
        }

        let (mut easy, mut medium, mut hard) =
            (self.easy_attempts, self.medium_attempts, self.hard_attempts);
        match difficulty {
            Difficulty::Easy => easy = attempts,
            Difficulty::Medium => medium = attempts,
            Difficulty::Hard => hard = attempts,
            Difficulty::Custom => {
                self.custom_attempts = attempts;
                self.difficulty = Difficulty::Custom;
                return Ok(());
            }
        }
        if !(easy > medium && medium > hard) {
            return Err(SettingsError::AttemptsOutOfOrder { easy, medium, hard });
        }
        self.easy_attempts = easy;
        self.medium_attempts = medium;
        self.hard_attempts = hard;
        self.difficulty = difficulty;
        Ok(())
    }

    /// Game time limit.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_minutes.saturating_mul(60))
    }

    pub fn time_limit_minutes(&self) -> u64 {
        self.time_limit_minutes
    }

    pub fn set_time_limit(&mut self, minutes: u64) -> Result<(), SettingsError> {
        if minutes < MIN_TIME_LIMIT_MINUTES {
            return Err(SettingsError::TimeTooShort {
                requested: minutes,
                min: MIN_TIME_LIMIT_MINUTES,
            });
        }
        if minutes > MAX_TIME_LIMIT_MINUTES {
            return Err(SettingsError::TimeTooLong {
                requested: minutes,
                max: MAX_TIME_LIMIT_MINUTES,
            });
        }
        self.time_limit_minutes = minutes;
        Ok(())
    }
}
