//! End-of-game evaluation and the per-game session that drives turns.

use core::cell::Cell;
use core::fmt;
use core::time::Duration;
use rand::Rng;

use crate::{
    attack::attack,
    board::Board,
    common::{AttackOutcome, BoardError, CellState},
    config::{Settings, FLEET},
    placement::{place_fleet, PlacementReport},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    InProgress,
    /// Every ship has been sunk.
    Win,
    /// The time limit ran out.
    LossTimeout,
    /// The failed-attempt budget was used up.
    LossAttempts,
    /// The player gave up. Only reported by [`GameSession`].
    Abandoned,
}

impl GameState {
    /// Everything except `InProgress` ends the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// Decide the state of a game. Checks run in a fixed order and the first
/// match wins, so a timeout outranks a simultaneous winning shot.
pub fn evaluate(
    defender: &Board,
    failures: u32,
    max_failures: u32,
    time_remaining: Duration,
) -> GameState {
    if time_remaining.is_zero() {
        GameState::LossTimeout
    } else if failures == max_failures {
        GameState::LossAttempts
    } else if !defender.contains(CellState::Ship) {
        GameState::Win
    } else {
        GameState::InProgress
    }
}

/// Source of monotonic time, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Share it by reference.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub outcome: AttackOutcome,
    pub state: GameState,
}

/// Errors returned by [`GameSession::fire`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The game already reached a terminal state.
    GameOver(GameState),
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver(state) => write!(f, "Game is over ({:?})", state),
            SessionError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// One game: the defender board, the player's tracking board, the failure
/// counter and the deadline.
pub struct GameSession<C: Clock> {
    defender: Board,
    tracker: Board,
    failures: u32,
    max_failures: u32,
    deadline: Duration,
    clock: C,
    placement: Option<PlacementReport>,
    finished: Option<GameState>,
}

impl<C: Clock> GameSession<C> {
    /// Place the default fleet on a fresh board and start the timer.
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R, clock: C) -> Self {
        let mut defender = Board::with_size(settings.size);
        let report = place_fleet(&mut defender, &FLEET, rng);
        let mut session = Self::with_boards(defender, settings, clock);
        session.placement = Some(report);
        session
    }

    /// Start a game on an already populated defender board.
    pub fn with_boards(defender: Board, settings: &Settings, clock: C) -> Self {
        let tracker = Board::with_size_of(&defender);
        let deadline = clock.now() + settings.time_limit();
        log::info!(
            "new game: {}x{} board, {} attempts ({}), {} minutes",
            defender.size(),
            defender.size(),
            settings.max_failures(),
            settings.difficulty(),
            settings.time_limit_minutes()
        );
        Self {
            defender,
            tracker,
            failures: 0,
            max_failures: settings.max_failures(),
            deadline,
            clock,
            placement: None,
            finished: None,
        }
    }

    /// Attack (row, col) and evaluate the game afterwards.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<Turn, SessionError> {
        if let Some(state) = self.finished {
            return Err(SessionError::GameOver(state));
        }
        let outcome = attack(&mut self.defender, &mut self.tracker, row, col)?;
        if outcome == AttackOutcome::Miss {
            self.failures += 1;
        }
        let state = self.evaluate_now();
        if state.is_terminal() {
            self.finish(state);
        }
        Ok(Turn { outcome, state })
    }

    /// Give up the game.
    pub fn abandon(&mut self) {
        if self.finished.is_none() {
            self.finish(GameState::Abandoned);
        }
    }

    fn finish(&mut self, state: GameState) {
        log::info!("game over: {:?} after {} failed attempts", state, self.failures);
        self.finished = Some(state);
    }

    fn evaluate_now(&self) -> GameState {
        evaluate(
            &self.defender,
            self.failures,
            self.max_failures,
            self.time_remaining(),
        )
    }

    /// Latched terminal state, or a fresh evaluation while the game runs.
    pub fn state(&self) -> GameState {
        self.finished.unwrap_or_else(|| self.evaluate_now())
    }

    pub fn time_remaining(&self) -> Duration {
        self.deadline.saturating_sub(self.clock.now())
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn max_failures(&self) -> u32 {
        self.max_failures
    }

    pub fn attempts_left(&self) -> u32 {
        self.max_failures.saturating_sub(self.failures)
    }

    /// Read-only view of the board holding the real fleet.
    pub fn defender(&self) -> &Board {
        &self.defender
    }

    /// Read-only view of the player's record of shots.
    pub fn tracker(&self) -> &Board {
        &self.tracker
    }

    /// Independent copy of the defender board.
    pub fn reveal(&self) -> Board {
        self.defender.snapshot()
    }

    /// Placement statistics when the session placed its own fleet.
    pub fn placement(&self) -> Option<PlacementReport> {
        self.placement
    }
}
