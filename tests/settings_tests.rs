use std::time::Duration;

use salvo::{Board, BoardSize, CellState, Difficulty, GameSession, ManualClock, Settings, SettingsError};

#[test]
fn test_defaults() {
    let settings = Settings::new();
    assert_eq!(settings.size, BoardSize::Standard);
    assert_eq!(settings.difficulty(), Difficulty::Medium);
    assert_eq!(settings.attempts(Difficulty::Easy), 50);
    assert_eq!(settings.attempts(Difficulty::Medium), 30);
    assert_eq!(settings.attempts(Difficulty::Hard), 10);
    assert_eq!(settings.max_failures(), 30);
    assert_eq!(settings.time_limit(), Duration::from_secs(30 * 60));
}

#[test]
fn test_difficulty_selects_budget() {
    let mut settings = Settings::new();
    settings.set_difficulty(Difficulty::Hard);
    assert_eq!(settings.max_failures(), 10);
    settings.set_difficulty(Difficulty::Easy);
    assert_eq!(settings.max_failures(), 50);
}

#[test]
fn test_set_attempts_limits() {
    let mut settings = Settings::new();
    assert_eq!(
        settings.set_attempts(Difficulty::Easy, 100),
        Err(SettingsError::AttemptsTooHigh { requested: 100, max: 99 })
    );
    assert_eq!(
        settings.set_attempts(Difficulty::Easy, 14),
        Err(SettingsError::AttemptsTooLow {
            difficulty: Difficulty::Easy,
            requested: 14,
            min: 15
        })
    );
    assert!(matches!(
        settings.set_attempts(Difficulty::Medium, 9),
        Err(SettingsError::AttemptsTooLow { min: 10, .. })
    ));
    assert!(matches!(
        settings.set_attempts(Difficulty::Hard, 4),
        Err(SettingsError::AttemptsTooLow { min: 5, .. })
    ));
    assert_eq!(settings, Settings::new());
}

#[test]
fn test_set_attempts_keeps_order() {
    let mut settings = Settings::new();
    // medium may not reach easy
    assert_eq!(
        settings.set_attempts(Difficulty::Medium, 50),
        Err(SettingsError::AttemptsOutOfOrder { easy: 50, medium: 50, hard: 10 })
    );
    assert!(settings.set_attempts(Difficulty::Hard, 30).is_err());
    assert!(settings.set_attempts(Difficulty::Easy, 20).is_err());

    // rejected budgets leave the selection alone
    assert_eq!(settings.difficulty(), Difficulty::Medium);

    settings.set_attempts(Difficulty::Easy, 99).unwrap();
    settings.set_attempts(Difficulty::Medium, 60).unwrap();
    settings.set_attempts(Difficulty::Hard, 59).unwrap();
    assert_eq!(settings.attempts(Difficulty::Easy), 99);
    assert_eq!(settings.attempts(Difficulty::Medium), 60);
    assert_eq!(settings.attempts(Difficulty::Hard), 59);
}

#[test]
fn test_set_attempts_selects_difficulty() {
    let mut settings = Settings::new();
    settings.set_attempts(Difficulty::Easy, 40).unwrap();
    assert_eq!(settings.difficulty(), Difficulty::Easy);
    assert_eq!(settings.max_failures(), 40);

    settings.set_attempts(Difficulty::Hard, 8).unwrap();
    assert_eq!(settings.difficulty(), Difficulty::Hard);
    assert_eq!(settings.max_failures(), 8);

    settings.set_attempts(Difficulty::Medium, 20).unwrap();
    assert_eq!(settings.difficulty(), Difficulty::Medium);
    assert_eq!(settings.max_failures(), 20);
}

#[test]
fn test_custom_attempts() {
    let mut settings = Settings::new();
    settings.set_attempts(Difficulty::Custom, 5).unwrap();
    assert_eq!(settings.difficulty(), Difficulty::Custom);
    assert_eq!(settings.max_failures(), 5);
    // custom ignores the ordering of the named levels
    settings.set_attempts(Difficulty::Custom, 99).unwrap();
    assert_eq!(settings.max_failures(), 99);
    assert!(settings.set_attempts(Difficulty::Custom, 4).is_err());
}

#[test]
fn test_time_limit() {
    let mut settings = Settings::new();
    assert_eq!(
        settings.set_time_limit(2),
        Err(SettingsError::TimeTooShort { requested: 2, min: 3 })
    );
    settings.set_time_limit(3).unwrap();
    assert_eq!(settings.time_limit_minutes(), 3);
    assert_eq!(settings.time_limit(), Duration::from_secs(180));
    settings.set_time_limit(99).unwrap();
    assert_eq!(settings.time_limit(), Duration::from_secs(99 * 60));
}

#[test]
fn test_huge_time_limit_rejected() {
    let mut settings = Settings::new();
    assert_eq!(
        settings.set_time_limit(100),
        Err(SettingsError::TimeTooLong { requested: 100, max: 99 })
    );
    assert!(settings.set_time_limit(u64::MAX / 2).is_err());
    assert_eq!(settings.time_limit_minutes(), 30);

    // the session computes its deadline from the accepted limit
    let clock = ManualClock::new();
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, CellState::Ship).unwrap();
    let session = GameSession::with_boards(board, &settings, &clock);
    assert_eq!(session.time_remaining(), Duration::from_secs(30 * 60));
}
