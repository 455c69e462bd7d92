use salvo::{
    fleet_cells, is_placeable, place_fleet, ship_run, try_place_fleet, Board, BoardSize, CellState,
    Orientation, PlacementError, ShipType, FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Every ship cell's run is a straight line, and no ship cell touches a ship
/// cell outside its own run.
fn assert_isolated(board: &Board) {
    for ((r, c), state) in board.cells() {
        if state != CellState::Ship {
            continue;
        }
        let run = ship_run(board, r, c).unwrap();
        let same_row = run.iter().all(|&(rr, _)| rr == r);
        let same_col = run.iter().all(|&(_, cc)| cc == c);
        assert!(same_row || same_col, "run through ({r}, {c}) bends: {run:?}");
        for (nr, nc) in board.neighbors(r, c) {
            if board.get(nr, nc).unwrap() == CellState::Ship {
                assert!(
                    run.contains(&(nr, nc)),
                    "ship at ({r}, {c}) touches another ship at ({nr}, {nc})\n{board:?}"
                );
            }
        }
    }
}

#[test]
fn test_default_fleet_cell_count() {
    assert_eq!(fleet_cells(&FLEET), 30);
    assert_eq!(TOTAL_SHIP_CELLS, 30);
}

#[test]
fn test_place_fleet_all_sizes() {
    for (seed, size) in BoardSize::all().into_iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(seed as u64);
        let mut board = Board::with_size(size);
        let report = place_fleet(&mut board, &FLEET, &mut rng);
        assert!(report.episodes >= 1);
        assert!(report.failed_attempts < 400);
        assert_eq!(board.count(CellState::Ship), TOTAL_SHIP_CELLS);
        assert_eq!(board.count(CellState::Empty), size.side() * size.side() - TOTAL_SHIP_CELLS);
        assert_isolated(&board);
    }
}

#[test]
fn test_place_fleet_discards_previous_contents() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::with_size(BoardSize::Standard);
    board.set(0, 0, CellState::Miss).unwrap();
    place_fleet(&mut board, &FLEET, &mut rng);
    assert_eq!(board.count(CellState::Miss), 0);
    assert_eq!(board.count(CellState::Ship), TOTAL_SHIP_CELLS);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = Board::with_size(BoardSize::Standard);
    let mut b = Board::with_size(BoardSize::Standard);
    place_fleet(&mut a, &FLEET, &mut SmallRng::seed_from_u64(42));
    place_fleet(&mut b, &FLEET, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_is_placeable_rules() {
    let mut board = Board::new(6).unwrap();
    board.set(2, 2, CellState::Ship).unwrap();

    // off the board
    assert!(!is_placeable(&board, 0, 4, Orientation::Horizontal, 3));
    assert!(!is_placeable(&board, 6, 0, Orientation::Vertical, 1));
    // overlapping
    assert!(!is_placeable(&board, 2, 0, Orientation::Horizontal, 3));
    // touching diagonally
    assert!(!is_placeable(&board, 3, 3, Orientation::Horizontal, 2));
    // touching orthogonally
    assert!(!is_placeable(&board, 0, 3, Orientation::Vertical, 2));
    // one cell of clearance is enough
    assert!(is_placeable(&board, 4, 0, Orientation::Horizontal, 5));
    assert!(is_placeable(&board, 0, 4, Orientation::Vertical, 6));
}

#[test]
fn test_small_custom_fleet() {
    let fleet = [ShipType::new("Sloop", 2, 2), ShipType::new("Raft", 1, 1)];
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(5).unwrap();
    place_fleet(&mut board, &fleet, &mut rng);
    assert_eq!(board.count(CellState::Ship), 5);
    assert_isolated(&board);
}

#[test]
fn test_try_place_fleet_too_large() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(3).unwrap();

    let long = [ShipType::new("Long", 4, 1)];
    assert!(matches!(
        try_place_fleet(&mut board, &long, &mut rng, 10),
        Err(PlacementError::FleetTooLarge { .. })
    ));

    let many = [ShipType::new("Raft", 1, 10)];
    assert_eq!(
        try_place_fleet(&mut board, &many, &mut rng, 10),
        Err(PlacementError::FleetTooLarge { cells: 10, capacity: 9 })
    );
}

#[test]
fn test_try_place_fleet_infeasible() {
    // Five isolated single cells never fit on a 3x3 board.
    let fleet = [ShipType::new("Raft", 1, 5)];
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(3).unwrap();
    assert_eq!(
        try_place_fleet(&mut board, &fleet, &mut rng, 3),
        Err(PlacementError::Infeasible { episodes: 3 })
    );
    assert_eq!(board.count(CellState::Ship), 0);
}

#[test]
fn test_try_place_fleet_succeeds() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::with_size(BoardSize::Large);
    let report = try_place_fleet(&mut board, &FLEET, &mut rng, 50).unwrap();
    assert!(report.episodes <= 50);
    assert_eq!(board.count(CellState::Ship), TOTAL_SHIP_CELLS);
    assert_isolated(&board);
}
