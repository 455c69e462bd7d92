use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{place_fleet, ship_run, Board, BoardSize, CellState, FLEET, TOTAL_SHIP_CELLS};

fn any_size() -> impl Strategy<Value = BoardSize> {
    prop_oneof![
        Just(BoardSize::Standard),
        Just(BoardSize::Large),
        Just(BoardSize::ExtraLarge),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_is_complete(seed in any::<u64>(), size in any_size()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::with_size(size);
        place_fleet(&mut board, &FLEET, &mut rng);
        prop_assert_eq!(board.count(CellState::Ship), TOTAL_SHIP_CELLS);
        prop_assert_eq!(
            board.count(CellState::Ship) + board.count(CellState::Empty),
            size.side() * size.side()
        );
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>(), size in any_size()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::with_size(size);
        place_fleet(&mut board, &FLEET, &mut rng);

        let mut run_lengths = Vec::new();
        for ((r, c), state) in board.cells() {
            if state != CellState::Ship {
                continue;
            }
            let run = ship_run(&board, r, c).unwrap();
            prop_assert!(run.len() <= 5);
            for (nr, nc) in board.neighbors(r, c) {
                if board.get(nr, nc).unwrap() == CellState::Ship {
                    prop_assert!(run.contains(&(nr, nc)));
                }
            }
            // count each ship once, from its top-left cell
            if run.iter().all(|&cell| cell >= (r, c)) {
                run_lengths.push(run.len());
            }
        }
        run_lengths.sort_unstable();
        prop_assert_eq!(run_lengths, vec![2, 2, 2, 2, 3, 3, 3, 4, 4, 5]);
    }
}
