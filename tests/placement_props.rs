use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{CellState, ConfigError, Game, GameConfig, GameStatus, ShipCounts, ShotOutcome};

fn seeded_game(seed: u64, side: usize, counts: Vec<usize>, shots: u32) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::with_rng(shots, side, counts, &mut rng).unwrap()
}

/// Owning ship index for every cell, `None` for open water.
fn owners(game: &Game) -> Vec<Option<usize>> {
    let mut owners = vec![None; game.cell_states().len()];
    for (i, ship) in game.ships().iter().enumerate() {
        for &c in ship.cells() {
            assert!(owners[c].is_none(), "cell {} owned by two ships", c);
            owners[c] = Some(i);
        }
    }
    owners
}

fn assert_valid_layout(game: &Game) {
    let grid = game.grid();
    let side = grid.side();
    let owners = owners(game);
    for (i, ship) in game.ships().iter().enumerate() {
        let cells = ship.cells();
        // straight contiguous run within one row or one column
        if cells.len() > 1 {
            let step = cells[1] - cells[0];
            assert!(step == 1 || step == side);
            for pair in cells.windows(2) {
                assert_eq!(pair[1] - pair[0], step);
                if step == 1 {
                    assert_eq!(pair[0] / side, pair[1] / side);
                }
            }
        }
        for &c in cells {
            assert_eq!(grid.get(c), CellState::Ship);
            for n in grid.neighbors(c) {
                assert!(
                    owners[n].is_none() || owners[n] == Some(i),
                    "ship {} touches ship {:?} at {}",
                    i,
                    owners[n],
                    n
                );
            }
        }
    }
    for (c, owner) in owners.iter().enumerate() {
        assert_eq!(owner.is_some(), grid.get(c) == CellState::Ship);
    }
}

#[test]
fn test_small_grid_sweep() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for side in 1..=8usize {
        for a in 0..4usize {
            for b in 0..4usize {
                for c in 0..4usize {
                    let counts = vec![a, b, c];
                    let total = a + 2 * b + 3 * c;
                    match Game::with_rng(10, side, counts, &mut rng) {
                        Ok(game) => {
                            assert!(side >= 3 && total > 0 && total <= side * side);
                            assert_valid_layout(&game);
                        }
                        Err(ConfigError::NoShips) => assert_eq!(total, 0),
                        Err(ConfigError::ShipsTooLarge { .. }) => assert!(side < 3),
                        Err(ConfigError::TooManyShipCells { requested, available }) => {
                            assert_eq!(requested, total);
                            assert_eq!(available, side * side);
                            assert!(total > side * side);
                        }
                        Err(e) => panic!("unexpected error {}", e),
                    }
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn oversized_fleets_are_rejected(
        side in 1usize..=20,
        counts in prop::collection::vec(0usize..10, 1..=5),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let total = ShipCounts::new(counts.clone()).total_cells().unwrap();
        let result = Game::with_rng(10, side, counts.clone(), &mut rng);
        if counts.len() <= side && total > side * side {
            prop_assert!(
                matches!(result, Err(ConfigError::TooManyShipCells { .. })),
                "expected TooManyShipCells, got {:?}",
                result.as_ref().map(|g| g.status())
            );
        }
        if let Ok(game) = result {
            prop_assert!(total <= side * side);
            prop_assert_eq!(game.status(), GameStatus::InProgress);
            prop_assert_eq!(game.remaining_shots(), 10);
            assert_valid_layout(&game);
        }
    }

    #[test]
    fn same_seed_same_layout(seed in any::<u64>(), side in 4usize..=12) {
        let a = seeded_game(seed, side, vec![2, 1, 1], 30);
        let b = seeded_game(seed, side, vec![2, 1, 1], 30);
        prop_assert_eq!(a.cell_states(), b.cell_states());
        prop_assert_eq!(a.ships(), b.ships());
    }

    #[test]
    fn cell_states_are_stable_between_shots(seed in any::<u64>()) {
        let game = seeded_game(seed, 10, vec![5, 3, 2, 1, 1, 1], 80);
        let first = game.cell_states().to_vec();
        prop_assert_eq!(game.cell_states(), &first[..]);
        prop_assert_eq!(game.snapshot().cells, first);
    }

    #[test]
    fn open_water_always_misses(seed in any::<u64>()) {
        let mut game = seeded_game(seed, 8, vec![3, 2, 1], 64);
        let water: Vec<usize> = (0..64)
            .filter(|&c| game.cell_states()[c] == CellState::Empty)
            .collect();
        for cell in water {
            prop_assert_eq!(game.fire(cell), Ok(ShotOutcome::Miss));
            prop_assert_eq!(game.cell_states()[cell], CellState::Miss);
        }
        prop_assert!(game.ships().iter().all(|s| !s.is_destroyed()));
    }

    #[test]
    fn exhausted_budget_without_win_loses(seed in any::<u64>(), shots in 1u32..20) {
        let mut game = seeded_game(seed, 10, vec![0, 0, 1], shots);
        let water: Vec<usize> = (0..100)
            .filter(|&c| game.cell_states()[c] == CellState::Empty)
            .take(shots as usize)
            .collect();
        for cell in water {
            game.apply_shot(cell);
        }
        prop_assert_eq!(game.status(), GameStatus::Lost);
        prop_assert_eq!(game.remaining_shots(), 0);
        prop_assert!((0..100).all(|c| !game.can_be_shot(c)));
    }

    #[test]
    fn valid_configs_start_in_progress(
        seed in any::<u64>(),
        shots in 0u32..200,
        side in 6usize..=15,
        counts in prop::collection::vec(0usize..3, 1..=6),
    ) {
        prop_assume!(counts.iter().any(|&n| n > 0));
        let config = GameConfig::new(shots, side, counts);
        prop_assume!(config.validate().is_ok());
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::new(config, &mut rng).unwrap();
        prop_assert_eq!(game.status(), GameStatus::InProgress);
        prop_assert_eq!(game.remaining_shots(), shots);
    }
}
