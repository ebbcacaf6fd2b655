use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{CellState, Game, GameApi, GameSession, GameStatus, ShotOutcome};

fn game(seed: u64) -> (Game, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::with_rng(30, 6, vec![2, 1], &mut rng).unwrap();
    (game, rng)
}

#[tokio::test]
async fn test_session_fires_and_returns_game() -> anyhow::Result<()> {
    let (game, rng) = game(11);
    let expected = game.snapshot();
    let water = expected
        .cells
        .iter()
        .position(|s| *s == CellState::Empty)
        .unwrap();

    let (session, worker) = GameSession::spawn(game, rng);
    assert_eq!(session.snapshot().await?, expected);
    assert_eq!(session.fire(water).await?, ShotOutcome::Miss);
    assert!(session.fire(water).await.is_err());
    assert_eq!(session.status().await?, GameStatus::InProgress);

    drop(session);
    let game = worker.await?;
    assert_eq!(game.remaining_shots(), 29);
    assert_eq!(game.cell_states()[water], CellState::Miss);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_callers_are_serialised() -> anyhow::Result<()> {
    let (game, rng) = game(12);
    let targets: Vec<usize> = game
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect();
    let ships = game.ships().len();
    let (session, worker) = GameSession::spawn(game, rng);

    let mut tasks = Vec::new();
    for cell in targets {
        let handle = session.clone();
        tasks.push(tokio::spawn(async move { handle.fire(cell).await }));
    }
    let mut destroyed = 0;
    for task in tasks {
        if task.await??.is_destroyed() {
            destroyed += 1;
        }
    }
    assert_eq!(destroyed, ships);
    assert_eq!(session.status().await?, GameStatus::Won);

    drop(session);
    let game = worker.await?;
    assert!(game.ships().iter().all(|s| s.is_destroyed()));
    Ok(())
}

#[tokio::test]
async fn test_restart_through_session() -> anyhow::Result<()> {
    let (game, rng) = game(13);
    let (session, _worker) = GameSession::spawn(game, rng);
    let water = session
        .snapshot()
        .await?
        .cells
        .iter()
        .position(|s| *s == CellState::Empty)
        .unwrap();
    session.fire(water).await?;
    let fresh = session.restart().await?;
    assert_eq!(fresh.remaining_shots, 30);
    assert_eq!(fresh.status, GameStatus::InProgress);
    assert!(fresh.cells.iter().all(|s| !s.is_shot()));
    Ok(())
}
