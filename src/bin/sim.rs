//! Plays one game by firing at random unshot cells through a session worker
//! and prints a JSON summary.

use clap::Parser;
use rand::seq::IndexedRandom;
use seabattle::prelude::*;
use seabattle::GameArgs;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = cli.game.rng();
    let game = Game::new(cli.game.config(), &mut rng)?;
    let requested = game.requested_ships();
    let placed = game.ships().len();

    let (session, worker) = GameSession::spawn(game, rng.clone());
    let mut shots = 0usize;
    let mut destroyed = 0usize;
    loop {
        let snapshot = session.snapshot().await?;
        if snapshot.status != GameStatus::InProgress {
            break;
        }
        let open: Vec<usize> = snapshot
            .cells
            .iter()
            .enumerate()
            .filter(|(_, state)| !state.is_shot())
            .map(|(cell, _)| cell)
            .collect();
        let Some(&cell) = open.choose(&mut rng) else {
            break;
        };
        if session.fire(cell).await?.is_destroyed() {
            destroyed += 1;
        }
        shots += 1;
    }

    drop(session);
    let game = worker.await?;

    let result = json!({
        "status": game.status(),
        "shots": shots,
        "remaining_shots": game.remaining_shots(),
        "ships_requested": requested,
        "ships_placed": placed,
        "ships_destroyed": destroyed,
        "config": game.config(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
