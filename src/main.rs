#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{coord_label, parse_coord, render_grid},
    Game, GameArgs, GameStatus, ShotError, ShotOutcome,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal, reading coordinates such as `B7` from stdin.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Print a generated layout with every ship revealed.
    Show {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game: args } => {
            if let Some(s) = args.seed {
                println!("Using fixed seed: {} (layout will be reproducible)", s);
            }
            let mut rng = args.rng();
            let game = Game::new(args.config(), &mut rng)?;
            play(game)
        }
        Commands::Show { game: args } => {
            let mut rng = args.rng();
            let game = Game::new(args.config(), &mut rng)?;
            print!("{}", render_grid(game.grid(), true));
            let report = game.placement_report();
            println!("{} of {} ships placed", report.placed, report.requested);
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn play(mut game: Game) -> anyhow::Result<()> {
    let side = game.grid_side();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.status().is_over() {
        print!("{}", render_grid(game.grid(), false));
        print!(
            "{}/{} shots left, {} ships afloat > ",
            game.remaining_shots(),
            game.shot_budget(),
            game.ships_remaining()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let Some(cell) = parse_coord(&line, side) else {
            println!("Invalid coordinate '{}'", line.trim());
            continue;
        };
        match game.fire(cell) {
            Ok(ShotOutcome::Miss) => println!("{}: miss", coord_label(cell, side)),
            Ok(ShotOutcome::Hit) => println!("{}: hit!", coord_label(cell, side)),
            Ok(ShotOutcome::Destroyed { ship }) => println!(
                "{}: ship of size {} destroyed!",
                coord_label(cell, side),
                game.ships()[ship].size()
            ),
            Err(e @ ShotError::AlreadyShot { .. }) => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }

    print!("{}", render_grid(game.grid(), true));
    match game.status() {
        GameStatus::Won => println!("Victory! All ships destroyed."),
        GameStatus::Lost => println!("Out of shots. {} ships survived.", game.ships_remaining()),
        _ => {}
    }
    Ok(())
}
