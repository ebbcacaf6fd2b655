#![cfg(feature = "std")]

//! Background worker owning a [`Game`].
//!
//! A presentation layer that animates while a shot is computed hands the game
//! to a [`GameSession`]. Commands queue on a channel and the worker handles
//! them one at a time, so there is never more than one shot in flight.

use anyhow::anyhow;
use log::debug;
use rand::rngs::SmallRng;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::common::ShotError;
use crate::game::{Game, GameSnapshot, GameStatus, ShotOutcome};

/// Pending commands per session before senders wait.
const COMMAND_BUFFER: usize = 16;

/// Engine operations as seen from an async caller.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn fire(&self, cell: usize) -> anyhow::Result<ShotOutcome>;
    async fn snapshot(&self) -> anyhow::Result<GameSnapshot>;
    async fn restart(&self) -> anyhow::Result<GameSnapshot>;

    async fn status(&self) -> anyhow::Result<GameStatus> {
        Ok(self.snapshot().await?.status)
    }
}

enum Command {
    Fire {
        cell: usize,
        reply: oneshot::Sender<Result<ShotOutcome, ShotError>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
    Restart {
        reply: oneshot::Sender<GameSnapshot>,
    },
}

/// Spawns the worker task.
pub struct GameSession;

impl GameSession {
    /// Move `game` into a worker task. `rng` is used for restarts.
    ///
    /// The task ends once every handle is dropped and yields the game back.
    pub fn spawn(game: Game, rng: SmallRng) -> (SessionHandle, JoinHandle<Game>) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(run(game, rng, rx));
        (SessionHandle { commands: tx }, task)
    }
}

async fn run(mut game: Game, mut rng: SmallRng, mut rx: mpsc::Receiver<Command>) -> Game {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Fire { cell, reply } => {
                let _ = reply.send(game.fire(cell));
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(game.snapshot());
            }
            Command::Restart { reply } => {
                game.restart(&mut rng);
                let _ = reply.send(game.snapshot());
            }
        }
    }
    debug!("all session handles dropped, worker exiting");
    game
}

/// Cloneable sender side of a session.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
}

impl SessionHandle {
    async fn request<T>(
        &self,
        cmd: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> anyhow::Result<T> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(cmd(reply))
            .await
            .map_err(|_| anyhow!("game session closed"))?;
        rx.await.map_err(|_| anyhow!("game session dropped the request"))
    }
}

#[async_trait::async_trait]
impl GameApi for SessionHandle {
    async fn fire(&self, cell: usize) -> anyhow::Result<ShotOutcome> {
        let outcome = self.request(|reply| Command::Fire { cell, reply }).await??;
        Ok(outcome)
    }

    async fn snapshot(&self) -> anyhow::Result<GameSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    async fn restart(&self) -> anyhow::Result<GameSnapshot> {
        self.request(|reply| Command::Restart { reply }).await
    }
}
