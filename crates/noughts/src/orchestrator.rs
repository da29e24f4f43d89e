//! Game orchestration between the human and the engine.

use crate::config::GameConfig;
use crate::players::{Command, Player};
use anyhow::Result;
use noughts_core::{Board, Move, MoveError, Outcome, Phase, Player as Mark, Session};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board updated.
    BoardChanged(Board),
    /// Waiting for the human to move.
    AwaitingMove {
        /// Name of the human player.
        player: String,
        /// Mark the human plays.
        mark: Mark,
    },
    /// Computer is thinking.
    ComputerThinking {
        /// Name of the computer player.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// The move applied to the board.
        mv: Move,
    },
    /// A move was rejected; the board is unchanged.
    MoveRejected(MoveError),
    /// A line of input matched no command.
    InputRejected(String),
    /// Game ended.
    GameOver {
        /// Final verdict.
        outcome: Outcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
    /// A new game started.
    Reset,
}

/// Drives a [`Session`] from human commands and engine replies.
pub struct Orchestrator {
    session: Session,
    human: Box<dyn Player>,
    computer_name: String,
    think_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        config: &GameConfig,
        session: Session,
        human: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            computer_name: config.computer_name().clone(),
            think_delay: config.think_delay(),
            event_tx,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs games until the human quits or their input ends.
    ///
    /// Returns the outcomes of the games that finished, in order.
    #[instrument(skip(self), fields(human = %self.human.name()))]
    pub async fn run(&mut self) -> Result<Vec<Outcome>> {
        info!("Starting game orchestration");
        let mut finished = Vec::new();
        self.announce_turn()?;

        loop {
            if self.session.phase() == Phase::ComputerTurn {
                self.computer_turn(&mut finished).await?;
                continue;
            }

            debug!("Waiting for human command");
            let Some(command) = self.human.next_command(self.session.board()).await? else {
                info!("Human input closed");
                break;
            };

            match command {
                Command::Quit => {
                    info!("Human quit");
                    break;
                }
                Command::Reset => {
                    self.session.reset();
                    self.event_tx.send(GameEvent::Reset)?;
                    self.announce_turn()?;
                }
                Command::Unrecognized(input) => {
                    debug!(%input, "Unrecognized input");
                    self.event_tx.send(GameEvent::InputRejected(input))?;
                }
                Command::Move(position) => match self.session.play_human(position) {
                    Ok(_) => {
                        let mv = Move::new(self.session.human(), position);
                        self.after_move(self.human.name().to_string(), mv, &mut finished)?;
                    }
                    Err(e) => {
                        debug!(error = %e, "Move rejected");
                        self.event_tx.send(GameEvent::MoveRejected(e))?;
                    }
                },
            }
        }

        info!(games = finished.len(), "Orchestration finished");
        Ok(finished)
    }

    async fn computer_turn(&mut self, finished: &mut Vec<Outcome>) -> Result<()> {
        self.event_tx.send(GameEvent::ComputerThinking {
            player: self.computer_name.clone(),
        })?;
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let mv = self.session.play_computer()?;
        self.after_move(self.computer_name.clone(), mv, finished)
    }

    fn after_move(
        &mut self,
        player: String,
        mv: Move,
        finished: &mut Vec<Outcome>,
    ) -> Result<()> {
        self.event_tx.send(GameEvent::MoveMade { player, mv })?;
        self.announce_turn()?;

        if let Phase::GameOver(outcome) = self.session.phase() {
            finished.push(outcome);
        }
        Ok(())
    }

    /// Publishes the board followed by what happens next.
    fn announce_turn(&self) -> Result<()> {
        self.event_tx.send(GameEvent::BoardChanged(self.session.board().clone()))?;

        match self.session.phase() {
            Phase::HumanTurn => self.event_tx.send(GameEvent::AwaitingMove {
                player: self.human.name().to_string(),
                mark: self.session.human(),
            })?,
            Phase::ComputerTurn => {}
            Phase::GameOver(outcome) => {
                let winner = outcome.winner().map(|mark| {
                    if mark == self.session.human() {
                        self.human.name().to_string()
                    } else {
                        self.computer_name.clone()
                    }
                });
                self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
            }
        }
        Ok(())
    }
}
