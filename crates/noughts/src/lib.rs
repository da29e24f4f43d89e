//! Terminal front end for noughts.
//!
//! Reads human commands, drives a [`noughts_core::Session`] and renders
//! the board after every move.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, HumanPlayer, Orchestrator};
//! use noughts_core::Session;
//! use tokio::io::{stdin, BufReader};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let human = HumanPlayer::new(config.human_name().clone(), BufReader::new(stdin()));
//! let (event_tx, event_rx) = mpsc::unbounded_channel();
//! tokio::spawn(noughts::run_renderer(event_rx));
//!
//! let mut orchestrator =
//!     Orchestrator::new(&config, Session::default(), Box::new(human), event_tx);
//! let outcomes = orchestrator.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod ui;

pub use config::{ConfigError, GameConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Command, HumanPlayer, Player};
pub use ui::{render, run_renderer, summary};
