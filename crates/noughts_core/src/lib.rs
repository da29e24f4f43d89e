//! Pure tic-tac-toe logic with a perfect computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine squares, checked placement and search-time undo
//! - **Rules**: win/draw detection over the eight fixed lines
//! - **Engine**: exhaustive minimax with alpha-beta pruning
//! - **Session**: turn state machine for a human playing the engine
//!
//! # Example
//!
//! ```
//! use noughts_core::{Engine, Phase, Position, Session};
//!
//! let mut session = Session::new(Engine::default());
//! assert_eq!(session.play_human(Position::Center)?, Phase::ComputerTurn);
//!
//! let reply = session.play_computer()?;
//! assert_ne!(reply.position, Position::Center);
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use action::Move;
pub use error::{BoardParseError, MoveError};
pub use position::Position;
pub use rules::{WIN_LINES, evaluate};
pub use search::Engine;
pub use session::{Phase, Session};
pub use types::{Board, Outcome, Player, Square};
