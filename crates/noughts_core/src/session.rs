//! Per-game state machine for a human playing the engine.
//!
//! A [`Session`] owns the board and whose turn it is, so a front end only
//! forwards "human moved here", "let the computer move" and "reset".

use crate::rules::evaluate;
use crate::{Board, Engine, Move, MoveError, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a session is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    HumanTurn,
    /// The engine should move next.
    ComputerTurn,
    /// The game ended; only a reset leaves this phase.
    GameOver(Outcome),
}

/// One human-versus-engine game.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    phase: Phase,
    engine: Engine,
}

impl Session {
    /// Starts a session with an empty board.
    ///
    /// X always opens, so the human moves first unless the engine plays X.
    #[instrument]
    pub fn new(engine: Engine) -> Self {
        Self {
            board: Board::new(),
            phase: Self::opening_phase(engine),
            engine,
        }
    }

    fn opening_phase(engine: Engine) -> Phase {
        if engine.computer() == Player::X {
            Phase::ComputerTurn
        } else {
            Phase::HumanTurn
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the mark the human plays.
    pub fn human(&self) -> Player {
        self.engine.computer().opponent()
    }

    /// Returns the mark the computer plays.
    pub fn computer(&self) -> Player {
        self.engine.computer()
    }

    /// Returns the verdict on the current board.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// Applies the human's move.
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, position: Position) -> Result<Phase, MoveError> {
        self.check_turn(Phase::HumanTurn, self.human())?;
        if let Err(e) = self.board.place(position, self.human()) {
            debug!(error = %e, "Rejected human move");
            return Err(e);
        }
        self.advance(Phase::ComputerTurn);
        Ok(self.phase)
    }

    /// Lets the engine choose and apply the computer's move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<Move, MoveError> {
        self.check_turn(Phase::ComputerTurn, self.computer())?;
        let position = self.engine.best_move(&self.board)?;
        self.board.place(position, self.computer())?;
        self.advance(Phase::HumanTurn);
        Ok(Move::new(self.computer(), position))
    }

    /// Discards the current game and starts over on an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.board = Board::new();
        self.phase = Self::opening_phase(self.engine);
    }

    fn check_turn(&self, expected: Phase, player: Player) -> Result<(), MoveError> {
        match self.phase {
            Phase::GameOver(_) => Err(MoveError::GameOver),
            phase if phase != expected => Err(MoveError::WrongTurn(player)),
            _ => Ok(()),
        }
    }

    fn advance(&mut self, next: Phase) {
        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(%outcome, "Game over");
            Phase::GameOver(outcome)
        } else {
            next
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}
