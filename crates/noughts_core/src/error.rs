//! Error types for moves and board parsing.

use crate::{Player, Position};

/// Error that can occur when applying or choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    IllegalMove(Position),

    /// The engine was asked for a move on a full or finished board.
    #[display("No legal move: the board is full or the game is already decided")]
    NoLegalMove,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),
}

impl std::error::Error for MoveError {}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker or whitespace.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}
