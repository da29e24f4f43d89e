//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the session share one verdict.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are scanned in [`WIN_LINES`] order and the first complete line
/// decides the winner. A full board without a line is a draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
