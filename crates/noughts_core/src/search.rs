//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The 3x3 game tree is small enough to search to the end from any
//! position, so there is no heuristic evaluation and no depth limit.
//! Scores are taken from the computer's point of view and shaded by
//! depth so that quicker wins and slower losses are preferred:
//!
//! - computer win: `10 - depth`
//! - opponent win: `depth - 10`
//! - draw: `0`
//!
//! `depth` counts plies played after the candidate move under
//! consideration, so it is 0 for the position the candidate creates.

use crate::rules::evaluate;
use crate::{Board, MoveError, Outcome, Player, Position, Square};
use tracing::{debug, error, instrument};

/// Base score of a decided game before depth shading.
const WIN_SCORE: i32 = 10;

/// Bound wider than any reachable score.
const INF: i32 = i32::MAX;

/// Counters collected during one search, reported at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Perfect-play move selector.
///
/// The engine holds no state between calls; every [`Engine::best_move`]
/// call searches from scratch on a private copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    computer: Player,
}

impl Engine {
    /// Creates an engine playing `computer`; the other mark minimizes.
    pub fn new(computer: Player) -> Self {
        Self { computer }
    }

    /// The mark the engine plays.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Chooses the optimal empty square for the computer.
    ///
    /// Every empty square is tried in ascending order and scored by a
    /// full search with the opponent to move. The strictly highest score
    /// wins, so ties go to the lowest index.
    ///
    /// Fails with [`MoveError::NoLegalMove`] if the board is full or
    /// already decided; calling it there is a caller bug.
    #[instrument(skip(self, board), fields(computer = %self.computer))]
    pub fn best_move(&self, board: &Board) -> Result<Position, MoveError> {
        let outcome = evaluate(board);
        if outcome.is_terminal() {
            error!(%outcome, "Engine invoked on a finished board");
            return Err(MoveError::NoLegalMove);
        }

        let mut work = board.clone();
        let mut stats = SearchStats::default();
        let mut best: Option<(Position, i32)> = None;

        for pos in board.empty_cells() {
            work.set(pos, Square::Occupied(self.computer));
            let score = self.minimax(&mut work, 0, -INF, INF, false, &mut stats);
            work.clear(pos);

            debug!(position = %pos, score, "Scored candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (position, score) = best.ok_or(MoveError::NoLegalMove)?;
        debug!(
            position = %position,
            score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Search complete"
        );
        Ok(position)
    }

    /// Scores a finished position, or `None` while play continues.
    fn terminal_score(&self, outcome: Outcome, depth: i32) -> Option<i32> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(0),
            Outcome::Win(player) if player == self.computer => Some(WIN_SCORE - depth),
            Outcome::Win(_) => Some(depth - WIN_SCORE),
        }
    }

    /// Recursive alpha-beta search.
    ///
    /// Every mark placed on `board` is cleared before the next sibling is
    /// tried, including on cutoff, so the board is restored on return.
    fn minimax(
        &self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if let Some(score) = self.terminal_score(evaluate(board), depth) {
            return score;
        }

        let side = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut best = if maximizing { -INF } else { INF };

        for pos in board.empty_cells() {
            board.set(pos, Square::Occupied(side));
            let score = self.minimax(board, depth + 1, alpha, beta, !maximizing, stats);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// The computer plays O, answering a human who opens as X.
impl Default for Engine {
    fn default() -> Self {
        Self::new(Player::O)
    }
}
