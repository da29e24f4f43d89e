//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use noughts_core::{MoveError, Outcome, Player};
use tokio::sync::mpsc;
use tracing::debug;

/// Formats one event for the terminal.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::BoardChanged(board) => format!("\n{}\n", board),
        GameEvent::AwaitingMove { player, mark } => {
            format!("{}'s turn ({}). Enter 1-9:", player, mark)
        }
        GameEvent::ComputerThinking { player } => format!("{} is thinking...", player),
        GameEvent::MoveMade { player, mv } => {
            format!("{} played {}", player, mv.position.label())
        }
        GameEvent::MoveRejected(MoveError::GameOver) => {
            "The game is over. Enter r to play again or q to quit.".to_string()
        }
        GameEvent::MoveRejected(e) => format!("{}. Try again.", e),
        GameEvent::InputRejected(input) => {
            format!("Unrecognized input '{}'. Enter 1-9 to move, r to reset, q to quit.", input)
        }
        GameEvent::GameOver { outcome, winner } => {
            let verdict = match (outcome, winner) {
                (Outcome::Draw, _) => "Draw!".to_string(),
                (_, Some(name)) => format!("{} wins!", name),
                (_, None) => outcome.to_string(),
            };
            format!("{} Enter r to play again or q to quit.", verdict)
        }
        GameEvent::Reset => "New game.".to_string(),
    }
}

/// Prints events until the orchestrator drops its sender.
pub async fn run_renderer(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        debug!(?event, "Rendering event");
        println!("{}", render(&event));
    }
}

/// One-line tally of finished games.
pub fn summary(
    outcomes: &[Outcome],
    computer: Player,
    human_name: &str,
    computer_name: &str,
) -> String {
    let wins = |mark: Player| outcomes.iter().filter(|o| o.winner() == Some(mark)).count();
    let draws = outcomes.iter().filter(|o| **o == Outcome::Draw).count();
    format!(
        "Games: {} | {}: {} | {}: {} | Draws: {}",
        outcomes.len(),
        human_name,
        wins(computer.opponent()),
        computer_name,
        wins(computer),
        draws
    )
}
