//! Player input: the trait the orchestrator reads commands from.

mod human;

pub use human::HumanPlayer;

use anyhow::Result;
use noughts_core::{Board, Position};

/// What a player wants to happen next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Move(Position),
    /// Abandon the current game and start a new one.
    Reset,
    /// Leave the program.
    Quit,
    /// A line that matched no command, kept verbatim.
    Unrecognized(String),
}

impl Command {
    /// Parses one line of player input.
    ///
    /// Accepts `1`-`9` (the numbers shown on the board), cell labels such
    /// as `center`, `r`/`reset` and `q`/`quit`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "r" | "reset" => return Some(Command::Reset),
            "q" | "quit" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        if let Ok(n) = input.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Command::Move);
        }

        Position::from_label(input).map(Command::Move)
    }
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next command from this player.
    ///
    /// Returns `Ok(None)` once the player has nothing more to say, such as
    /// when its input stream closes.
    async fn next_command(&mut self, board: &Board) -> Result<Option<Command>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(Command::parse("1"), Some(Command::Move(Position::TopLeft)));
        assert_eq!(Command::parse(" 5 "), Some(Command::Move(Position::Center)));
        assert_eq!(
            Command::parse("9"),
            Some(Command::Move(Position::BottomRight))
        );
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("10"), None);
    }

    #[test]
    fn test_parse_labels_and_controls() {
        assert_eq!(
            Command::parse("top-right"),
            Some(Command::Move(Position::TopRight))
        );
        assert_eq!(Command::parse("R"), Some(Command::Reset));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("hello"), None);
    }
}
