//! End-to-end games driven by scripted human input.

use noughts::{GameConfig, GameEvent, HumanPlayer, Orchestrator};
use noughts_core::{Board, Move, MoveError, Outcome, Phase, Player, Position, Session};
use tokio::io::BufReader;
use tokio::sync::mpsc;

struct Played {
    outcomes: Vec<Outcome>,
    events: Vec<GameEvent>,
    session: Session,
}

async fn run_script(script: &'static str) -> Played {
    let config = GameConfig::default().with_think_delay_ms(0);
    let human = HumanPlayer::new("Tester", BufReader::new(script.as_bytes()));
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator =
        Orchestrator::new(&config, Session::default(), Box::new(human), event_tx);
    let outcomes = orchestrator.run().await.unwrap();
    let session = orchestrator.session().clone();
    drop(orchestrator);

    let mut events = Vec::new();
    while let Some(event) = event_rx.recv().await {
        events.push(event);
    }
    Played {
        outcomes,
        events,
        session,
    }
}

async fn play(script: &'static str) -> (Vec<Outcome>, Vec<GameEvent>) {
    let played = run_script(script).await;
    (played.outcomes, played.events)
}

#[tokio::test]
async fn test_blunder_loses_then_reset_starts_fresh() {
    let (outcomes, events) = play("1\n2\n9\nr\n5\nq\n").await;

    assert_eq!(outcomes, vec![Outcome::Win(Player::O)]);
    assert!(events.contains(&GameEvent::GameOver {
        outcome: Outcome::Win(Player::O),
        winner: Some("Computer".to_string()),
    }));
    assert!(events.contains(&GameEvent::Reset));
    assert!(events.contains(&GameEvent::MoveMade {
        player: "Tester".to_string(),
        mv: Move::new(Player::X, Position::Center),
    }));
    assert!(events.contains(&GameEvent::MoveMade {
        player: "Computer".to_string(),
        mv: Move::new(Player::O, Position::BottomLeft),
    }));
}

#[tokio::test]
async fn test_occupied_square_is_rejected() {
    let (outcomes, events) = play("5\n5\nq\n").await;

    let rejected = GameEvent::MoveRejected(MoveError::IllegalMove(Position::Center));
    assert!(outcomes.is_empty());
    assert!(events.contains(&rejected));
}

#[tokio::test]
async fn test_unrecognized_input_is_reported_as_event() {
    let played = run_script("hello\nq\n").await;

    let rejected = GameEvent::InputRejected("hello".to_string());
    assert!(played.outcomes.is_empty());
    assert!(played.events.contains(&rejected));
    assert_eq!(played.session.board(), &Board::new());
    assert_eq!(played.session.phase(), Phase::HumanTurn);
}

#[tokio::test]
async fn test_unrecognized_input_does_not_end_turn() {
    let played = run_script("middle\n5\nq\n").await;

    let rejections = played
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::InputRejected(_)))
        .count();
    assert_eq!(rejections, 1);
    assert_eq!(played.session.board().count(Player::X), 1);
    assert_eq!(played.session.board().count(Player::O), 1);
}

#[tokio::test]
async fn test_moves_after_game_over_are_rejected() {
    let (_, events) = play("1\n2\n9\n4\n").await;

    assert!(events.contains(&GameEvent::MoveRejected(MoveError::GameOver)));
}

#[tokio::test]
async fn test_closed_input_ends_run() {
    let (outcomes, events) = play("").await;

    assert!(outcomes.is_empty());
    assert!(matches!(events.first(), Some(GameEvent::BoardChanged(_))));
    assert!(matches!(
        events.get(1),
        Some(GameEvent::AwaitingMove {
            mark: Player::X,
            ..
        })
    ));
}

#[tokio::test]
async fn test_board_events_track_session() {
    let played = run_script("5\nq\n").await;

    let last_board = played
        .events
        .iter()
        .rev()
        .find_map(|e| match e {
            GameEvent::BoardChanged(board) => Some(board.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(&last_board, played.session.board());
    assert_eq!(last_board, "O.. .X. ...".parse::<Board>().unwrap());
    assert_eq!(played.session.phase(), Phase::HumanTurn);
}
