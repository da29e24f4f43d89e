//! Noughts - tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts::{GameConfig, HumanPlayer, Orchestrator};
use noughts_core::{Engine, Session};
use tokio::io::{BufReader, stdin};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(think_ms) = cli.think_ms {
        config = config.with_think_delay_ms(think_ms);
    }
    info!(?config, "Starting noughts");

    let human = HumanPlayer::new(config.human_name().clone(), BufReader::new(stdin()));
    let session = Session::new(Engine::default());
    let computer = session.computer();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(noughts::run_renderer(event_rx));

    let mut orchestrator = Orchestrator::new(&config, session, Box::new(human), event_tx);
    let outcomes = orchestrator.run().await?;
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;

    println!(
        "{}",
        noughts::summary(
            &outcomes,
            computer,
            config.human_name(),
            config.computer_name()
        )
    );
    Ok(())
}
