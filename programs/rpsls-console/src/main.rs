//! `rpsls`: Rock, Paper, Scissors, Spock, Lizard in a terminal

mod config;
mod console;

use std::io;

use anyhow::Context;
use clap::Parser;
use rpsls_logic::{GameSession, Participant, Persona, SeededRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Args;
use crate::console::ConsolePresenter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the game; logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut console = ConsolePresenter::new(io::stdin().lock(), io::stdout().lock(), args.clear);

    let name = match args.player_name() {
        Some(name) => name,
        None => console.ask_name().context("reading player name")?,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = SeededRng::from_u64(seed);
    let persona = args.persona.unwrap_or_else(|| Persona::random(&mut rng));
    tracing::info!(seed, %persona, "starting game");

    let mut game = GameSession::new(
        Participant::human(name),
        Participant::computer(persona),
        args.session_config(),
        rng,
    );
    game.play(&mut console).context("game aborted")?;

    Ok(())
}
