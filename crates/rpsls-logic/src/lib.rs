//! Game logic for Rock, Paper, Scissors, Spock, Lizard
//!
//! A human plays a computer persona until one of them reaches the winning
//! score, and may then play again. Everything that talks to a person goes
//! through [`Presentation`]. This crate is compiled to:
//! - Native (for the console program)
//! - WASM (for a browser front end)

mod error;
mod moves;
mod participant;
mod persona;
mod presentation;
mod random;
mod resolver;
mod session;

#[cfg(test)]
mod test_support;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::GameError;
pub use moves::{outcome_message, Move, MoveKind};
pub use participant::{Controller, Participant};
pub use persona::{
    execute_policy, Persona, Policy, UnknownPersona, IMITATION_THRESHOLD, OPENING_THRESHOLD,
};
pub use presentation::{Presentation, Prompt};
pub use random::{Randomness, SeededRng};
pub use resolver::{resolve, Outcome, RoundVerdict};
pub use session::{
    parse_replay, GameSession, HistoryPolicy, Phase, RoundResult, SessionConfig, SessionResult,
    Side, DEFAULT_WINNING_SCORE,
};
