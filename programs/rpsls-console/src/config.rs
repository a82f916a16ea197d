//! Command-line configuration

use std::num::NonZeroU32;

use clap::Parser;
use rpsls_logic::{HistoryPolicy, Persona, SessionConfig, DEFAULT_WINNING_SCORE};

/// Rock, Paper, Scissors, Spock, Lizard against a computer persona
#[derive(Debug, Parser)]
#[command(name = "rpsls", version, about)]
pub struct Args {
    /// Your name; asked for when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Score needed to win a session
    #[arg(long, default_value_t = DEFAULT_WINNING_SCORE)]
    pub winning_score: NonZeroU32,

    /// Opponent: R2D2, Hal, Chappie, Sonny or "Number 5"; random when omitted
    #[arg(long)]
    pub persona: Option<Persona>,

    /// Seed for the computer's choices, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep move histories when playing again
    #[arg(long)]
    pub keep_history: bool,

    /// Clear the screen before every round
    #[arg(long)]
    pub clear: bool,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            winning_score: self.winning_score,
            history_policy: if self.keep_history {
                HistoryPolicy::Retain
            } else {
                HistoryPolicy::ClearOnReplay
            },
        }
    }

    /// Name from the command line, if it is not blank
    pub fn player_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
