//! The boundary between the game core and whatever shows it to a person
//!
//! A console, a browser or a test harness implements [`Presentation`].
//! The core only asks for raw lines of text and reports what happened.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::participant::Participant;
use crate::session::RoundResult;

/// What a requested line of text is for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// The human's move for this round.
    Move,
    /// Whether to play another session.
    Replay,
}

pub trait Presentation {
    /// Failure of the boundary itself, e.g. input closed
    type Error: std::error::Error + Send + Sync + 'static;

    /// Block until a line of text is available
    fn request_token(&mut self, prompt: Prompt) -> Result<String, Self::Error>;

    fn report_invalid_input(&mut self, reason: &GameError);

    fn report_round_outcome(
        &mut self,
        round: &RoundResult,
        human: &Participant,
        computer: &Participant,
    );

    fn report_session_winner(&mut self, winner: &Participant);

    fn report_goodbye(&mut self);

    fn display_text(&mut self, text: &str);

    fn report_welcome(&mut self, _human: &Participant, _computer: &Participant) {}

    /// Called before each round
    fn report_scoreboard(
        &mut self,
        _human: &Participant,
        _computer: &Participant,
        _winning_score: u32,
    ) {
    }

    /// Called once a session is won
    fn report_move_history(&mut self, _human: &Participant, _computer: &Participant) {}
}
