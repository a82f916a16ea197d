//! Session orchestration: rounds, scores, win condition and replay
//!
//! Phases follow the game's lifecycle:
//! `WelcomingIntro -> RoundInProgress <-> RoundResolved -> SessionWon
//!  -> AwaitingReplayDecision -> (RoundInProgress | Finished)`.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GameError;
use crate::moves::Move;
use crate::participant::Participant;
use crate::presentation::{Presentation, Prompt};
use crate::random::Randomness;
use crate::resolver::{Outcome, RoundVerdict};

/// Default score a participant must reach to win a session
pub const DEFAULT_WINNING_SCORE: NonZeroU32 = match NonZeroU32::new(5) {
    Some(score) => score,
    None => panic!("winning score must be positive"),
};

/// What happens to move histories when a new session starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryPolicy {
    /// Histories are session-scoped.
    #[default]
    ClearOnReplay,
    /// Histories accumulate across every session of the game.
    Retain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// A zero threshold would end every session before its first round
    pub winning_score: NonZeroU32,
    pub history_policy: HistoryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            history_policy: HistoryPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    WelcomingIntro,
    RoundInProgress,
    RoundResolved,
    SessionWon,
    AwaitingReplayDecision,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    /// `AWins` means the human won
    pub outcome: Outcome,
    pub message: Option<String>,
    /// Computer persona's remark on a round it won
    pub quip: Option<String>,
    pub human_score: u32,
    pub computer_score: u32,
}

impl RoundResult {
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Tie => None,
            Outcome::AWins => Some(Side::Human),
            Outcome::BWins => Some(Side::Computer),
        }
    }
}

/// Result of a complete session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub session: u32,
    pub rounds: Vec<RoundResult>,
    pub winner: Side,
    pub human_score: u32,
    pub computer_score: u32,
}

/// Validate a yes/no answer to the replay prompt
pub fn parse_replay(token: &str) -> Result<bool, GameError> {
    match token.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(GameError::InvalidReplayToken(token.trim().to_string())),
    }
}

/// A human against a computer, repeated until the human stops
pub struct GameSession<R> {
    human: Participant,
    computer: Participant,
    config: SessionConfig,
    rng: R,
    phase: Phase,
    session: u32,
    round: u32,
    rounds: Vec<RoundResult>,
    winner: Option<Side>,
}

impl<R: Randomness> GameSession<R> {
    pub fn new(human: Participant, computer: Participant, config: SessionConfig, rng: R) -> Self {
        Self {
            human,
            computer,
            config,
            rng,
            phase: Phase::WelcomingIntro,
            session: 0,
            round: 0,
            rounds: Vec::new(),
            winner: None,
        }
    }

    pub fn human(&self) -> &Participant {
        &self.human
    }

    pub fn computer(&self) -> &Participant {
        &self.computer
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of sessions started so far
    pub fn sessions_played(&self) -> u32 {
        self.session
    }

    /// Run the whole game: welcome, sessions until the human declines, goodbye
    pub fn play<P>(&mut self, presenter: &mut P) -> Result<Vec<SessionResult>, P::Error>
    where
        P: Presentation + ?Sized,
    {
        presenter.report_welcome(&self.human, &self.computer);

        let mut results = Vec::new();
        loop {
            results.push(self.play_session(presenter)?);
            if !self.ask_replay(presenter)? {
                break;
            }
        }

        self.phase = Phase::Finished;
        presenter.report_goodbye();
        info!(sessions = results.len(), "game finished");
        Ok(results)
    }

    /// Play one session from score reset to a winner
    pub fn play_session<P>(&mut self, presenter: &mut P) -> Result<SessionResult, P::Error>
    where
        P: Presentation + ?Sized,
    {
        self.start_session();
        while self.phase != Phase::SessionWon {
            self.play_round(presenter)?;
        }
        Ok(self.finish_session(presenter))
    }

    /// Reset scores (and, per policy, histories) and enter the first round
    pub fn start_session(&mut self) {
        self.session += 1;
        self.round = 0;
        self.rounds.clear();
        self.winner = None;
        self.human.reset_score();
        self.computer.reset_score();
        if self.config.history_policy == HistoryPolicy::ClearOnReplay {
            self.human.clear_history();
            self.computer.clear_history();
        }
        self.phase = Phase::RoundInProgress;
        info!(
            session = self.session,
            human = %self.human.name(),
            computer = %self.computer.name(),
            winning_score = self.config.winning_score.get(),
            "session started"
        );
    }

    /// Play one round: human chooses, then computer, then resolve and score
    ///
    /// Outside a running session (before the first, or once one is won) this
    /// starts a new session first.
    pub fn play_round<P>(&mut self, presenter: &mut P) -> Result<RoundResult, P::Error>
    where
        P: Presentation + ?Sized,
    {
        if self.phase != Phase::RoundInProgress {
            self.start_session();
        }
        self.round += 1;
        presenter.report_scoreboard(&self.human, &self.computer, self.config.winning_score.get());

        let human_move = self.human.choose(presenter, &mut self.rng)?;
        let computer_move = self.computer.choose(presenter, &mut self.rng)?;

        let verdict = RoundVerdict::of(human_move, computer_move);
        match verdict.outcome {
            Outcome::Tie => {}
            Outcome::AWins => self.human.award_point(),
            Outcome::BWins => self.computer.award_point(),
        }
        self.phase = Phase::RoundResolved;

        let quip = match (verdict.outcome, self.computer.persona()) {
            (Outcome::BWins, Some(persona)) => Some(persona.quip(&mut self.rng).to_string()),
            _ => None,
        };
        let result = RoundResult {
            round: self.round,
            human_move,
            computer_move,
            outcome: verdict.outcome,
            message: verdict.message,
            quip,
            human_score: self.human.score(),
            computer_score: self.computer.score(),
        };
        debug!(
            session = self.session,
            round = result.round,
            human = %human_move,
            computer = %computer_move,
            outcome = ?result.outcome,
            human_score = result.human_score,
            computer_score = result.computer_score,
            "round resolved"
        );
        presenter.report_round_outcome(&result, &self.human, &self.computer);

        let target = self.config.winning_score.get();
        self.winner = result.winner().filter(|side| match side {
            Side::Human => result.human_score >= target,
            Side::Computer => result.computer_score >= target,
        });
        self.rounds.push(result.clone());
        self.phase = if self.winner.is_some() {
            Phase::SessionWon
        } else {
            Phase::RoundInProgress
        };
        Ok(result)
    }

    /// Side that won the round which reached the threshold, if any
    pub fn session_winner(&self) -> Option<Side> {
        self.winner
    }

    fn finish_session<P>(&mut self, presenter: &mut P) -> SessionResult
    where
        P: Presentation + ?Sized,
    {
        let winner = self.session_winner().unwrap_or(Side::Computer);
        let participant = match winner {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        };
        info!(
            session = self.session,
            winner = %participant.name(),
            rounds = self.round,
            human_score = self.human.score(),
            computer_score = self.computer.score(),
            "session won"
        );
        presenter.report_session_winner(participant);
        if winner == Side::Computer {
            if let Some(persona) = self.computer.persona() {
                presenter.display_text(persona.quip(&mut self.rng));
            }
        }
        presenter.report_move_history(&self.human, &self.computer);

        SessionResult {
            session: self.session,
            rounds: std::mem::take(&mut self.rounds),
            winner,
            human_score: self.human.score(),
            computer_score: self.computer.score(),
        }
    }

    /// Ask until a yes/no answer arrives; no retry cap
    fn ask_replay<P>(&mut self, presenter: &mut P) -> Result<bool, P::Error>
    where
        P: Presentation + ?Sized,
    {
        self.phase = Phase::AwaitingReplayDecision;
        loop {
            let token = presenter.request_token(Prompt::Replay)?;
            match parse_replay(&token) {
                Ok(again) => return Ok(again),
                Err(err) => presenter.report_invalid_input(&err),
            }
        }
    }
}
