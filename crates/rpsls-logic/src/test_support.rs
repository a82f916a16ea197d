//! Scripted presentation used by the unit tests

use std::collections::VecDeque;

use crate::error::GameError;
use crate::participant::Participant;
use crate::presentation::{Presentation, Prompt};
use crate::session::RoundResult;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Prompted(Prompt),
    Invalid(GameError),
    Round(RoundResult),
    Winner(String),
    Goodbye,
    Text(String),
    Welcome,
    Scoreboard(u32, u32),
    MoveHistory(Vec<&'static str>, Vec<&'static str>),
}

#[derive(Debug, thiserror::Error)]
#[error("script ran out of input at {0:?} prompt")]
pub struct ScriptExhausted(pub Prompt);

/// Answers prompts from a fixed queue and records every report
pub struct ScriptedPresenter {
    tokens: VecDeque<String>,
    events: Vec<Event>,
}

impl ScriptedPresenter {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn invalid_inputs(&self) -> Vec<&GameError> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Invalid(err) => Some(err),
                _ => None,
            })
            .collect()
    }

    pub fn rounds(&self) -> Vec<&RoundResult> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Round(round) => Some(round),
                _ => None,
            })
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl Presentation for ScriptedPresenter {
    type Error = ScriptExhausted;

    fn request_token(&mut self, prompt: Prompt) -> Result<String, Self::Error> {
        self.events.push(Event::Prompted(prompt));
        self.tokens.pop_front().ok_or(ScriptExhausted(prompt))
    }

    fn report_invalid_input(&mut self, reason: &GameError) {
        self.events.push(Event::Invalid(reason.clone()));
    }

    fn report_round_outcome(
        &mut self,
        round: &RoundResult,
        _human: &Participant,
        _computer: &Participant,
    ) {
        self.events.push(Event::Round(round.clone()));
    }

    fn report_session_winner(&mut self, winner: &Participant) {
        self.events.push(Event::Winner(winner.name().to_string()));
    }

    fn report_goodbye(&mut self) {
        self.events.push(Event::Goodbye);
    }

    fn display_text(&mut self, text: &str) {
        self.events.push(Event::Text(text.to_string()));
    }

    fn report_welcome(&mut self, _human: &Participant, _computer: &Participant) {
        self.events.push(Event::Welcome);
    }

    fn report_scoreboard(&mut self, human: &Participant, computer: &Participant, _winning_score: u32) {
        self.events
            .push(Event::Scoreboard(human.score(), computer.score()));
    }

    fn report_move_history(&mut self, human: &Participant, computer: &Participant) {
        self.events
            .push(Event::MoveHistory(human.history_names(), computer.history_names()));
    }
}
