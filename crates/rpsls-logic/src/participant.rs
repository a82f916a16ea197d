//! Players: identity, score, and move history

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::moves::{Move, MoveKind};
use crate::persona::Persona;
use crate::presentation::{Presentation, Prompt};
use crate::random::Randomness;

/// Who decides a participant's moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Moves come from the presentation boundary.
    Human,
    /// Moves come from a persona policy.
    Computer(Persona),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    controller: Controller,
    score: u32,
    history: Vec<Move>,
    current: Option<Move>,
}

impl Participant {
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name.into(), Controller::Human)
    }

    /// A computer participant named after its persona
    pub fn computer(persona: Persona) -> Self {
        Self::new(persona.name().to_string(), Controller::Computer(persona))
    }

    fn new(name: String, controller: Controller) -> Self {
        Self {
            name,
            controller,
            score: 0,
            history: Vec::new(),
            current: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn persona(&self) -> Option<Persona> {
        match self.controller {
            Controller::Human => None,
            Controller::Computer(persona) => Some(persona),
        }
    }

    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves made so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Move made in the current round, if any
    pub fn current(&self) -> Option<Move> {
        self.current
    }

    /// Canonical names of every past move
    pub fn history_names(&self) -> Vec<&'static str> {
        self.history.iter().map(|m| m.kind().name()).collect()
    }

    /// Produce this round's move and commit it
    ///
    /// Humans are asked through `presenter` until they type a valid token;
    /// there is no retry limit. Computers never fail.
    pub fn choose<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> Result<Move, P::Error>
    where
        P: Presentation + ?Sized,
        R: Randomness,
    {
        let kind = match self.controller {
            Controller::Human => loop {
                let token = presenter.request_token(Prompt::Move)?;
                match MoveKind::parse(&token) {
                    Ok(kind) => break kind,
                    Err(err) => presenter.report_invalid_input(&err),
                }
            },
            Controller::Computer(persona) => persona.choose(&self.history, rng),
        };
        Ok(self.commit(kind))
    }

    /// Record a move: it becomes current and is appended to history
    pub fn commit(&mut self, kind: MoveKind) -> Move {
        let mv = Move::new(kind);
        self.current = Some(mv);
        self.history.push(mv);
        debug!(participant = %self.name, %kind, moves = self.history.len(), "move committed");
        mv
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Forget past moves, as at the start of a fresh session
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.current = None;
    }
}
