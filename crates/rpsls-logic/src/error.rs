//! Input validation errors
//!
//! Both kinds are recovered locally by re-prompting. Nothing in the core is
//! fatal: the rule tables are fixed and cannot fail to look up.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not a move; type a name or a shorthand (r, p, sc, sp, l)")]
    InvalidMoveToken(String),

    #[error("'{0}' is not an answer; type yes/y or no/n")]
    InvalidReplayToken(String),
}
