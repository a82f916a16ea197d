//! Round resolution

use serde::{Deserialize, Serialize};

use crate::moves::{outcome_message, Move, MoveKind};

/// Result of comparing two moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    AWins,
    BWins,
}

/// Compare two moves. Pure.
pub fn resolve(a: Move, b: Move) -> Outcome {
    let (ka, kb) = (a.kind(), b.kind());
    if ka == kb {
        return Outcome::Tie;
    }
    debug_assert!(
        ka.beats(kb) != kb.beats(ka),
        "beats relation must be antisymmetric for {} vs {}",
        ka,
        kb
    );
    if ka.beats(kb) {
        Outcome::AWins
    } else {
        Outcome::BWins
    }
}

/// Outcome together with the winning kind and its flavor text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundVerdict {
    pub outcome: Outcome,
    pub winning_kind: Option<MoveKind>,
    pub message: Option<String>,
}

impl RoundVerdict {
    pub fn of(a: Move, b: Move) -> Self {
        let outcome = resolve(a, b);
        let edge = match outcome {
            Outcome::Tie => None,
            Outcome::AWins => Some((a.kind(), b.kind())),
            Outcome::BWins => Some((b.kind(), a.kind())),
        };
        Self {
            outcome,
            winning_kind: edge.map(|(winner, _)| winner),
            message: edge
                .and_then(|(winner, loser)| outcome_message(winner, loser))
                .map(str::to_string),
        }
    }
}
