//! Move taxonomy and the fixed rule tables
//!
//! The five kinds form a tournament: every kind beats exactly two others
//! and loses to exactly two others. The table is checked at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the five choices a participant can make
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Rock,
    Paper,
    Scissors,
    Spock,
    Lizard,
}

/// Kinds defeated by each kind, indexed by discriminant.
const BEATS: [[MoveKind; 2]; 5] = [
    [MoveKind::Scissors, MoveKind::Lizard], // rock
    [MoveKind::Rock, MoveKind::Spock],      // paper
    [MoveKind::Paper, MoveKind::Lizard],    // scissors
    [MoveKind::Scissors, MoveKind::Rock],   // spock
    [MoveKind::Paper, MoveKind::Spock],     // lizard
];

impl MoveKind {
    /// All kinds, in menu order
    pub const ALL: [MoveKind; 5] = [
        MoveKind::Rock,
        MoveKind::Paper,
        MoveKind::Scissors,
        MoveKind::Spock,
        MoveKind::Lizard,
    ];

    /// Canonical lowercase name, used for display and comparison
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Rock => "rock",
            MoveKind::Paper => "paper",
            MoveKind::Scissors => "scissors",
            MoveKind::Spock => "spock",
            MoveKind::Lizard => "lizard",
        }
    }

    /// Input shorthand
    pub const fn short_code(self) -> &'static str {
        match self {
            MoveKind::Rock => "r",
            MoveKind::Paper => "p",
            MoveKind::Scissors => "sc",
            MoveKind::Spock => "sp",
            MoveKind::Lizard => "l",
        }
    }

    /// Capitalized name for menus
    pub const fn title(self) -> &'static str {
        match self {
            MoveKind::Rock => "Rock",
            MoveKind::Paper => "Paper",
            MoveKind::Scissors => "Scissors",
            MoveKind::Spock => "Spock",
            MoveKind::Lizard => "Lizard",
        }
    }

    /// The two kinds this kind defeats
    pub const fn defeats(self) -> [MoveKind; 2] {
        BEATS[self as usize]
    }

    /// True iff `other` is in this kind's defeat-set
    pub const fn beats(self, other: MoveKind) -> bool {
        let [x, y] = self.defeats();
        x as u8 == other as u8 || y as u8 == other as u8
    }

    /// Parse a full name or short code, case-insensitive, whitespace trimmed
    pub fn parse(token: &str) -> Result<MoveKind, GameError> {
        let wanted = token.trim().to_lowercase();
        MoveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted || kind.short_code() == wanted)
            .ok_or_else(|| GameError::InvalidMoveToken(token.trim().to_string()))
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveKind::parse(s)
    }
}

/// Flavor text for a winning edge
///
/// Returns `None` when `winner` does not beat `loser`; resolver output never
/// produces such a pair.
pub fn outcome_message(winner: MoveKind, loser: MoveKind) -> Option<&'static str> {
    use MoveKind::*;

    let message = match (winner, loser) {
        (Rock, Lizard) => "ROCK crushes LIZARD",
        (Rock, Scissors) => "ROCK crushes SCISSORS",
        (Paper, Rock) => "PAPER covers ROCK",
        (Paper, Spock) => "PAPER disproves SPOCK",
        (Scissors, Paper) => "SCISSORS cuts PAPER",
        (Scissors, Lizard) => "SCISSORS decapitates LIZARD",
        (Spock, Scissors) => "SPOCK smashes SCISSORS",
        (Spock, Rock) => "SPOCK vaporizes ROCK",
        (Lizard, Paper) => "LIZARD eats PAPER",
        (Lizard, Spock) => "LIZARD poisons SPOCK",
        _ => return None,
    };
    Some(message)
}

const fn is_tournament() -> bool {
    let mut a = 0;
    while a < MoveKind::ALL.len() {
        let x = MoveKind::ALL[a];
        if x as usize != a {
            return false;
        }
        let (mut wins, mut losses) = (0, 0);
        let mut b = 0;
        while b < MoveKind::ALL.len() {
            let y = MoveKind::ALL[b];
            let (xy, yx) = (x.beats(y), y.beats(x));
            if a == b {
                if xy {
                    return false;
                }
            } else if xy == yx {
                return false;
            } else if xy {
                wins += 1;
            } else {
                losses += 1;
            }
            b += 1;
        }
        if wins != 2 || losses != 2 {
            return false;
        }
        a += 1;
    }
    true
}

const _: () = assert!(is_tournament(), "beats table is not a 5-kind tournament");

/// A kind chosen by a participant for one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move {
    kind: MoveKind,
}

impl Move {
    pub fn new(kind: MoveKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }
}

impl From<MoveKind> for Move {
    fn from(kind: MoveKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
