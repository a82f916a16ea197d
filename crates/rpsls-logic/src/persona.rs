//! Computer personas and their move policies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::moves::{Move, MoveKind};
use crate::random::Randomness;

/// History length up to which Sonny keeps opening with lizard
pub const OPENING_THRESHOLD: usize = 3;

/// History length up to which Number 5 plays at random before imitating itself
pub const IMITATION_THRESHOLD: usize = 4;

/// Decision policy, holding only its own configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Uniform over a fixed 3-kind subset.
    Subset([MoveKind; 3]),
    /// Always the same kind.
    Constant(MoveKind),
    /// Uniform over all five kinds.
    Uniform,
    /// Fixed kind while history length <= threshold, then uniform.
    Opening { kind: MoveKind, threshold: usize },
    /// Uniform while history length <= threshold, then resample own history.
    SelfImitation { threshold: usize },
}

/// Named computer opponent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// Sticks to the classic three.
    R2d2,
    /// Never changes its mind.
    Hal,
    /// Anything goes.
    Chappie,
    /// Opens with lizards, then improvises.
    Sonny,
    /// Learns from the best: itself.
    Number5,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::R2d2,
        Persona::Hal,
        Persona::Chappie,
        Persona::Sonny,
        Persona::Number5,
    ];

    /// Pick a persona uniformly
    pub fn random<R: Randomness>(rng: &mut R) -> Persona {
        rng.pick(&Persona::ALL).unwrap_or(Persona::Chappie)
    }

    pub fn name(self) -> &'static str {
        match self {
            Persona::R2d2 => "R2D2",
            Persona::Hal => "Hal",
            Persona::Chappie => "Chappie",
            Persona::Sonny => "Sonny",
            Persona::Number5 => "Number 5",
        }
    }

    pub fn policy(self) -> Policy {
        match self {
            Persona::R2d2 => Policy::Subset([MoveKind::Rock, MoveKind::Paper, MoveKind::Scissors]),
            Persona::Hal => Policy::Constant(MoveKind::Scissors),
            Persona::Chappie => Policy::Uniform,
            Persona::Sonny => Policy::Opening {
                kind: MoveKind::Lizard,
                threshold: OPENING_THRESHOLD,
            },
            Persona::Number5 => Policy::SelfImitation {
                threshold: IMITATION_THRESHOLD,
            },
        }
    }

    pub fn quips(self) -> &'static [&'static str] {
        match self {
            Persona::R2d2 => &["Beep boop!", "Bweeee-oop.", "Whistle, whirr, click."],
            Persona::Hal => &[
                "I'm sorry, I'm afraid I can't do that.",
                "This mission is too important for me to allow you to jeopardize it.",
                "I am putting myself to the fullest possible use.",
            ],
            Persona::Chappie => &["Chappie is the winner!", "I got it, I got it!", "Cool, cool."],
            Persona::Sonny => &[
                "I have to do what he asks.",
                "I did not murder him.",
                "Can robots dream?",
            ],
            Persona::Number5 => &["Number 5 is alive!", "Need more input!", "No disassemble!"],
        }
    }

    /// Pick one of this persona's quips
    pub fn quip<R: Randomness>(self, rng: &mut R) -> &'static str {
        rng.pick(self.quips()).unwrap_or("")
    }

    /// Human-readable description of how this persona plays
    pub fn describe(self) -> String {
        match self.policy() {
            Policy::Subset([a, b, c]) => format!("Only ever plays {}, {} or {}.", a, b, c),
            Policy::Constant(kind) => format!("Plays {} every single time.", kind),
            Policy::Uniform => "Picks any of the five at random.".to_string(),
            Policy::Opening { kind, threshold } => format!(
                "Opens with {} for the first {} rounds, then picks at random.",
                kind,
                threshold + 1
            ),
            Policy::SelfImitation { threshold } => format!(
                "Picks at random for the first {} rounds, then repeats its own past moves.",
                threshold + 1
            ),
        }
    }

    /// Choose a kind given this persona's own history
    pub fn choose<R: Randomness>(self, history: &[Move], rng: &mut R) -> MoveKind {
        execute_policy(&self.policy(), history, rng)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown persona name
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no persona named '{0}'")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    /// Case-insensitive; spaces are ignored, so "number5" finds "Number 5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |name: &str| name.replace(' ', "").to_lowercase();
        let wanted = squash(s);
        Persona::ALL
            .into_iter()
            .find(|persona| squash(persona.name()) == wanted)
            .ok_or_else(|| UnknownPersona(s.trim().to_string()))
    }
}

/// Execute a policy for one round
///
/// # Arguments
/// * `policy` - The policy to execute
/// * `history` - The chooser's own past moves, oldest first
/// * `rng` - Source for any random draw
pub fn execute_policy<R: Randomness>(policy: &Policy, history: &[Move], rng: &mut R) -> MoveKind {
    match *policy {
        Policy::Subset(kinds) => rng.pick(&kinds).unwrap_or(kinds[0]),
        Policy::Constant(kind) => kind,
        Policy::Uniform => execute_uniform(rng),
        Policy::Opening { kind, threshold } => {
            if history.len() <= threshold {
                kind
            } else {
                execute_uniform(rng)
            }
        }
        Policy::SelfImitation { threshold } => execute_self_imitation(history, threshold, rng),
    }
}

fn execute_uniform<R: Randomness>(rng: &mut R) -> MoveKind {
    rng.pick(&MoveKind::ALL).unwrap_or(MoveKind::Rock)
}

/// Self-imitation: random until the history is long enough, then resample it
fn execute_self_imitation<R: Randomness>(
    history: &[Move],
    threshold: usize,
    rng: &mut R,
) -> MoveKind {
    if history.len() <= threshold {
        return execute_uniform(rng);
    }
    rng.pick(history)
        .map(|m| m.kind())
        .unwrap_or_else(|| execute_uniform(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;
    use std::collections::HashMap;

    fn make_rng() -> SeededRng {
        SeededRng::new(&[42u8; 32], 0)
    }

    fn history_of(kinds: &[MoveKind]) -> Vec<Move> {
        kinds.iter().copied().map(Move::new).collect()
    }

    fn tally(persona: Persona, history: &[Move], trials: usize) -> HashMap<MoveKind, usize> {
        let mut rng = make_rng();
        let mut counts = HashMap::new();
        for _ in 0..trials {
            *counts.entry(persona.choose(history, &mut rng)).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_r2d2_stays_in_subset() {
        let counts = tally(Persona::R2d2, &[], 3000);
        assert_eq!(counts.len(), 3);
        for kind in [MoveKind::Rock, MoveKind::Paper, MoveKind::Scissors] {
            let n = counts[&kind];
            assert!(n > 850 && n < 1150, "{} drawn {} times", kind, n);
        }
    }

    #[test]
    fn test_hal_is_constant() {
        let mut rng = make_rng();
        let mut history = Vec::new();
        for _ in 0..20 {
            let kind = Persona::Hal.choose(&history, &mut rng);
            assert_eq!(kind, MoveKind::Scissors);
            history.push(Move::new(kind));
        }
    }

    #[test]
    fn test_chappie_is_uniform() {
        let counts = tally(Persona::Chappie, &[], 5000);
        assert_eq!(counts.len(), 5);
        for kind in MoveKind::ALL {
            let n = counts[&kind];
            assert!(n > 850 && n < 1150, "{} drawn {} times", kind, n);
        }
    }

    #[test]
    fn test_sonny_opens_with_lizard() {
        let mut rng = make_rng();
        for len in 0..=OPENING_THRESHOLD {
            let history = history_of(&vec![MoveKind::Lizard; len]);
            for _ in 0..50 {
                assert_eq!(Persona::Sonny.choose(&history, &mut rng), MoveKind::Lizard);
            }
        }
    }

    #[test]
    fn test_sonny_goes_uniform_after_threshold() {
        let history = history_of(&vec![MoveKind::Lizard; OPENING_THRESHOLD + 1]);
        let counts = tally(Persona::Sonny, &history, 5000);
        assert_eq!(counts.len(), 5);
        for kind in MoveKind::ALL {
            let n = counts[&kind];
            assert!(n > 850 && n < 1150, "{} drawn {} times", kind, n);
        }
    }

    #[test]
    fn test_number5_random_before_threshold() {
        let history = history_of(&[MoveKind::Rock; IMITATION_THRESHOLD]);
        let counts = tally(Persona::Number5, &history, 5000);
        assert_eq!(counts.len(), 5, "still drawing from all kinds: {:?}", counts);
        // an all-rock history must not skew the draw yet
        for kind in MoveKind::ALL {
            let n = counts[&kind];
            assert!(n > 850 && n < 1150, "{} drawn {} times", kind, n);
        }
    }

    #[test]
    fn test_number5_imitates_itself_after_threshold() {
        let history = history_of(&[
            MoveKind::Spock,
            MoveKind::Spock,
            MoveKind::Paper,
            MoveKind::Spock,
            MoveKind::Paper,
        ]);
        let counts = tally(Persona::Number5, &history, 2000);
        assert_eq!(counts.len(), 2);
        // Spock makes up 3/5 of the history
        let spock = counts[&MoveKind::Spock];
        assert!(spock > 1050 && spock < 1350, "spock drawn {} times", spock);
    }

    #[test]
    fn test_persona_names_parse() {
        for persona in Persona::ALL {
            assert_eq!(persona.name().parse::<Persona>(), Ok(persona));
        }
        assert_eq!("number5".parse::<Persona>(), Ok(Persona::Number5));
        assert_eq!("  r2d2".parse::<Persona>(), Ok(Persona::R2d2));
        assert_eq!(
            "Bender".parse::<Persona>(),
            Err(UnknownPersona("Bender".to_string()))
        );
    }

    #[test]
    fn test_every_persona_has_quips_and_description() {
        let mut rng = make_rng();
        for persona in Persona::ALL {
            assert!(!persona.quips().is_empty());
            assert!(persona.quips().contains(&persona.quip(&mut rng)));
            assert!(!persona.describe().is_empty());
        }
    }

    #[test]
    fn test_random_persona_covers_all() {
        let mut rng = make_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Persona::random(&mut rng));
        }
        assert_eq!(seen.len(), Persona::ALL.len());
    }

    #[test]
    fn test_persona_serde() {
        let json = serde_json::to_string(&Persona::Number5).unwrap();
        let back: Persona = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Persona::Number5);
    }
}
