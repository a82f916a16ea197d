//! Randomness sources
//!
//! Every decision that needs chance takes an explicit source, so games can
//! be replayed from a seed and tests can script the draws.
//! `SeededRng` is a SplitMix64 generator: a Weyl counter run through a
//! 64-bit finalizer, so any starting state (zero included) is usable.

/// Source of random draws
pub trait Randomness {
    /// Generate next u64
    fn next_u64(&mut self) -> u64;

    /// Generate a value in range [0, max)
    ///
    /// Scales the high 32 bits by `max` instead of taking a remainder.
    fn next_range(&mut self, max: u32) -> u32 {
        let high = self.next_u64() >> 32;
        ((high * u64::from(max)) >> 32) as u32
    }

    /// Pick one item uniformly; `None` for an empty slice
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        let len = u32::try_from(items.len()).ok().filter(|len| *len > 0)?;
        items.get(self.next_range(len) as usize).copied()
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let state = seed.chunks_exact(8).fold(0u64, |acc, chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            mix64(acc.wrapping_add(GOLDEN_GAMMA) ^ u64::from_le_bytes(word))
        });
        Self {
            state: mix64(state ^ mix64(u64::from(stream).wrapping_add(GOLDEN_GAMMA))),
        }
    }

    /// Create from a single u64, as typed on a command line
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(&bytes, 0)
    }

    /// Derive an independent generator for a sub-stream
    ///
    /// The parent is left untouched.
    pub fn fork(&self, stream: u32) -> Self {
        let salt = mix64(u64::from(stream) ^ 0x5eed_f0c5_0000_0000);
        Self {
            state: mix64(self.state ^ salt),
        }
    }
}

impl Randomness for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}
