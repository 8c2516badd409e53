//! Tie-break policies
//!
//! Defines the `TieBreak` trait and concrete implementations used when several
//! letters share the best score.

use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

/// A policy for choosing among equally good letters
pub trait TieBreak {
    /// Pick one letter from `tied` (lowercase, alphabetical order)
    ///
    /// Returns `None` only if `tied` is empty.
    fn pick(&mut self, tied: &[u8]) -> Option<u8>;
}

/// Enum wrapper for all tie-break policies
///
/// Allows runtime selection of the policy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum TieBreakType {
    /// Uniform random choice (default)
    Random(RandomTieBreak),
    /// Alphabetically first letter
    FirstAlphabetic(FirstAlphabetic),
    /// Alphabetically last letter
    LastAlphabetic(LastAlphabetic),
}

impl TieBreak for TieBreakType {
    fn pick(&mut self, tied: &[u8]) -> Option<u8> {
        match self {
            Self::Random(t) => t.pick(tied),
            Self::FirstAlphabetic(t) => t.pick(tied),
            Self::LastAlphabetic(t) => t.pick(tied),
        }
    }
}

impl TieBreakType {
    /// Create a policy from its name
    ///
    /// Supported names: "random", "first", "first-alphabetic", "last",
    /// "last-alphabetic". Defaults to random if the name is unrecognized.
    /// `seed` only affects the random policy; without one it is seeded from
    /// the operating system.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::{TieBreak, TieBreakType};
    ///
    /// let mut policy = TieBreakType::from_name("last", None);
    /// assert_eq!(policy.pick(b"aeo"), Some(b'o'));
    /// assert_eq!(policy.name(), "last");
    /// ```
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" | "first-alphabetic" => Self::FirstAlphabetic(FirstAlphabetic),
            "last" | "last-alphabetic" => Self::LastAlphabetic(LastAlphabetic),
            _ => Self::Random(seed.map_or_else(RandomTieBreak::from_os_rng, RandomTieBreak::seeded)),
        }
    }

    /// Short name of the policy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::FirstAlphabetic(_) => "first",
            Self::LastAlphabetic(_) => "last",
        }
    }
}

impl Default for TieBreakType {
    fn default() -> Self {
        Self::Random(RandomTieBreak::from_os_rng())
    }
}

/// Always the alphabetically first letter
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAlphabetic;

impl TieBreak for FirstAlphabetic {
    fn pick(&mut self, tied: &[u8]) -> Option<u8> {
        tied.iter().min().copied()
    }
}

/// Always the alphabetically last letter
#[derive(Debug, Clone, Copy, Default)]
pub struct LastAlphabetic;

impl TieBreak for LastAlphabetic {
    fn pick(&mut self, tied: &[u8]) -> Option<u8> {
        tied.iter().max().copied()
    }
}

/// Uniform random choice from an injected pseudo-random source
#[derive(Debug, Clone)]
pub struct RandomTieBreak {
    rng: StdRng,
}

impl RandomTieBreak {
    /// Reproducible policy from a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Policy seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl TieBreak for RandomTieBreak {
    fn pick(&mut self, tied: &[u8]) -> Option<u8> {
        tied.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_alphabetic() {
        assert_eq!(FirstAlphabetic.pick(b"ist"), Some(b'i'));
        assert_eq!(LastAlphabetic.pick(b"ist"), Some(b't'));
    }

    #[test]
    fn empty_tie_gives_none() {
        assert_eq!(FirstAlphabetic.pick(&[]), None);
        assert_eq!(LastAlphabetic.pick(&[]), None);
        assert_eq!(RandomTieBreak::seeded(1).pick(&[]), None);
    }

    #[test]
    fn random_picks_member() {
        let mut policy = RandomTieBreak::seeded(42);
        for _ in 0..50 {
            let letter = policy.pick(b"aeiou").unwrap();
            assert!(b"aeiou".contains(&letter));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut first = RandomTieBreak::seeded(7);
        let mut second = RandomTieBreak::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.pick(b"abcdefgh"), second.pick(b"abcdefgh"));
        }
    }

    #[test]
    fn from_name_variants() {
        assert_eq!(TieBreakType::from_name("first", None).name(), "first");
        assert_eq!(
            TieBreakType::from_name("last-alphabetic", None).name(),
            "last"
        );
        assert_eq!(TieBreakType::from_name("random", Some(3)).name(), "random");
        assert_eq!(TieBreakType::from_name("bogus", None).name(), "random");
    }

    #[test]
    fn single_letter_is_always_chosen() {
        let mut policy = TieBreakType::from_name("random", None);
        assert_eq!(policy.pick(b"q"), Some(b'q'));
    }
}
