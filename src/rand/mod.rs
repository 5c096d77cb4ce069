//! Random index generation with hardware entropy.
//!
//! Password positions are drawn through [`IndexSource`], so callers can swap
//! the entropy-mixing [`Rand`] for a replayable [`Sequence`].

mod hw;
mod primes;
pub mod urand;

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use primes::PRIMES;

/// Provider of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an index in `0..bound`. Callers never pass a zero bound.
    fn next_index(&mut self, bound: usize) -> usize;
}

// =============================================================================
// Entropy
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropySource {
    #[default]
    Hardware,
    Urandom,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Hardware => hw::source_name(),
            EntropySource::Urandom => "/dev/urandom",
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropySource::Hardware => f.write_str("hw"),
            EntropySource::Urandom => f.write_str("urandom"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown entropy source: {0}")]
pub struct UnknownSource(String);

impl FromStr for EntropySource {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hw" => Ok(EntropySource::Hardware),
            "urandom" => Ok(EntropySource::Urandom),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

// =============================================================================
// RNG
// =============================================================================

/// Entropy-mixing generator: every draw folds fresh entropy into the state,
/// then runs the SplitMix64 finalizer over it.
pub struct Rand {
    state: u64,
    pool: Option<urand::Pool>,
}

impl Rand {
    pub fn new() -> Self {
        Self::with_source(EntropySource::Hardware)
    }

    /// Falls back to hardware entropy if /dev/urandom cannot be opened.
    pub fn with_source(source: EntropySource) -> Self {
        let pool = match source {
            EntropySource::Hardware => None,
            EntropySource::Urandom => match urand::Pool::open() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    log::warn!("/dev/urandom unavailable ({e}), using {}", hw::source_name());
                    None
                }
            },
        };
        let mut rand = Rand { state: 0, pool };
        rand.state = rand.entropy();
        rand
    }

    pub fn source(&self) -> EntropySource {
        if self.pool.is_some() {
            EntropySource::Urandom
        } else {
            EntropySource::Hardware
        }
    }

    #[inline(always)]
    fn entropy(&mut self) -> u64 {
        if let Some(pool) = self.pool.as_mut() {
            match pool.next_u64() {
                Ok(v) => return v,
                Err(e) => {
                    log::warn!("/dev/urandom read failed ({e}), using {}", hw::source_name());
                    self.pool = None;
                }
            }
        }
        hw::entropy()
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let state = self.state;
        let ent = self.entropy();

        // Mix entropy into prime selection
        let mixed = state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        let new_state = state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;
        self.state = new_state;

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for Rand {
    /// Rejection-samples so every index in `0..bound` is equally likely.
    fn next_index(&mut self, bound: usize) -> usize {
        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % bound) as usize;
            }
        }
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// Deterministic source
// =============================================================================

/// Replays a fixed list of indices, wrapping around at the end. Each value is
/// reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct Sequence {
    indices: Vec<usize>,
    pos: usize,
}

impl Sequence {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            pos: 0,
        }
    }
}

impl IndexSource for Sequence {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_indices_stay_in_bounds() {
        let mut rand = Rand::new();
        for bound in [1, 2, 10, 12, 26, 74] {
            for _ in 0..500 {
                assert!(rand.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn rand_reaches_every_index_of_small_bound() {
        let mut rand = Rand::new();
        let mut seen = [false; 10];
        for _ in 0..5_000 {
            seen[rand.next_index(10)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn sequence_wraps_and_reduces() {
        let mut seq = Sequence::new(vec![0, 5, 27]);
        assert_eq!(seq.next_index(26), 0);
        assert_eq!(seq.next_index(26), 5);
        assert_eq!(seq.next_index(26), 1);
        assert_eq!(seq.next_index(26), 0);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut seq = Sequence::new(Vec::new());
        assert_eq!(seq.next_index(10), 0);
    }

    #[test]
    fn entropy_source_names_parse() {
        assert_eq!("hw".parse::<EntropySource>().unwrap(), EntropySource::Hardware);
        assert_eq!("urandom".parse::<EntropySource>().unwrap(), EntropySource::Urandom);
        assert!("rdrand".parse::<EntropySource>().is_err());
        assert_eq!(EntropySource::Urandom.to_string(), "urandom");
    }
}
