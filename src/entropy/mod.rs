//! Random index sources for password generation.

use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, ThreadRng};
use rand::{Rng, RngCore};

/// Uniform random index provider.
pub trait IndexSource {
    /// Returns an index uniformly distributed in `[0, bound)`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// Adapts any `rand` generator. Range sampling rejects out-of-zone values, so
/// indices are unbiased for every bound.
pub struct Rand<R>(pub R);

impl<R: RngCore> IndexSource for Rand<R> {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

// =============================================================================
// Source selection
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    /// Thread-local generator, reseeded from the OS periodically.
    #[default]
    Thread,
    /// Every draw goes through the OS generator.
    Os,
}

impl EntropySource {
    pub fn open(self) -> Box<dyn IndexSource> {
        log::debug!("using {} entropy source", self);
        match self {
            EntropySource::Thread => Box::new(Rand::<ThreadRng>(rand::thread_rng())),
            EntropySource::Os => Box::new(Rand(OsRng)),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            EntropySource::Thread => "thread rng (ChaCha, OS-seeded)",
            EntropySource::Os => "OS rng (getrandom)",
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropySource::Thread => write!(f, "thread"),
            EntropySource::Os => write!(f, "os"),
        }
    }
}

impl FromStr for EntropySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(EntropySource::Thread),
            "os" => Ok(EntropySource::Os),
            other => Err(format!("unknown entropy source: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn indices_stay_in_bounds() {
        let mut source = Rand(StdRng::seed_from_u64(7));
        for bound in 1..100 {
            for _ in 0..50 {
                assert!(source.index(bound) < bound);
            }
        }
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut source = EntropySource::Os.open();
        for _ in 0..100 {
            assert_eq!(source.index(1), 0);
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = Rand(StdRng::seed_from_u64(42));
        let mut b = Rand(StdRng::seed_from_u64(42));
        let xs: Vec<_> = (0..32).map(|_| a.index(72)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.index(72)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn source_names_round_trip() {
        for source in [EntropySource::Thread, EntropySource::Os] {
            assert_eq!(source.to_string().parse::<EntropySource>(), Ok(source));
        }
        assert!("urandom".parse::<EntropySource>().is_err());
    }
}
