//! Password generation.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroize;

use super::charset::{self, ClassSet};
use crate::entropy::IndexSource;

/// Shortest length the form offers.
pub const MIN_LENGTH: usize = 4;
/// Longest length the form offers.
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please select at least one option!")]
    NoCharacterClassSelected,
}

/// Input for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub enabled: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, enabled: ClassSet) -> Self {
        Self { length, enabled }
    }
}

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (all ASCII, so also the byte length).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate one password, drawing each position independently from the pool.
pub fn generate<S>(
    request: &GenerationRequest,
    source: &mut S,
) -> Result<GeneratedPassword, GenerateError>
where
    S: IndexSource + ?Sized,
{
    let chars = charset::pool(request.enabled);
    if chars.is_empty() {
        return Err(GenerateError::NoCharacterClassSelected);
    }

    let mut password = String::with_capacity(request.length);
    password.extend((0..request.length).map(|_| chars[source.index(chars.len())]));

    log::debug!(
        "generated {} chars from a {}-symbol pool",
        request.length,
        charset::size(request.enabled)
    );
    Ok(GeneratedPassword(password))
}

/// Generate `count` passwords with the same request.
pub fn generate_batch<S>(
    request: &GenerationRequest,
    count: usize,
    source: &mut S,
) -> Result<Vec<GeneratedPassword>, GenerateError>
where
    S: IndexSource + ?Sized,
{
    (0..count).map(|_| generate(request, source)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Rand;
    use crate::pass::CharacterClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of indices.
    struct Scripted(Vec<usize>, usize);

    impl IndexSource for Scripted {
        fn index(&mut self, bound: usize) -> usize {
            let i = self.0[self.1 % self.0.len()];
            self.1 += 1;
            assert!(i < bound);
            i
        }
    }

    fn seeded() -> Rand<StdRng> {
        Rand(StdRng::seed_from_u64(0x5eed))
    }

    #[test]
    fn length_is_exact_across_range() {
        let mut rng = seeded();
        let classes = [
            ClassSet::all(),
            ClassSet::only(CharacterClass::Letters),
            ClassSet::only(CharacterClass::Digits),
            ClassSet::only(CharacterClass::Special),
            ClassSet::only(CharacterClass::Digits).with(CharacterClass::Special),
        ];
        for enabled in classes {
            for length in MIN_LENGTH..=MAX_LENGTH {
                let pw = generate(&GenerationRequest::new(length, enabled), &mut rng).unwrap();
                assert_eq!(pw.len(), length);
                assert_eq!(pw.as_str().chars().count(), length);
            }
        }
    }

    #[test]
    fn characters_come_from_enabled_classes() {
        let mut rng = seeded();
        let enabled = ClassSet::only(CharacterClass::Letters).with(CharacterClass::Special);
        for _ in 0..200 {
            let pw = generate(&GenerationRequest::new(32, enabled), &mut rng).unwrap();
            for c in pw.as_str().chars() {
                assert!(enabled.iter().any(|class| class.contains(c)), "stray {c:?}");
            }
        }
    }

    #[test]
    fn digits_only() {
        let mut rng = seeded();
        let request = GenerationRequest::new(8, ClassSet::only(CharacterClass::Digits));
        for _ in 0..100 {
            let pw = generate(&request, &mut rng).unwrap();
            assert_eq!(pw.len(), 8);
            assert!(pw.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn empty_selection_fails() {
        let mut rng = seeded();
        let request = GenerationRequest::new(12, ClassSet::empty());
        assert_eq!(
            generate(&request, &mut rng),
            Err(GenerateError::NoCharacterClassSelected)
        );
    }

    #[test]
    fn empty_selection_fails_even_at_zero_length() {
        let mut rng = seeded();
        let request = GenerationRequest::new(0, ClassSet::empty());
        assert!(generate(&request, &mut rng).is_err());
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = seeded();
        let pw = generate(&GenerationRequest::new(0, ClassSet::all()), &mut rng).unwrap();
        assert!(pw.is_empty());
        assert_eq!(pw.as_str(), "");
    }

    #[test]
    fn scripted_indices_pick_from_combined_pool() {
        // 0 -> 'A', 52 -> '0', 62 -> '!', 71 -> ')'
        let mut source = Scripted(vec![0, 52, 62, 71], 0);
        let pw = generate(&GenerationRequest::new(4, ClassSet::all()), &mut source).unwrap();
        assert_eq!(pw.as_str(), "A0!)");
    }

    #[test]
    fn scripted_indices_follow_pool_order() {
        // Digits then Special: 0 -> '0', 10 -> '!'
        let mut source = Scripted(vec![0, 10, 9, 19], 0);
        let enabled = ClassSet::only(CharacterClass::Special).with(CharacterClass::Digits);
        let pw = generate(&GenerationRequest::new(4, enabled), &mut source).unwrap();
        assert_eq!(pw.as_str(), "0!9)");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let request = GenerationRequest::new(16, ClassSet::all());
        let a = generate(&request, &mut seeded()).unwrap();
        let b = generate(&request, &mut seeded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn class_frequencies_match_pool_share() {
        let mut rng = seeded();
        let request = GenerationRequest::new(MAX_LENGTH, ClassSet::all());
        let draws = 100_000;
        let mut counts = [0usize; 3];
        let mut seen = 0;
        while seen < draws {
            let pw = generate(&request, &mut rng).unwrap();
            for c in pw.as_str().chars().take(draws - seen) {
                let slot = CharacterClass::ALL
                    .iter()
                    .position(|class| class.contains(c))
                    .unwrap();
                counts[slot] += 1;
                seen += 1;
            }
        }

        let expected = [52.0 / 72.0, 10.0 / 72.0, 10.0 / 72.0];
        for (count, share) in counts.iter().zip(expected) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - share).abs() < 0.01,
                "observed {observed:.4}, expected {share:.4}"
            );
        }
    }

    #[test]
    fn batch_generates_count() {
        let mut rng = seeded();
        let request = GenerationRequest::new(10, ClassSet::all());
        let batch = generate_batch(&request, 5, &mut rng).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|pw| pw.len() == 10));
        assert!(generate_batch(&GenerationRequest::new(10, ClassSet::empty()), 3, &mut rng).is_err());
    }

    #[test]
    fn debug_is_redacted() {
        let mut source = Scripted(vec![0], 0);
        let pw = generate(&GenerationRequest::new(4, ClassSet::all()), &mut source).unwrap();
        assert_eq!(format!("{pw:?}"), "GeneratedPassword(<4 chars>)");
    }
}
