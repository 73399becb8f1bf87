//! Glyph alphabet.

use rain_core::DEFAULT_ALPHABET;
use rand::{Rng, seq::IndexedRandom};

/// Characters new glyphs are sampled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl Alphabet {
    /// Build an alphabet from the non-whitespace characters of `source`.
    /// Falls back to [`DEFAULT_ALPHABET`] if nothing is left.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            return Self::default();
        }
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        // never empty, see `new`
        self.chars.choose(rng).copied().unwrap_or('0')
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn test_whitespace_is_dropped() {
        assert_eq!(Alphabet::new("0 1\n").chars(), &['0', '1']);
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(Alphabet::new("   "), Alphabet::default());
        assert_eq!(Alphabet::default().chars().len(), DEFAULT_ALPHABET.len());
    }

    #[test]
    fn test_sample_stays_in_alphabet() {
        let alphabet = Alphabet::new("xyz");
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(alphabet.chars().contains(&alphabet.sample(&mut rng)));
        }
    }
}
