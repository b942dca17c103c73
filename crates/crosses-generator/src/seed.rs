use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use crosses_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("hello");
/// let parsed: PuzzleSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a valid [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex digit in seed: {_0:?}")]
    InvalidDigit(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for ch in digits.by_ref().take(2) {
                let digit = ch.to_digit(16).ok_or(ParseSeedError::InvalidDigit(ch))?;
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = (value << 4) | digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}
