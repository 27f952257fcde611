//! Page-scoped random stream.
//!
//! The stream is keyed by a string. Every page derives its key from the
//! decimal form of `seed + page`, hashes it, and seeds a fresh ChaCha8
//! generator with the digest. Draws are uniform in `[0, 1)` and are consumed
//! in a fixed order by the generator.

use pagination::PageNumber;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Random stream shared by the record slots of a single page.
#[derive(Debug, Clone)]
pub struct PageStream {
    rng: ChaCha8Rng,
}

impl PageStream {
    /// Creates the stream for `page` of the catalogue identified by `seed`.
    ///
    /// `seed + page` wraps on overflow.
    #[must_use]
    pub fn new(seed: i64, page: PageNumber) -> Self {
        let key = seed.wrapping_add(i64::from(page.get())).to_string();
        Self::from_key(&key)
    }

    /// Creates a stream keyed by an arbitrary string.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(key.as_bytes()).into();
        Self {
            rng: ChaCha8Rng::from_seed(digest),
        }
    }

    /// Draws the next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }

    /// Draws the next value and returns `floor(value * scale)`.
    ///
    /// A draw is always consumed so the stream position does not depend on
    /// `scale`. Scales that are negative, zero, or not finite yield 0.
    /// Products of `2^32` or more saturate at [`u32::MAX`].
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the product is non-negative and the cast saturates at u32::MAX"
    )]
    pub fn floor_scaled(&mut self, scale: f64) -> u32 {
        let unit = self.next_unit();
        if scale.is_finite() && scale > 0.0 {
            (unit * scale).floor() as u32
        } else {
            0
        }
    }
}
