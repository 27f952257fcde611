//! Re-seedable, locale-aware text generation.
//!
//! [`LocaleFaker`] owns its random source outright. Nothing is shared between
//! instances, so two fakers built from the same locale and seed always draw
//! the same text.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Sentence, Words};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::locales::{AR_SA, DE_DE, EN};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::locale::Locale;

/// Word count bounds for a review sentence (upper bound exclusive).
const SENTENCE_WORDS_MIN: usize = 3;
const SENTENCE_WORDS_MAX: usize = 11;

/// Dispatches a `fake` faker constructor to the data set for `$locale`.
macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            Locale::EnUs => $faker(EN $(, $arg)*).fake_with_rng($rng),
            Locale::DeDe => $faker(DE_DE $(, $arg)*).fake_with_rng($rng),
            Locale::Ar => $faker(AR_SA $(, $arg)*).fake_with_rng($rng),
        }
    };
}

/// Locale-aware text generator with an explicit, resettable seed.
///
/// # Example
///
/// ```
/// use book_data::{Locale, LocaleFaker};
///
/// let mut faker = LocaleFaker::new(Locale::DeDe, 7);
/// let first = faker.full_name();
///
/// faker.reseed(7);
/// assert_eq!(faker.full_name(), first);
/// ```
#[derive(Debug, Clone)]
pub struct LocaleFaker {
    locale: Locale,
    rng: ChaCha8Rng,
}

impl LocaleFaker {
    /// Creates a faker for `locale` seeded with `seed`.
    #[must_use]
    pub fn new(locale: Locale, seed: u64) -> Self {
        Self {
            locale,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a faker for `locale` seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy(locale: Locale) -> Self {
        Self::new(locale, rand::rng().random())
    }

    /// Restarts the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Switches the data set used for subsequent draws.
    pub const fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Draws exactly `count` lorem words.
    pub fn words(&mut self, count: usize) -> Vec<String> {
        localized!(self.locale, &mut self.rng, Words, count..count + 1)
    }

    /// Draws a full personal name.
    pub fn full_name(&mut self) -> String {
        localized!(self.locale, &mut self.rng, Name)
    }

    /// Draws a given name.
    pub fn first_name(&mut self) -> String {
        localized!(self.locale, &mut self.rng, FirstName)
    }

    /// Draws a family name.
    pub fn last_name(&mut self) -> String {
        localized!(self.locale, &mut self.rng, LastName)
    }

    /// Draws a company name.
    pub fn company_name(&mut self) -> String {
        localized!(self.locale, &mut self.rng, CompanyName)
    }

    /// Draws a single lorem sentence.
    pub fn sentence(&mut self) -> String {
        localized!(
            self.locale,
            &mut self.rng,
            Sentence,
            SENTENCE_WORDS_MIN..SENTENCE_WORDS_MAX
        )
    }

    /// Draws `len` ASCII digits; leading zeros are allowed.
    pub fn numeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10_u8)))
            .collect()
    }
}
