//! Catalogue settings loaded via OrthoConfig.
//!
//! Settings supply defaults for the command-line front end. Values come from
//! `BOOK_CATALOGUE_*` environment variables or a config file; anything left
//! unset falls back to [`CatalogueParams::default`].

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::generator::CatalogueParams;
use crate::locale::Locale;

const PROGRAM_NAME: &str = "book-catalogue";

/// Default catalogue parameters layered from the environment and config files.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOK_CATALOGUE")]
pub struct CatalogueSettings {
    /// Locale tag; unsupported tags fall back to `en-US`.
    pub locale: Option<String>,
    /// Catalogue seed.
    pub seed: Option<i64>,
    /// Average likes per book.
    pub likes: Option<f64>,
    /// Average reviews per book.
    pub reviews: Option<f64>,
    /// Pick a random seed whenever no explicit seed is given.
    #[ortho_config(default = false)]
    pub random_seed: bool,
}

impl CatalogueSettings {
    /// Loads settings from the environment and config files only.
    ///
    /// Command-line arguments are handled by the front end, so only the
    /// program name is passed to the loader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a configured value cannot be parsed.
    pub fn load_layered() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Returns the configured locale, falling back to the default.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map_or_else(Locale::default, Locale::from_tag)
    }

    /// Returns the catalogue parameters described by these settings.
    #[must_use]
    pub fn params(&self) -> CatalogueParams {
        let defaults = CatalogueParams::default();
        CatalogueParams {
            seed: self.seed.unwrap_or(defaults.seed),
            locale: self.locale(),
            likes: self.likes.unwrap_or(defaults.likes),
            reviews: self.reviews.unwrap_or(defaults.reviews),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for catalogue settings parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARIABLES: [&str; 5] = [
        "BOOK_CATALOGUE_LOCALE",
        "BOOK_CATALOGUE_SEED",
        "BOOK_CATALOGUE_LIKES",
        "BOOK_CATALOGUE_REVIEWS",
        "BOOK_CATALOGUE_RANDOM_SEED",
    ];

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARIABLES.map(|name| (name, None::<String>)));

        let settings = CatalogueSettings::load_layered().expect("settings should load");

        assert_eq!(settings.params(), CatalogueParams::default());
        assert!(!settings.random_seed);
        assert!(settings.locale.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BOOK_CATALOGUE_LOCALE", Some("de-DE".to_owned())),
            ("BOOK_CATALOGUE_SEED", Some("-17".to_owned())),
            ("BOOK_CATALOGUE_LIKES", Some("2.5".to_owned())),
            ("BOOK_CATALOGUE_REVIEWS", Some("8".to_owned())),
            ("BOOK_CATALOGUE_RANDOM_SEED", Some("true".to_owned())),
        ]);

        let settings = CatalogueSettings::load_layered().expect("settings should load");

        assert_eq!(
            settings.params(),
            CatalogueParams {
                seed: -17,
                locale: Locale::DeDe,
                likes: 2.5,
                reviews: 8.0,
            }
        );
        assert!(settings.random_seed);
    }

    #[rstest]
    #[case(Some("ar"), Locale::Ar)]
    #[case(Some("zz"), Locale::EnUs)]
    #[case(None, Locale::EnUs)]
    fn locale_accessor_falls_back(#[case] tag: Option<&str>, #[case] expected: Locale) {
        let settings = CatalogueSettings {
            locale: tag.map(str::to_owned),
            ..CatalogueSettings::default()
        };

        assert_eq!(settings.locale(), expected);
    }
}
