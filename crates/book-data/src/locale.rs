//! Supported catalogue locales.
//!
//! The locale set is closed. Tags outside it never fail; they resolve to the
//! default locale so callers can pass user input straight through.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A locale controlling the naming conventions and lexicon of generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    /// English (United States).
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// German (Germany).
    #[serde(rename = "de-DE")]
    DeDe,
    /// Arabic.
    #[serde(rename = "ar")]
    Ar,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 3] = [Self::EnUs, Self::DeDe, Self::Ar];

    /// Resolves a locale tag, falling back to [`Locale::default`] for tags
    /// outside the supported set.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::Locale;
    ///
    /// assert_eq!(Locale::from_tag("de-DE"), Locale::DeDe);
    /// assert_eq!(Locale::from_tag("fr-FR"), Locale::EnUs);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag() == tag.trim())
            .unwrap_or_else(|| {
                debug!(tag, "unsupported locale tag; using default");
                Self::default()
            })
    }

    /// Returns the tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::Ar => "ar",
        }
    }

    /// Returns `true` when `tag` names a supported locale exactly.
    #[must_use]
    pub fn is_supported(tag: &str) -> bool {
        Self::ALL.iter().any(|locale| locale.tag() == tag.trim())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en-US", Locale::EnUs)]
    #[case("de-DE", Locale::DeDe)]
    #[case("ar", Locale::Ar)]
    #[case(" de-DE ", Locale::DeDe)]
    fn resolves_supported_tags(#[case] tag: &str, #[case] expected: Locale) {
        assert_eq!(Locale::from_tag(tag), expected);
        assert!(Locale::is_supported(tag));
    }

    #[rstest]
    #[case("ru")]
    #[case("EN-us")]
    #[case("")]
    fn unsupported_tags_fall_back_to_english(#[case] tag: &str) {
        assert_eq!(Locale::from_tag(tag), Locale::EnUs);
        assert!(!Locale::is_supported(tag));
    }

    #[test]
    fn tags_round_trip_through_display() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(&locale.to_string()), locale);
        }
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&Locale::DeDe).expect("serialize");
        assert_eq!(json, "\"de-DE\"");
    }

    #[test]
    fn deserialization_falls_back_for_unknown_tags() {
        let locale: Locale = serde_json::from_str("\"pt-BR\"").expect("deserialize");
        assert_eq!(locale, Locale::EnUs);
    }
}
