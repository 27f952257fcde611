//! Error types for the book-data crate.
//!
//! Generation itself never fails. The errors here cover the edges around it:
//! advancing the catalogue past the last page and loading settings.

use pagination::PageError;
use thiserror::Error;

/// Errors raised while applying catalogue events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The next page number could not be computed.
    #[error("cannot load another page: {source}")]
    PageLimit {
        /// Underlying page numbering error.
        #[from]
        #[source]
        source: PageError,
    },
}

/// Errors raised while loading catalogue settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Settings could not be read from the environment or config files.
    #[error("failed to load catalogue settings: {message}")]
    Load {
        /// Description of the load failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_limit_formats_correctly() {
        let err = CatalogueError::from(PageError::Overflow { current: 12 });
        assert_eq!(
            err.to_string(),
            "cannot load another page: page 12 is the last addressable page"
        );
    }

    #[test]
    fn config_load_formats_correctly() {
        let err = ConfigError::Load {
            message: "bad value".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load catalogue settings: bad value"
        );
    }
}
