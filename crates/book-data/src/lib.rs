//! Deterministic generation of a fictitious, paginated book catalogue.
//!
//! This crate produces stable book records for a given seed, page, and
//! locale, plus the browsing state a table view needs around them.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic page generation with [`generate_books`]
//! - A closed set of text locales with silent fallback ([`Locale`])
//! - Ephemeral review synthesis for a book's detail panel
//! - Event-driven browsing state with scroll paging ([`Catalogue`])
//! - Layered settings and a command-line front end
//!
//! # Example
//!
//! ```
//! use book_data::{CatalogueParams, Locale, generate_books};
//! use pagination::PageNumber;
//!
//! let params = CatalogueParams {
//!     seed: 42,
//!     locale: Locale::from_tag("en-US"),
//!     likes: 5.0,
//!     reviews: 3.0,
//! };
//! let books = generate_books(&params, PageNumber::FIRST);
//!
//! assert_eq!(books.len(), 20);
//! assert!(books.iter().all(|book| book.likes < 5 && book.reviews < 3));
//! assert_eq!(books, generate_books(&params, PageNumber::FIRST));
//! ```

mod book;
mod catalogue;
pub mod catalogue_cli;
mod config;
mod error;
mod faker;
mod generator;
mod locale;
mod review;
mod stream;
mod text;

pub use book::Book;
pub use catalogue::{Catalogue, CatalogueEvent};
pub use config::CatalogueSettings;
pub use error::{CatalogueError, ConfigError};
pub use faker::LocaleFaker;
pub use generator::{CatalogueParams, ISBN_DIGITS, generate_books};
pub use locale::Locale;
pub use pagination::{PAGE_SIZE, PageError, PageNumber};
pub use review::{Review, synthesize_reviews};
pub use stream::PageStream;
pub use text::capitalize;
