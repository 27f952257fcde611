//! Command-line front end for browsing a generated catalogue.
//!
//! The binary delegates to this module so argument handling and rendering can
//! be exercised in tests without spawning a process. Arguments override the
//! layered [`CatalogueSettings`].

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::book::Book;
use crate::catalogue::{Catalogue, CatalogueEvent};
use crate::config::CatalogueSettings;
use crate::error::{CatalogueError, ConfigError};
use crate::generator::CatalogueParams;
use crate::locale::Locale;
use crate::review::Review;

/// `book-catalogue` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "book-catalogue",
    about = "Browse a deterministically generated catalogue of fictitious books",
    version
)]
pub struct CliArgs {
    /// Locale tag (`en-US`, `de-DE`, `ar`); unsupported tags use `en-US`.
    #[arg(long, value_name = "tag")]
    pub locale: Option<String>,
    /// Catalogue seed.
    #[arg(long, value_name = "seed", allow_negative_numbers = true)]
    pub seed: Option<i64>,
    /// Pick a random seed instead of the configured one.
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,
    /// Average likes per book.
    #[arg(long, value_name = "average", allow_negative_numbers = true)]
    pub likes: Option<f64>,
    /// Average reviews per book.
    #[arg(long, value_name = "average", allow_negative_numbers = true)]
    pub reviews: Option<f64>,
    /// Number of pages to load.
    #[arg(long, value_name = "count", default_value_t = 1)]
    pub pages: u32,
    /// Expand the row with this book index.
    #[arg(long, value_name = "index")]
    pub show: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Rendering style for the loaded catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-column text table.
    #[default]
    Table,
    /// JSON document.
    Json,
}

/// Upper bound for seeds picked by `--random-seed`.
const RANDOM_SEED_SPAN: i64 = 100_000;

/// Parses command-line arguments, including the program name.
///
/// # Errors
///
/// Returns [`CliError::Arguments`] for invalid arguments and for `--help` or
/// `--version`, which clap reports as errors carrying the output to print.
///
/// # Example
///
/// ```
/// use book_data::catalogue_cli::parse_args;
///
/// let args = parse_args(["book-catalogue", "--seed", "-3", "--pages", "2"]).expect("parse");
/// assert_eq!(args.seed, Some(-3));
/// assert_eq!(args.pages, 2);
/// ```
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map_err(CliError::Arguments)
}

/// Combines arguments with settings into catalogue parameters.
///
/// An explicit `--seed` wins over a `random_seed` setting.
#[must_use]
pub fn resolve_params(args: &CliArgs, settings: &CatalogueSettings) -> CatalogueParams {
    let configured = settings.params();
    let seed = match args.seed {
        Some(seed) => seed,
        None if args.random_seed || settings.random_seed => {
            rand::rng().random_range(0..RANDOM_SEED_SPAN)
        }
        None => configured.seed,
    };
    CatalogueParams {
        seed,
        locale: args
            .locale
            .as_deref()
            .map_or(configured.locale, requested_locale),
        likes: args.likes.unwrap_or(configured.likes),
        reviews: args.reviews.unwrap_or(configured.reviews),
    }
}

fn requested_locale(tag: &str) -> Locale {
    if !Locale::is_supported(tag) {
        warn!(tag, fallback = %Locale::default(), "unsupported locale requested");
    }
    Locale::from_tag(tag)
}

/// Loads the requested pages and applies the requested selection.
///
/// # Errors
///
/// Returns [`CliError::NoPages`] when `--pages 0` is requested,
/// [`CliError::UnknownRow`] when `--show` names a row outside the loaded
/// pages, and [`CliError::Catalogue`] when paging fails.
pub fn build_catalogue(args: &CliArgs, params: CatalogueParams) -> Result<Catalogue, CliError> {
    if args.pages == 0 {
        return Err(CliError::NoPages);
    }

    let mut catalogue = Catalogue::new(params);
    for _ in 1..args.pages {
        catalogue.apply(CatalogueEvent::ScrolledToBottom)?;
    }

    if let Some(index) = args.show {
        if catalogue.book(index).is_none() {
            return Err(CliError::UnknownRow {
                index,
                loaded: catalogue.books().len(),
            });
        }
        catalogue.apply(CatalogueEvent::RowSelected(index))?;
    }

    Ok(catalogue)
}

/// Writes the catalogue in the requested format.
///
/// # Errors
///
/// Returns [`CliError::Output`] when writing fails and
/// [`CliError::Serialize`] when JSON encoding fails.
pub fn render(
    catalogue: &Catalogue,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => render_table(catalogue, out)?,
        OutputFormat::Json => render_json(catalogue, out)?,
    }
    Ok(())
}

/// Parses arguments, builds the catalogue, and renders it to `out`.
///
/// # Errors
///
/// Propagates any [`CliError`] from parsing, paging, or rendering.
pub fn run<I, T>(args: I, settings: &CatalogueSettings, out: &mut impl Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = parse_args(args)?;
    let params = resolve_params(&parsed, settings);
    info!(
        seed = params.seed,
        locale = %params.locale,
        pages = parsed.pages,
        "rendering catalogue"
    );
    let catalogue = build_catalogue(&parsed, params)?;
    render(&catalogue, parsed.format, out)
}

const INDENT: &str = "      ";

fn render_table(catalogue: &Catalogue, out: &mut impl Write) -> io::Result<()> {
    let params = catalogue.params();
    writeln!(
        out,
        "Language: {}  Seed: {}  Likes: {:.1}  Reviews: {}",
        params.locale, params.seed, params.likes, params.reviews
    )?;
    writeln!(
        out,
        "{:>6}  {:<13}  {:<40}  {:<28}  {:<32}  {:>5}",
        "#", "ISBN", "Title", "Author(s)", "Publisher", "Likes"
    )?;

    let selected = catalogue.selected().map(|book| book.index);
    for book in catalogue.books() {
        let is_selected = selected == Some(book.index);
        let marker = if is_selected { '▲' } else { '▼' };
        writeln!(
            out,
            "{marker} {:>4}  {:<13}  {:<40}  {:<28}  {:<32}  {:>5}",
            book.index, book.isbn, book.title, book.author, book.publisher, book.likes
        )?;
        if is_selected {
            render_detail(book, catalogue.reviews_for(book.index), out)?;
        }
    }
    Ok(())
}

fn render_detail(book: &Book, reviews: &[Review], out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{INDENT}{}", book.title)?;
    writeln!(out, "{INDENT}Author(s): {}", book.author)?;
    writeln!(out, "{INDENT}Publisher: {}", book.publisher)?;
    writeln!(out, "{INDENT}Likes: {}", book.likes)?;
    writeln!(out, "{INDENT}Reviews:")?;
    if reviews.is_empty() {
        writeln!(out, "{INDENT}  No reviews yet.")?;
    }
    for review in reviews {
        writeln!(out, "{INDENT}  - {review} ({})", review.company)?;
    }
    writeln!(out)
}

/// JSON view of the loaded catalogue.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogueView<'a> {
    params: &'a CatalogueParams,
    loaded_pages: u32,
    books: &'a [Book],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<SelectedView<'a>>,
}

#[derive(Debug, Serialize)]
struct SelectedView<'a> {
    book: &'a Book,
    reviews: &'a [Review],
}

fn render_json(catalogue: &Catalogue, out: &mut impl Write) -> Result<(), CliError> {
    let view = CatalogueView {
        params: catalogue.params(),
        loaded_pages: catalogue.loaded_pages(),
        books: catalogue.books(),
        selected: catalogue.selected().map(|book| SelectedView {
            book,
            reviews: catalogue.reviews_for(book.index),
        }),
    };
    serde_json::to_writer_pretty(&mut *out, &view).map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })?;
    writeln!(out)?;
    Ok(())
}

/// Errors surfaced by the catalogue command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments were invalid, or help/version output was requested.
    #[error(transparent)]
    Arguments(clap::Error),
    /// `--pages` must load at least one page.
    #[error("--pages must be at least 1")]
    NoPages,
    /// `--show` named a row outside the loaded pages.
    #[error("row {index} is not loaded ({loaded} rows available)")]
    UnknownRow {
        /// Requested book index.
        index: u64,
        /// Number of loaded rows.
        loaded: usize,
    },
    /// Paging the catalogue failed.
    #[error("catalogue error: {source}")]
    Catalogue {
        /// Underlying catalogue error.
        #[from]
        #[source]
        source: CatalogueError,
    },
    /// Settings could not be loaded.
    #[error("configuration error: {source}")]
    Config {
        /// Underlying settings error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// JSON output could not be encoded.
    #[error("failed to encode catalogue as JSON: {message}")]
    Serialize {
        /// Encoder error message.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        #[source]
        source: io::Error,
    },
}
