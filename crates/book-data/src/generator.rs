//! Deterministic book page generation.
//!
//! Two random sources feed each page. The page-scoped [`PageStream`] drives
//! title lengths and the like/review counts, while a [`LocaleFaker`] is
//! re-seeded per record for the author and publisher. Textual fields for a
//! given seed, page, and slot therefore stay put when the like or review
//! averages change.

use pagination::{PAGE_SIZE, PageNumber};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::book::Book;
use crate::faker::LocaleFaker;
use crate::locale::Locale;
use crate::stream::PageStream;
use crate::text::capitalize;

/// Number of digits in a generated ISBN.
pub const ISBN_DIGITS: usize = 13;

/// Exclusive upper bound for the initial faker seed drawn from the stream.
const FAKER_SEED_SPAN: f64 = 100_000.0;

/// Title word counts are drawn from `1..=TITLE_MAX_WORDS`.
const TITLE_MAX_WORDS: f64 = 5.0;

/// Offset separating publisher seeds from author seeds.
const PUBLISHER_SEED_OFFSET: i64 = 100;

/// Inputs that identify a generated catalogue.
///
/// `likes` and `reviews` are averages used to scale the per-book counts.
/// Negative or non-finite averages produce zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueParams {
    /// Seed controlling every random draw.
    pub seed: i64,
    /// Locale for generated text.
    pub locale: Locale,
    /// Average likes per book.
    pub likes: f64,
    /// Average reviews per book.
    pub reviews: f64,
}

impl Default for CatalogueParams {
    fn default() -> Self {
        Self {
            seed: 42,
            locale: Locale::default(),
            likes: 5.0,
            reviews: 3.0,
        }
    }
}

/// Generates the [`PAGE_SIZE`] books on `page`.
///
/// Identical arguments always produce identical books. Each call builds its
/// own random sources, so pages may be generated in any order.
///
/// # Example
///
/// ```
/// use book_data::{CatalogueParams, generate_books};
/// use pagination::PageNumber;
///
/// let params = CatalogueParams::default();
/// let books = generate_books(&params, PageNumber::FIRST);
///
/// assert_eq!(books.len(), 20);
/// assert_eq!(books.first().map(|book| book.index), Some(1));
/// assert_eq!(books, generate_books(&params, PageNumber::FIRST));
/// ```
#[must_use]
pub fn generate_books(params: &CatalogueParams, page: PageNumber) -> Vec<Book> {
    let mut builder = PageBuilder::new(params, page);
    let books: Vec<Book> = (0..PAGE_SIZE).map(|slot| builder.book(slot)).collect();

    debug!(
        seed = params.seed,
        locale = %params.locale,
        page = page.get(),
        count = books.len(),
        "generated book page"
    );
    books
}

/// Per-call generation state for one page.
struct PageBuilder<'a> {
    params: &'a CatalogueParams,
    page: PageNumber,
    page_seed: i64,
    stream: PageStream,
    faker: LocaleFaker,
}

impl<'a> PageBuilder<'a> {
    fn new(params: &'a CatalogueParams, page: PageNumber) -> Self {
        let mut stream = PageStream::new(params.seed, page);
        let faker_seed = u64::from(stream.floor_scaled(FAKER_SEED_SPAN));
        Self {
            params,
            page,
            page_seed: params.seed.wrapping_add(i64::from(page.get())),
            stream,
            faker: LocaleFaker::new(params.locale, faker_seed),
        }
    }

    fn book(&mut self, slot: u32) -> Book {
        // Draw order is part of the output contract.
        let word_count = self.title_word_count();
        let title = capitalize(&self.faker.words(word_count).join(" "));

        let author_seed = self.page_seed.wrapping_add(i64::from(slot));
        self.faker.reseed(author_seed.cast_unsigned());
        let author = self.faker.full_name();

        let publisher_seed = author_seed.wrapping_add(PUBLISHER_SEED_OFFSET);
        self.faker.reseed(publisher_seed.cast_unsigned());
        let publisher = self.faker.company_name();
        let isbn = self.faker.numeric(ISBN_DIGITS);

        let likes = self.stream.floor_scaled(self.params.likes);
        let reviews = self.stream.floor_scaled(self.params.reviews);

        Book {
            index: self.page.slot_index(slot),
            isbn,
            title,
            author,
            publisher,
            likes,
            reviews,
        }
    }

    fn title_word_count(&mut self) -> usize {
        let drawn = self.stream.floor_scaled(TITLE_MAX_WORDS);
        usize::try_from(drawn).map_or(1, |count| count + 1)
    }
}
