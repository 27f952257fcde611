//! Browsing state for a generated catalogue.
//!
//! [`Catalogue`] is the application state behind the book table: the loaded
//! pages, the expanded row, and the reviews shown in its detail panel. It
//! changes only through [`CatalogueEvent`]s.

use std::collections::HashMap;

use pagination::PageNumber;
use tracing::{debug, info};

use crate::book::Book;
use crate::error::CatalogueError;
use crate::faker::LocaleFaker;
use crate::generator::{CatalogueParams, generate_books};
use crate::review::{Review, synthesize_reviews};

/// Events that drive the catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogueEvent {
    /// Seed, locale, or averages changed; reload from the first page.
    ParamsChanged(CatalogueParams),
    /// The reader reached the end of the loaded rows.
    ScrolledToBottom,
    /// The reader expanded the row with this book index.
    RowSelected(u64),
    /// The reader closed the detail panel.
    DetailClosed,
}

/// Loaded catalogue pages plus selection and review state.
///
/// # Example
///
/// ```
/// use book_data::{Catalogue, CatalogueEvent, CatalogueParams};
///
/// let mut catalogue = Catalogue::with_review_seed(CatalogueParams::default(), 7);
/// assert_eq!(catalogue.books().len(), 20);
///
/// catalogue.apply(CatalogueEvent::ScrolledToBottom).expect("second page");
/// assert_eq!(catalogue.books().len(), 40);
/// assert_eq!(catalogue.loaded_pages(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Catalogue {
    params: CatalogueParams,
    books: Vec<Book>,
    last_loaded: PageNumber,
    selected: Option<u64>,
    reviews: HashMap<u64, Vec<Review>>,
    review_faker: LocaleFaker,
}

impl Catalogue {
    /// Creates a catalogue with the first page loaded.
    ///
    /// Review text is drawn from an entropy-seeded source and differs
    /// between runs.
    #[must_use]
    pub fn new(params: CatalogueParams) -> Self {
        Self::with_review_faker(params, LocaleFaker::from_entropy(params.locale))
    }

    /// Creates a catalogue whose review text is drawn from a fixed seed.
    #[must_use]
    pub fn with_review_seed(params: CatalogueParams, review_seed: u64) -> Self {
        Self::with_review_faker(params, LocaleFaker::new(params.locale, review_seed))
    }

    fn with_review_faker(params: CatalogueParams, review_faker: LocaleFaker) -> Self {
        let mut catalogue = Self {
            params,
            books: Vec::new(),
            last_loaded: PageNumber::FIRST,
            selected: None,
            reviews: HashMap::new(),
            review_faker,
        };
        catalogue.reset(params);
        catalogue
    }

    /// Applies `event` to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::PageLimit`] when scrolling past the last
    /// addressable page. The catalogue is left unchanged in that case.
    pub fn apply(&mut self, event: CatalogueEvent) -> Result<(), CatalogueError> {
        match event {
            CatalogueEvent::ParamsChanged(params) => self.reset(params),
            CatalogueEvent::ScrolledToBottom => {
                let page = self.last_loaded.next()?;
                self.append_page(page);
            }
            CatalogueEvent::RowSelected(index) => self.select(index),
            CatalogueEvent::DetailClosed => self.selected = None,
        }
        Ok(())
    }

    /// Returns the parameters the loaded pages were generated from.
    #[must_use]
    pub const fn params(&self) -> &CatalogueParams {
        &self.params
    }

    /// Returns every loaded book in index order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of loaded pages.
    #[must_use]
    pub const fn loaded_pages(&self) -> u32 {
        self.last_loaded.get()
    }

    /// Looks up a loaded book by its index.
    #[must_use]
    pub fn book(&self, index: u64) -> Option<&Book> {
        loaded_book(&self.books, index)
    }

    /// Returns the expanded book, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Book> {
        self.selected.and_then(|index| self.book(index))
    }

    /// Returns the reviews shown for the book with `index`.
    ///
    /// Reviews exist only for rows that have been selected since the last
    /// parameter change.
    #[must_use]
    pub fn reviews_for(&self, index: u64) -> &[Review] {
        self.reviews
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn reset(&mut self, params: CatalogueParams) {
        info!(
            seed = params.seed,
            locale = %params.locale,
            likes = params.likes,
            reviews = params.reviews,
            "catalogue reset"
        );
        self.params = params;
        self.books.clear();
        self.reviews.clear();
        self.selected = None;
        self.review_faker.set_locale(params.locale);
        self.append_page(PageNumber::FIRST);
    }

    fn append_page(&mut self, page: PageNumber) {
        self.books.extend(generate_books(&self.params, page));
        self.last_loaded = page;
        debug!(
            page = page.get(),
            loaded = self.books.len(),
            "catalogue page appended"
        );
    }

    fn select(&mut self, index: u64) {
        let Some(book) = loaded_book(&self.books, index) else {
            debug!(index, "ignoring selection of a row that is not loaded");
            return;
        };
        let faker = &mut self.review_faker;
        self.reviews
            .entry(index)
            .or_insert_with(|| synthesize_reviews(book, faker));
        self.selected = Some(index);
    }
}

fn loaded_book(books: &[Book], index: u64) -> Option<&Book> {
    index
        .checked_sub(1)
        .and_then(|offset| usize::try_from(offset).ok())
        .and_then(|offset| books.get(offset))
        .filter(|book| book.index == index)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::locale::Locale;

    #[fixture]
    fn catalogue() -> Catalogue {
        Catalogue::with_review_seed(CatalogueParams::default(), 99)
    }

    fn indices(catalogue: &Catalogue) -> Vec<u64> {
        catalogue.books().iter().map(|book| book.index).collect()
    }

    #[rstest]
    fn starts_with_the_first_page(catalogue: Catalogue) {
        assert_eq!(catalogue.loaded_pages(), 1);
        assert_eq!(indices(&catalogue), (1..=20).collect::<Vec<_>>());
        assert!(catalogue.selected().is_none());
    }

    #[rstest]
    fn scrolling_appends_the_next_page(mut catalogue: Catalogue) {
        catalogue
            .apply(CatalogueEvent::ScrolledToBottom)
            .expect("second page");
        catalogue
            .apply(CatalogueEvent::ScrolledToBottom)
            .expect("third page");

        assert_eq!(catalogue.loaded_pages(), 3);
        assert_eq!(indices(&catalogue), (1..=60).collect::<Vec<_>>());

        let third = generate_books(catalogue.params(), PageNumber::new(3).expect("page"));
        assert_eq!(catalogue.books().get(40..), Some(third.as_slice()));
    }

    #[rstest]
    fn params_change_resets_to_the_first_page(mut catalogue: Catalogue) {
        catalogue
            .apply(CatalogueEvent::ScrolledToBottom)
            .expect("second page");
        catalogue
            .apply(CatalogueEvent::RowSelected(25))
            .expect("select");

        let params = CatalogueParams {
            seed: 7,
            locale: Locale::DeDe,
            ..CatalogueParams::default()
        };
        catalogue
            .apply(CatalogueEvent::ParamsChanged(params))
            .expect("reset");

        assert_eq!(catalogue.loaded_pages(), 1);
        assert_eq!(catalogue.params(), &params);
        assert_eq!(catalogue.books(), generate_books(&params, PageNumber::FIRST));
        assert!(catalogue.selected().is_none());
        assert!(catalogue.reviews_for(25).is_empty());
    }

    #[rstest]
    fn selecting_a_loaded_row_expands_it(mut catalogue: Catalogue) {
        catalogue
            .apply(CatalogueEvent::RowSelected(5))
            .expect("select");

        assert_eq!(catalogue.selected().map(|book| book.index), Some(5));
    }

    #[rstest]
    #[case(0)]
    #[case(21)]
    fn selecting_an_unloaded_row_is_ignored(mut catalogue: Catalogue, #[case] index: u64) {
        catalogue
            .apply(CatalogueEvent::RowSelected(index))
            .expect("select");

        assert!(catalogue.selected().is_none());
    }

    #[rstest]
    fn closing_the_detail_clears_the_selection(mut catalogue: Catalogue) {
        catalogue
            .apply(CatalogueEvent::RowSelected(3))
            .expect("select");
        catalogue
            .apply(CatalogueEvent::DetailClosed)
            .expect("close");

        assert!(catalogue.selected().is_none());
    }

    #[rstest]
    fn selected_rows_get_one_review_per_count(mut catalogue: Catalogue) {
        catalogue
            .apply(CatalogueEvent::ScrolledToBottom)
            .expect("second page");

        for index in [1, 20, 21, 40] {
            catalogue
                .apply(CatalogueEvent::RowSelected(index))
                .expect("select");
            let book = catalogue.selected().expect("selected book");
            let expected = usize::try_from(book.reviews).expect("small count");
            assert_eq!(catalogue.reviews_for(index).len(), expected);
        }
    }

    #[test]
    fn loading_pages_without_selection_builds_no_reviews() {
        let params = CatalogueParams {
            reviews: 200_000.0,
            ..CatalogueParams::default()
        };
        let mut catalogue = Catalogue::with_review_seed(params, 1);
        catalogue
            .apply(CatalogueEvent::ScrolledToBottom)
            .expect("second page");

        assert!(catalogue.reviews.is_empty());
        assert!(catalogue.reviews_for(1).is_empty());
    }

    #[rstest]
    fn reselecting_a_row_keeps_its_reviews(mut catalogue: Catalogue) {
        let index = catalogue
            .books()
            .iter()
            .find(|book| book.reviews > 0)
            .map(|book| book.index)
            .expect("a book with reviews");

        catalogue
            .apply(CatalogueEvent::RowSelected(index))
            .expect("select");
        let first = catalogue.reviews_for(index).to_vec();
        catalogue
            .apply(CatalogueEvent::DetailClosed)
            .expect("close");
        catalogue
            .apply(CatalogueEvent::RowSelected(index))
            .expect("select again");

        assert_eq!(catalogue.reviews_for(index), first.as_slice());
        assert_eq!(catalogue.reviews.len(), 1);
    }

    #[test]
    fn entropy_seeded_catalogues_share_book_data() {
        let first = Catalogue::new(CatalogueParams::default());
        let second = Catalogue::new(CatalogueParams::default());

        assert_eq!(first.books(), second.books());
    }

    #[test]
    fn book_lookup_matches_index() {
        let catalogue = Catalogue::with_review_seed(CatalogueParams::default(), 1);
        for book in catalogue.books() {
            assert_eq!(catalogue.book(book.index), Some(book));
        }
        assert!(catalogue.book(0).is_none());
        assert!(catalogue.book(u64::MAX).is_none());
    }
}
