//! Ephemeral review text for the detail panel.
//!
//! Reviews are presentation content. They are drawn from whatever faker the
//! caller supplies and are not part of a [`Book`] record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::faker::LocaleFaker;

/// A synthesised reader review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer's first and last name.
    pub reviewer: String,
    /// Company the reviewer writes for.
    pub company: String,
    /// Review body.
    pub text: String,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wrote: \"{}\"", self.reviewer, self.text)
    }
}

/// Synthesises `book.reviews` reviews using `faker`.
///
/// # Example
///
/// ```
/// use book_data::{CatalogueParams, Locale, LocaleFaker, generate_books, synthesize_reviews};
/// use pagination::PageNumber;
///
/// let books = generate_books(&CatalogueParams::default(), PageNumber::FIRST);
/// let mut faker = LocaleFaker::new(Locale::EnUs, 1);
///
/// for book in &books {
///     let reviews = synthesize_reviews(book, &mut faker);
///     assert_eq!(reviews.len(), book.reviews as usize);
/// }
/// ```
pub fn synthesize_reviews(book: &Book, faker: &mut LocaleFaker) -> Vec<Review> {
    (0..book.reviews)
        .map(|_| {
            let reviewer = format!("{} {}", faker.first_name(), faker.last_name());
            let company = faker.company_name();
            let text = faker.sentence();
            Review {
                reviewer,
                company,
                text,
            }
        })
        .collect()
}
