//! Generated book records.

use serde::{Deserialize, Serialize};

/// A fictitious book record.
///
/// Records are immutable once generated. `reviews` is a count only; review
/// text is synthesised separately by the catalogue shell.
///
/// # Example
///
/// ```
/// use book_data::Book;
///
/// let book = Book {
///     index: 1,
///     isbn: "0000000000001".to_owned(),
///     title: "Quia Amet".to_owned(),
///     author: "Ada Lovelace".to_owned(),
///     publisher: "Analytical Engines Ltd".to_owned(),
///     likes: 3,
///     reviews: 0,
/// };
///
/// assert_eq!(book.isbn.len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Global, one-based position in the catalogue.
    pub index: u64,
    /// Thirteen ASCII digits.
    pub isbn: String,
    /// Word-capitalised title of one to five words.
    pub title: String,
    /// Full name of the author.
    pub author: String,
    /// Publisher company name.
    pub publisher: String,
    /// Number of likes, saturating at [`u32::MAX`].
    pub likes: u32,
    /// Number of reviews, saturating at [`u32::MAX`].
    pub reviews: u32,
}
