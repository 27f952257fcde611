//! Page numbering primitives for the book catalogue.
//!
//! Pages are one-based and hold a fixed number of records. A record's global
//! index is derived from the page number and its slot within the page, so
//! indices stay contiguous and ascending across pages.
//!
//! # Example
//!
//! ```
//! use pagination::{PAGE_SIZE, PageNumber};
//!
//! let page = PageNumber::new(2).expect("non-zero page");
//! assert_eq!(page.first_index(), u64::from(PAGE_SIZE) + 1);
//! assert_eq!(page.slot_index(0), 21);
//! assert_eq!(page.index_range(), 21..=40);
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of records in every page.
pub const PAGE_SIZE: u32 = 20;

/// Errors raised when constructing or advancing page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    /// Page numbers start at one.
    #[error("page numbers start at 1")]
    Zero,
    /// The page counter cannot advance any further.
    #[error("page {current} is the last addressable page")]
    Overflow {
        /// Page that could not be advanced.
        current: u32,
    },
}

/// A one-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Zero`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, PageError> {
        NonZeroU32::new(value).map(Self).ok_or(PageError::Zero)
    }

    /// Returns the raw one-based page number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the page that follows this one.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Overflow`] when this is the last addressable page.
    pub fn next(self) -> Result<Self, PageError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(PageError::Overflow { current: self.get() })
    }

    /// Returns the global index of the first record on this page.
    #[must_use]
    pub fn first_index(self) -> u64 {
        u64::from(self.get() - 1) * u64::from(PAGE_SIZE) + 1
    }

    /// Returns the global index of the record in `slot` (zero-based).
    #[must_use]
    pub fn slot_index(self, slot: u32) -> u64 {
        self.first_index() + u64::from(slot)
    }

    /// Returns the inclusive range of global indices held by this page.
    #[must_use]
    pub fn index_range(self) -> RangeInclusive<u64> {
        let first = self.first_index();
        first..=first + u64::from(PAGE_SIZE - 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = PageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

#[cfg(test)]
mod tests {
    //! Covers page construction, index arithmetic, and serialisation.

    use rstest::rstest;

    use super::*;

    #[test]
    fn rejects_page_zero() {
        assert_eq!(PageNumber::new(0), Err(PageError::Zero));
    }

    #[test]
    fn first_page_is_default() {
        assert_eq!(PageNumber::default(), PageNumber::FIRST);
        assert_eq!(PageNumber::FIRST.get(), 1);
    }

    #[rstest]
    #[case(1, 1, 20)]
    #[case(2, 21, 40)]
    #[case(7, 121, 140)]
    fn index_range_is_contiguous(#[case] page: u32, #[case] first: u64, #[case] last: u64) {
        let number = PageNumber::new(page).expect("non-zero page");

        assert_eq!(number.index_range(), first..=last);
        assert_eq!(number.slot_index(0), first);
        assert_eq!(number.slot_index(PAGE_SIZE - 1), last);
    }

    #[test]
    fn last_page_index_does_not_overflow() {
        let page = PageNumber::new(u32::MAX).expect("non-zero page");

        assert_eq!(
            *page.index_range().end(),
            u64::from(u32::MAX) * u64::from(PAGE_SIZE)
        );
    }

    #[test]
    fn next_advances_by_one() {
        let page = PageNumber::FIRST.next().expect("second page");
        assert_eq!(page.get(), 2);
    }

    #[test]
    fn next_reports_overflow() {
        let page = PageNumber::new(u32::MAX).expect("non-zero page");
        assert_eq!(page.next(), Err(PageError::Overflow { current: u32::MAX }));
    }

    #[test]
    fn serializes_as_plain_number() {
        let page = PageNumber::new(3).expect("non-zero page");
        let json = serde_json::to_string(&page).expect("serialize");
        assert_eq!(json, "3");
    }

    #[test]
    fn deserialization_rejects_zero() {
        let result: Result<PageNumber, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn errors_format_readably() {
        assert_eq!(PageError::Zero.to_string(), "page numbers start at 1");
        assert_eq!(
            PageError::Overflow { current: 9 }.to_string(),
            "page 9 is the last addressable page"
        );
    }
}
