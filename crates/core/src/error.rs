//! Error types for the core inventory logic
//!
//! Every failure in this crate is a validation failure: a value outside its
//! allowed range, or an attempt to move past a page that is not fully
//! answered. None of them are fatal and none of them leave partial state
//! behind. We use `thiserror` for the `Display` and `Error` impls.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the core inventory logic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rating outside the 1..=5 scale
    #[error("invalid rating {value}: expected 1 to 5")]
    InvalidRating {
        /// The rejected value
        value: i64,
    },

    /// Page number outside 1..=PAGE_COUNT
    #[error("invalid page {page}: expected 1 to {max}", max = crate::paging::PAGE_COUNT)]
    InvalidPage {
        /// The rejected page number
        page: i64,
    },

    /// Question index outside the page (or the inventory)
    #[error("question index {index} out of range")]
    QuestionOutOfRange {
        /// The rejected index
        index: usize,
    },

    /// Advance attempted with unanswered questions on the current page
    #[error("incomplete page {page}: unanswered questions {unanswered:?}")]
    IncompletePage {
        /// Page that failed validation
        page: u8,
        /// 1-based ids of the unanswered questions
        unanswered: Vec<u32>,
    },

    /// Scoring attempted on an answer vector with unset entries
    #[error("incomplete answers: {unanswered} of 50 questions unanswered")]
    IncompleteAnswers {
        /// Number of unset entries
        unanswered: usize,
    },

    /// Retreat attempted from the first page
    #[error("already on the first page")]
    NoPreviousPage,

    /// Sequence of the wrong length supplied where a fixed size is required
    #[error("wrong length: expected {expected}, got {actual}")]
    WrongLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },
}

impl Error {
    /// Returns true for the incomplete-page validation failure.
    pub fn is_incomplete_page(&self) -> bool {
        matches!(self, Error::IncompletePage { .. })
    }
}
