//! Answer collector: the paged question flow
//!
//! The 50 questions are presented ten at a time on pages `1..=5`. Each page
//! works on its own [`PageState`], built from the global [`AnswerVector`] on
//! entry and merged back on exit:
//!
//! ```text
//!   enter(n, answers) ──► PageState ──select──► PageState
//!                            │
//!            advance ────────┼──────── retreat
//!      (all 10 set, else     │     (no validation, n > 1)
//!       IncompletePage)      │
//!            ▼                             ▼
//!   Page(n+1) | Complete(50)          Page(n-1)
//! ```
//!
//! A failed advance changes nothing: the caller keeps both its page state
//! and its global vector. Merging is positional, so replaying the same
//! enter/advance sequence always writes the same slice at the same offset.

use crate::answers::{AnswerVector, CompleteAnswers};
use crate::error::{Error, Result};
use crate::questions::{Question, QUESTIONS, QUESTION_COUNT};
use crate::types::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Questions shown on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Number of pages in the inventory.
pub const PAGE_COUNT: u8 = (QUESTION_COUNT / QUESTIONS_PER_PAGE) as u8;

/// A page number in `1..=PAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PageNumber(u8);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(1);
    /// The last page; advancing from it completes the inventory.
    pub const LAST: PageNumber = PageNumber(PAGE_COUNT);

    /// Create a page number, rejecting values outside `1..=PAGE_COUNT`.
    pub fn new(page: u8) -> Result<Self> {
        if (1..=PAGE_COUNT).contains(&page) {
            Ok(PageNumber(page))
        } else {
            Err(Error::InvalidPage {
                page: i64::from(page),
            })
        }
    }

    /// Raw page number.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index of the first question on this page.
    #[inline]
    pub const fn offset(self) -> usize {
        (self.0 as usize - 1) * QUESTIONS_PER_PAGE
    }

    /// The following page, or `None` on the last page.
    pub fn next(self) -> Option<PageNumber> {
        PageNumber::new(self.0 + 1).ok()
    }

    /// The preceding page, or `None` on the first page.
    pub fn previous(self) -> Option<PageNumber> {
        PageNumber::new(self.0.wrapping_sub(1)).ok()
    }

    /// The questions shown on this page.
    pub fn questions(self) -> &'static [Question] {
        let start = self.offset();
        &QUESTIONS[start..start + QUESTIONS_PER_PAGE]
    }
}

impl TryFrom<u8> for PageNumber {
    type Error = Error;

    fn try_from(page: u8) -> Result<Self> {
        PageNumber::new(page)
    }
}

impl From<PageNumber> for u8 {
    fn from(p: PageNumber) -> Self {
        p.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a successful [`PageState::advance`] leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Another page follows; carries the merged global vector.
    Page {
        /// Page to enter next
        page: PageNumber,
        /// Global vector with this page merged in
        answers: AnswerVector,
    },
    /// The last page was completed; hand the vector to the scorer.
    Complete(CompleteAnswers),
}

/// Result of a successful [`PageState::retreat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retreat {
    /// Page to enter next
    pub page: PageNumber,
    /// Global vector with this page's partial answers merged in
    pub answers: AnswerVector,
}

/// Answers for the page currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: PageNumber,
    answers: [Option<Rating>; QUESTIONS_PER_PAGE],
}

impl PageState {
    /// Enter a page, rehydrating its answers from the global vector.
    ///
    /// Slots never answered come back unset.
    pub fn enter(page: PageNumber, global: &AnswerVector) -> Self {
        let start = page.offset();
        let mut answers = [None; QUESTIONS_PER_PAGE];
        answers.copy_from_slice(global.slice(start, start + QUESTIONS_PER_PAGE));
        PageState { page, answers }
    }

    /// The page this state belongs to.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Current selections, in on-page order.
    pub fn answers(&self) -> &[Option<Rating>; QUESTIONS_PER_PAGE] {
        &self.answers
    }

    /// Selection for an on-page index.
    pub fn selection(&self, index_on_page: usize) -> Option<Rating> {
        self.answers.get(index_on_page).copied().flatten()
    }

    /// Record a rating for one question on this page.
    ///
    /// Touches only the page state, never the global vector.
    pub fn select(&mut self, index_on_page: usize, rating: Rating) -> Result<()> {
        let slot = self
            .answers
            .get_mut(index_on_page)
            .ok_or(Error::QuestionOutOfRange {
                index: index_on_page,
            })?;
        *slot = Some(rating);
        Ok(())
    }

    /// Clear the selection for one question on this page.
    pub fn clear(&mut self, index_on_page: usize) -> Result<()> {
        let slot = self
            .answers
            .get_mut(index_on_page)
            .ok_or(Error::QuestionOutOfRange {
                index: index_on_page,
            })?;
        *slot = None;
        Ok(())
    }

    /// 1-based ids of the questions on this page still unanswered.
    pub fn unanswered(&self) -> Vec<u32> {
        let first_id = self.page.offset() as u32 + 1;
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| first_id + i as u32)
            .collect()
    }

    /// True when all ten questions are answered.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Copy this page's answers into `global` at the page offset.
    pub fn merge_into(&self, global: &mut AnswerVector) {
        global.write_at(self.page.offset(), &self.answers);
    }

    /// Validate the page and move forward.
    ///
    /// Fails with [`Error::IncompletePage`] if any of the ten slots is unset;
    /// in that case neither `self` nor `global` is touched.
    pub fn advance(&self, global: &AnswerVector) -> Result<Advance> {
        let unanswered = self.unanswered();
        if !unanswered.is_empty() {
            debug!(target: "bigfive::collector", page = self.page.get(), missing = unanswered.len(), "Advance rejected");
            return Err(Error::IncompletePage {
                page: self.page.get(),
                unanswered,
            });
        }

        let mut merged = global.clone();
        self.merge_into(&mut merged);

        match self.page.next() {
            Some(page) => {
                debug!(target: "bigfive::collector", from = self.page.get(), to = page.get(), "Page advanced");
                Ok(Advance::Page {
                    page,
                    answers: merged,
                })
            }
            None => {
                let complete = merged.complete()?;
                debug!(target: "bigfive::collector", "Inventory complete");
                Ok(Advance::Complete(complete))
            }
        }
    }

    /// Move back one page, keeping partial answers.
    ///
    /// Fails with [`Error::NoPreviousPage`] on the first page.
    pub fn retreat(&self, global: &AnswerVector) -> Result<Retreat> {
        let page = self.page.previous().ok_or(Error::NoPreviousPage)?;
        let mut merged = global.clone();
        self.merge_into(&mut merged);
        debug!(target: "bigfive::collector", from = self.page.get(), to = page.get(), "Page retreated");
        Ok(Retreat {
            page,
            answers: merged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    fn page(n: u8) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    fn fill(state: &mut PageState, value: u8) {
        for i in 0..QUESTIONS_PER_PAGE {
            state.select(i, r(value)).unwrap();
        }
    }

    #[test]
    fn test_page_number_bounds() {
        assert_eq!(PAGE_COUNT, 5);
        assert!(PageNumber::new(0).is_err());
        assert!(PageNumber::new(6).is_err());
        assert_eq!(page(1).previous(), None);
        assert_eq!(page(5).next(), None);
        assert_eq!(page(3).next(), Some(page(4)));
        assert_eq!(page(3).previous(), Some(page(2)));
    }

    #[test]
    fn test_page_offsets_and_questions() {
        assert_eq!(page(1).offset(), 0);
        assert_eq!(page(5).offset(), 40);
        let qs = page(2).questions();
        assert_eq!(qs.len(), 10);
        assert_eq!(qs[0].id, 11);
        assert_eq!(qs[9].id, 20);
    }

    #[test]
    fn test_enter_fresh_page_is_unset() {
        let state = PageState::enter(page(3), &AnswerVector::new());
        assert_eq!(state.page(), page(3));
        assert!(state.answers().iter().all(Option::is_none));
        assert_eq!(state.unanswered(), (21..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_enter_rehydrates_slice() {
        let mut global = AnswerVector::new();
        global.set(10, Some(r(2))).unwrap();
        global.set(19, Some(r(5))).unwrap();
        global.set(20, Some(r(1))).unwrap();

        let state = PageState::enter(page(2), &global);
        assert_eq!(state.selection(0), Some(r(2)));
        assert_eq!(state.selection(9), Some(r(5)));
        assert_eq!(state.selection(1), None);
    }

    #[test]
    fn test_select_does_not_touch_global() {
        let global = AnswerVector::new();
        let mut state = PageState::enter(page(1), &global);
        state.select(4, r(3)).unwrap();
        assert_eq!(state.selection(4), Some(r(3)));
        assert_eq!(global.answered(), 0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = PageState::enter(page(1), &AnswerVector::new());
        assert_eq!(
            state.select(10, r(3)),
            Err(Error::QuestionOutOfRange { index: 10 })
        );
    }

    #[test]
    fn test_advance_rejects_incomplete_page() {
        let global = AnswerVector::new();
        let mut state = PageState::enter(page(2), &global);
        for i in 0..9 {
            state.select(i, r(4)).unwrap();
        }
        let before = state.clone();

        let err = state.advance(&global).unwrap_err();
        assert_eq!(
            err,
            Error::IncompletePage {
                page: 2,
                unanswered: vec![20]
            }
        );
        assert_eq!(state, before);
        assert_eq!(global, AnswerVector::new());
    }

    #[test]
    fn test_advance_merges_at_offset() {
        let global = AnswerVector::new();
        let mut state = PageState::enter(page(2), &global);
        fill(&mut state, 4);

        match state.advance(&global).unwrap() {
            Advance::Page { page: next, answers } => {
                assert_eq!(next, page(3));
                assert_eq!(answers.answered(), 10);
                assert_eq!(answers.get(9), None);
                assert_eq!(answers.get(10), Some(r(4)));
                assert_eq!(answers.get(19), Some(r(4)));
                assert_eq!(answers.get(20), None);
            }
            other => panic!("expected next page, got {:?}", other),
        }
    }

    #[test]
    fn test_advance_from_last_page_completes() {
        let mut global = AnswerVector::new();
        for i in 0..40 {
            global.set(i, Some(r(2))).unwrap();
        }
        let mut state = PageState::enter(page(5), &global);
        fill(&mut state, 5);

        match state.advance(&global).unwrap() {
            Advance::Complete(c) => {
                assert_eq!(c.value(0), 2);
                assert_eq!(c.value(39), 2);
                assert_eq!(c.value(40), 5);
                assert_eq!(c.value(49), 5);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_advance_from_last_page_with_gaps_earlier() {
        // Page 5 is complete but page 1 was never filled.
        let global = AnswerVector::new();
        let mut state = PageState::enter(page(5), &global);
        fill(&mut state, 3);
        assert_eq!(
            state.advance(&global),
            Err(Error::IncompleteAnswers { unanswered: 40 })
        );
    }

    #[test]
    fn test_retreat_keeps_partial_answers() {
        let global = AnswerVector::new();
        let mut state = PageState::enter(page(2), &global);
        state.select(0, r(1)).unwrap();

        let back = state.retreat(&global).unwrap();
        assert_eq!(back.page, page(1));
        assert_eq!(back.answers.get(10), Some(r(1)));
        assert_eq!(back.answers.answered(), 1);
    }

    #[test]
    fn test_retreat_from_first_page_is_disallowed() {
        let state = PageState::enter(page(1), &AnswerVector::new());
        assert_eq!(
            state.retreat(&AnswerVector::new()),
            Err(Error::NoPreviousPage)
        );
    }

    #[test]
    fn test_forward_back_round_trip() {
        let mut state = PageState::enter(page(1), &AnswerVector::new());
        for i in 0..QUESTIONS_PER_PAGE {
            state.select(i, r((i % 5) as u8 + 1)).unwrap();
        }
        let expected = *state.answers();

        let global = match state.advance(&AnswerVector::new()).unwrap() {
            Advance::Page { answers, .. } => answers,
            other => panic!("unexpected {:?}", other),
        };
        let page2 = PageState::enter(page(2), &global);
        let back = page2.retreat(&global).unwrap();
        let again = PageState::enter(back.page, &back.answers);
        assert_eq!(again.answers(), &expected);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut state = PageState::enter(page(4), &AnswerVector::new());
        fill(&mut state, 2);

        let mut once = AnswerVector::new();
        state.merge_into(&mut once);
        let mut twice = once.clone();
        state.merge_into(&mut twice);
        assert_eq!(once, twice);
    }
}
