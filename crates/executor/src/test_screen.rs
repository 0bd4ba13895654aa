//! The paged questionnaire.

use crate::error::Result;
use crate::route::Route;
use bigfive_core::{Advance, AnswerVector, PageNumber, PageState, Rating, PAGE_COUNT};
use serde::Serialize;

/// Label shown under the lowest rating.
pub const SCALE_LOW_LABEL: &str = "Strongly Disagree";
/// Label shown under the highest rating.
pub const SCALE_HIGH_LABEL: &str = "Strongly Agree";

/// One question as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// 1-based question id
    pub id: u32,
    /// Statement text
    pub text: &'static str,
    /// Current selection
    pub selected: Option<Rating>,
}

/// Everything needed to draw a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Page shown
    pub page: PageNumber,
    /// Total number of pages
    pub page_count: u8,
    /// The page's questions, in order
    pub items: Vec<QuestionView>,
    /// Whether "Previous" is enabled
    pub can_go_back: bool,
    /// Whether "Next" leads to the results
    pub is_last: bool,
}

/// A test page: this page's selections plus the answers carried in from
/// earlier navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScreen {
    answers: AnswerVector,
    page: PageState,
}

impl TestScreen {
    /// Enter `page` with the answers carried by the route.
    pub fn enter(page: PageNumber, answers: AnswerVector) -> Self {
        let state = PageState::enter(page, &answers);
        Self {
            answers,
            page: state,
        }
    }

    /// Build from a [`Route::Test`]; `None` for any other route.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Test { page, answers } => Some(Self::enter(*page, answers.clone())),
            _ => None,
        }
    }

    /// Current page number.
    pub fn page(&self) -> PageNumber {
        self.page.page()
    }

    /// Answers as they were when this page was entered.
    pub fn answers(&self) -> &AnswerVector {
        &self.answers
    }

    /// This page's state.
    pub fn state(&self) -> &PageState {
        &self.page
    }

    /// The page as it should be drawn.
    pub fn view(&self) -> PageView {
        let page = self.page.page();
        let items = page
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionView {
                id: q.id,
                text: q.text,
                selected: self.page.selection(i),
            })
            .collect();
        PageView {
            page,
            page_count: PAGE_COUNT,
            items,
            can_go_back: page.previous().is_some(),
            is_last: page.next().is_none(),
        }
    }

    /// Select a rating for the question at `index_on_page`.
    pub fn select(&mut self, index_on_page: usize, rating: Rating) -> Result<()> {
        self.page.select(index_on_page, rating)?;
        Ok(())
    }

    /// Unset the question at `index_on_page`.
    pub fn clear(&mut self, index_on_page: usize) -> Result<()> {
        self.page.clear(index_on_page)?;
        Ok(())
    }

    /// "Next": the following page, or the results after the last page.
    ///
    /// An incomplete page leaves the screen untouched and returns the error.
    pub fn next(&self) -> Result<Route> {
        let route = match self.page.advance(&self.answers)? {
            Advance::Page { page, answers } => Route::Test { page, answers },
            Advance::Complete(answers) => Route::results_for(answers),
        };
        Ok(route)
    }

    /// "Previous": the preceding page, keeping partial answers.
    pub fn previous(&self) -> Result<Route> {
        let retreat = self.page.retreat(&self.answers)?;
        Ok(Route::Test {
            page: retreat.page,
            answers: retreat.answers,
        })
    }
}
