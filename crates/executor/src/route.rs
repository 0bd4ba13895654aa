//! Navigation parameters.
//!
//! Screens hand control to each other by returning a [`Route`]. A route
//! carries everything the next screen needs by value: the test page and
//! the global answer vector, or the inputs to the results screen. No screen
//! holds a reference into another screen's state.

use bigfive_core::{AnswerVector, CompleteAnswers, PageNumber, TraitScores};
use serde::{Deserialize, Serialize};

/// Inputs to the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsParams {
    /// A freshly completed test; scored and saved once
    Answers(CompleteAnswers),
    /// A result from history; shown as-is, never saved again
    Stored(TraitScores),
}

/// A screen plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    /// Landing screen
    Welcome,
    /// One page of the test
    Test {
        /// Page to show
        page: PageNumber,
        /// Answers collected so far
        answers: AnswerVector,
    },
    /// Trait scores
    Results {
        /// What to show
        params: ResultsParams,
    },
    /// Account creation
    SignUp,
    /// Sign-in
    Login,
    /// Account page with history
    Profile,
    /// Trait reference
    Traits,
}

impl Route {
    /// Page one of a fresh test.
    pub fn start_test() -> Self {
        Route::Test {
            page: PageNumber::FIRST,
            answers: AnswerVector::new(),
        }
    }

    /// Results for a freshly completed test.
    pub fn results_for(answers: CompleteAnswers) -> Self {
        Route::Results {
            params: ResultsParams::Answers(answers),
        }
    }

    /// Results redisplayed from history.
    pub fn stored_results(scores: TraitScores) -> Self {
        Route::Results {
            params: ResultsParams::Stored(scores),
        }
    }

    /// Screen title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Test { .. } => "Test",
            Route::Results { .. } => "Results",
            Route::SignUp => "Sign Up",
            Route::Login => "Log In",
            Route::Profile => "Profile",
            Route::Traits => "Traits",
        }
    }
}
