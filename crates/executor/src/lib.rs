//! # Big Five Executor
//!
//! Screen-level flow for the Big Five inventory. Each screen is a plain
//! struct driven by method calls; moving between screens means returning a
//! [`Route`] that carries the next screen's inputs by value.
//!
//! ## Flow
//!
//! ```text
//! use bigfive_executor::{Route, Services, TestScreen, ResultsScreen};
//!
//! let services = Services::in_memory();
//! let mut route = Route::start_test();
//! while let Some(mut page) = TestScreen::from_route(&route) {
//!     page.select(0, rating)?;        // ... all ten questions
//!     route = page.next()?;           // Incomplete pages are rejected
//! }
//! if let Route::Results { params } = route {
//!     let report = ResultsScreen::new(params).render(&services);
//!     println!("{}", report.headline());
//! }
//! ```
//!
//! ## Screens
//!
//! | Screen | Type |
//! |--------|------|
//! | Test page | [`TestScreen`] |
//! | Results | [`ResultsScreen`] |
//! | Profile | [`ProfileScreen`] |
//! | Login / Sign up | [`LoginForm`] / [`SignUpForm`] |
//!
//! Errors are [`Error`]s; [`Error::notice`] turns them into the alert the
//! user sees.

#![warn(missing_docs)]

mod auth;
mod error;
mod profile;
mod results;
mod route;
mod services;
mod test_screen;

// Test modules
#[cfg(test)]
mod tests;

pub use auth::{LoginForm, SignUpForm};
pub use error::{Action, Error, Notice, Result};
pub use profile::{ProfileScreen, ProfileState, ProfileUser, NAME_PLACEHOLDER, NO_EMAIL};
pub use results::{ResultsReport, ResultsScreen, TraitRow};
pub use route::{ResultsParams, Route};
pub use services::Services;
pub use test_screen::{PageView, QuestionView, TestScreen, SCALE_HIGH_LABEL, SCALE_LOW_LABEL};
