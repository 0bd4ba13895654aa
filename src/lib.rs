//! Big Five personality inventory
//!
//! Administers the fixed 50-item inventory ten questions at a time, scores
//! the five traits, and keeps result history for signed-in users.
//!
//! # Quick Start
//!
//! ```ignore
//! use bigfive::{CompleteAnswers, Rating, ResultsParams, ResultsScreen, Services};
//!
//! let services = Services::in_memory();
//! let answers = CompleteAnswers::uniform(Rating::new(3)?);
//! let report = ResultsScreen::new(ResultsParams::Answers(answers)).render(&services);
//! println!("{}", report.headline());
//! ```
//!
//! # Architecture
//!
//! - [`model`]: questions, answer collection, scoring (no I/O)
//! - [`engine`]: identity provider and document store contracts with local
//!   implementations, configuration
//! - screens ([`TestScreen`], [`ResultsScreen`], [`ProfileScreen`], forms)
//!   are re-exported at the crate root

pub use bigfive_core as model;
pub use bigfive_engine as engine;

pub use bigfive_core::{
    describe, score, AnswerVector, CompleteAnswers, PageNumber, Question, Rating, RecordId,
    Trait, TraitScores, UserId, QUESTIONS,
};
pub use bigfive_engine::{
    DocumentStore, IdentityProvider, LocalDocumentStore, LocalIdentity, QuizConfig,
    StoredTestResult, Subscription, UserRef,
};
pub use bigfive_executor::*;
