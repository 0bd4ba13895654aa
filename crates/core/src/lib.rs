//! Core types and logic for the Big Five inventory
//!
//! This crate has no I/O. It defines:
//! - Questions: the fixed, ordered 50-item inventory
//! - Answers: partially filled [`AnswerVector`] and scoring-ready [`CompleteAnswers`]
//! - Paging: the ten-per-page answer collector ([`PageState`])
//! - Scoring: raw sums, normalization and strongest-trait selection ([`TraitScores`])
//! - Descriptions: display metadata for each trait
//! - Timestamp, ids and the [`Error`] type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answers;
pub mod descriptions;
pub mod error;
pub mod paging;
pub mod questions;
pub mod scoring;
pub mod timestamp;
pub mod types;

pub use answers::{AnswerVector, CompleteAnswers};
pub use descriptions::{describe, TraitDescription, DESCRIPTIONS};
pub use error::{Error, Result};
pub use paging::{Advance, PageNumber, PageState, Retreat, PAGE_COUNT, QUESTIONS_PER_PAGE};
pub use questions::{question, Question, QUESTIONS, QUESTION_COUNT};
pub use scoring::{normalize, score, RawScores, Trait, TraitScores, MIDPOINT, RAW_SCALE};
pub use timestamp::Timestamp;
pub use types::{Rating, RecordId, UserId};
