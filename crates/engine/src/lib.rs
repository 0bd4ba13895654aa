//! Collaborators for the Big Five inventory
//!
//! The scoring and paging core is pure; everything stateful that sits around
//! it lives here:
//! - Identity: [`IdentityProvider`] contract and [`LocalIdentity`]
//! - History: [`DocumentStore`] contract and [`LocalDocumentStore`]
//! - Live feeds: [`Observers`] and cancellable [`Subscription`] handles
//! - Configuration: [`QuizConfig`] loaded from `bigfive.toml`
//!
//! Both local collaborators run purely in memory or, when opened on a data
//! directory, keep a JSON snapshot there (`accounts.json`, `tests.json`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod identity;
mod persist;
pub mod store;
pub mod subscription;

pub use config::{QuizConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use identity::{AuthCallback, IdentityProvider, LocalIdentity, UserRef, ACCOUNTS_FILE_NAME};
pub use store::{
    DocumentStore, HistoryCallback, HistoryUpdate, LocalDocumentStore, StoredTestResult,
    HISTORY_FILE_NAME,
};
pub use subscription::{Callback, Observers, Subscription};
