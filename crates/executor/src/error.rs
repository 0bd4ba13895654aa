//! Error types for screen actions.
//!
//! Screen actions fail with [`Error`]. Before anything reaches the user it is
//! turned into a [`Notice`]: a short title plus message, chosen by what the
//! user was trying to do ([`Action`]). Nothing here is fatal; every notice
//! leaves the screen in a state the user can retry from.

use serde::Serialize;

/// Screen action errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Sign-up password and confirmation differ
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// Input rejected by the core (incomplete page, bad rating, ...)
    #[error(transparent)]
    Validation(#[from] bigfive_core::Error),

    /// Identity provider or document store failure
    #[error(transparent)]
    Service(#[from] bigfive_engine::Error),
}

/// Result type for screen actions
pub type Result<T> = std::result::Result<T, Error>;

/// What the user was doing when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Answering questions or moving between pages
    Answer,
    /// Logging in
    SignIn,
    /// Creating an account
    SignUp,
    /// Logging out
    SignOut,
    /// Deleting a stored result
    DeleteTest,
    /// Editing the display name
    EditName,
}

/// A user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Alert title
    pub title: &'static str,
    /// Alert body
    pub message: String,
}

impl Notice {
    fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl Error {
    /// The alert to show for this error during `action`.
    pub fn notice(&self, action: Action) -> Notice {
        match (self, action) {
            (Error::Validation(e), _) if e.is_incomplete_page() => Notice::new(
                "Incomplete",
                "Please answer all questions before proceeding.",
            ),
            (Error::PasswordMismatch, _) => Notice::new("Error", "Passwords do not match."),
            (_, Action::SignIn) => Notice::new("Login Error", self.to_string()),
            (_, Action::SignUp) => Notice::new("Sign Up Error", self.to_string()),
            (_, Action::SignOut) => Notice::new("Logout Error", self.to_string()),
            (_, Action::DeleteTest) => Notice::new("Error", "Failed to delete test."),
            (_, Action::EditName) => Notice::new("Error", "Failed to update name."),
            (_, Action::Answer) => Notice::new("Error", self.to_string()),
        }
    }
}
