//! Login and sign-up forms.

use crate::error::{Error, Result};
use crate::route::Route;
use crate::services::Services;
use tracing::debug;

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl LoginForm {
    /// A filled-in form.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Sign in; on success go to the profile.
    pub fn submit(&self, services: &Services) -> Result<Route> {
        services.identity.sign_in(&self.email, &self.password)?;
        Ok(Route::Profile)
    }
}

/// Sign-up form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password again
    pub confirm_password: String,
}

impl SignUpForm {
    /// A filled-in form.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Create the account; on success go to the profile.
    ///
    /// Mismatched passwords are rejected before the provider is called.
    pub fn submit(&self, services: &Services) -> Result<Route> {
        if self.password != self.confirm_password {
            debug!(target: "bigfive::identity", "Sign-up confirmation mismatch");
            return Err(Error::PasswordMismatch);
        }
        services.identity.sign_up(&self.email, &self.password)?;
        Ok(Route::Profile)
    }
}
