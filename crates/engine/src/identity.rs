//! Identity provider contract and a local implementation.
//!
//! The inventory never owns authentication state. It only needs to know who
//! is signed in (to attribute saved results) and to be told when that
//! changes. [`IdentityProvider`] is that contract; [`LocalIdentity`] is an
//! in-process provider, optionally backed by `accounts.json` in a data
//! directory so a signed-in session survives restarts.
//!
//! ## Local account rules
//!
//! - Emails need a non-empty local part and a dotted domain; they are
//!   compared case-insensitively and stored lowercased.
//! - Passwords shorter than the configured minimum are rejected.
//! - Passwords are stored as salted SHA-256 digests, never in clear.
//! - Sign-up signs the new account in.

use crate::error::{Error, Result};
use crate::persist::{load_json, write_json};
use crate::subscription::{Callback, Observers, Subscription};
use bigfive_core::UserId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// File name of the account snapshot inside a data directory.
pub const ACCOUNTS_FILE_NAME: &str = "accounts.json";

/// The signed-in user as seen by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Account identifier
    pub uid: UserId,
    /// Sign-in email, if the provider exposes one
    pub email: Option<String>,
    /// Editable display name
    pub display_name: Option<String>,
}

/// Callback for auth-state changes: `Some(user)` on sign-in, `None` on sign-out.
pub type AuthCallback = Callback<Option<UserRef>>;

/// Identity provider contract.
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password.
    fn sign_in(&self, email: &str, password: &str) -> Result<UserRef>;

    /// Create an account and sign it in.
    fn sign_up(&self, email: &str, password: &str) -> Result<UserRef>;

    /// Sign the current user out. Signing out with no user is a no-op.
    fn sign_out(&self) -> Result<()>;

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserRef>;

    /// Change the signed-in user's display name.
    fn update_profile(&self, display_name: &str) -> Result<UserRef>;

    /// Observe auth state. The current state is delivered immediately, then
    /// once per change until the subscription is dropped.
    fn subscribe_auth_state(&self, callback: AuthCallback) -> Subscription;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    uid: UserId,
    email: String,
    display_name: Option<String>,
    salt: String,
    password_hash: String,
}

impl Account {
    fn user_ref(&self) -> UserRef {
        UserRef {
            uid: self.uid.clone(),
            email: Some(self.email.clone()),
            display_name: self.display_name.clone(),
        }
    }

    fn verify(&self, password: &str) -> bool {
        hash_password(&self.salt, password) == self.password_hash
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct AccountBook {
    accounts: Vec<Account>,
    current: Option<UserId>,
}

impl AccountBook {
    fn by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    fn current_account_mut(&mut self) -> Option<&mut Account> {
        let uid = self.current.clone()?;
        self.accounts.iter_mut().find(|a| a.uid == uid)
    }

    fn current_user(&self) -> Option<UserRef> {
        let uid = self.current.as_ref()?;
        self.accounts
            .iter()
            .find(|a| &a.uid == uid)
            .map(Account::user_ref)
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Normalize and check an email address.
fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_ascii_lowercase();
    let invalid = || Error::InvalidEmail {
        email: email.clone(),
    };
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }
    Ok(email)
}

/// In-process identity provider.
pub struct LocalIdentity {
    book: Mutex<AccountBook>,
    path: Option<PathBuf>,
    min_password_length: usize,
    observers: Observers<(), Option<UserRef>>,
}

impl LocalIdentity {
    /// A provider that keeps accounts in memory only.
    pub fn in_memory(min_password_length: usize) -> Self {
        Self {
            book: Mutex::new(AccountBook::default()),
            path: None,
            min_password_length,
            observers: Observers::new(),
        }
    }

    /// A provider backed by `dir/accounts.json`, created on first write.
    pub fn open(dir: &Path, min_password_length: usize) -> Result<Self> {
        let path = dir.join(ACCOUNTS_FILE_NAME);
        let book: AccountBook = load_json(&path)?.unwrap_or_default();
        debug!(target: "bigfive::identity", path = %path.display(), accounts = book.accounts.len(), "Account book opened");
        Ok(Self {
            book: Mutex::new(book),
            path: Some(path),
            min_password_length,
            observers: Observers::new(),
        })
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.book.lock().accounts.len()
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        match &self.path {
            Some(path) => write_json(path, book),
            None => Ok(()),
        }
    }

    /// Replace `book` with `staged` once the snapshot is written.
    ///
    /// A failed write leaves `book` untouched.
    fn commit(&self, book: &mut AccountBook, staged: AccountBook) -> Result<()> {
        self.save(&staged)?;
        *book = staged;
        Ok(())
    }

    fn announce(&self, user: Option<UserRef>) {
        self.observers.notify(&(), &user);
    }
}

impl IdentityProvider for LocalIdentity {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserRef> {
        let email = normalize_email(email).map_err(|_| Error::InvalidCredentials)?;
        let user = {
            let mut book = self.book.lock();
            let user = match book.by_email(&email) {
                Some(account) if account.verify(password) => account.user_ref(),
                _ => {
                    debug!(target: "bigfive::identity", "Sign-in rejected");
                    return Err(Error::InvalidCredentials);
                }
            };
            let mut staged = book.clone();
            staged.current = Some(user.uid.clone());
            self.commit(&mut book, staged)?;
            user
        };
        info!(target: "bigfive::identity", uid = %user.uid, "Signed in");
        self.announce(Some(user.clone()));
        Ok(user)
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<UserRef> {
        let email = normalize_email(email)?;
        if password.chars().count() < self.min_password_length {
            return Err(Error::WeakPassword {
                min_length: self.min_password_length,
            });
        }

        let user = {
            let mut book = self.book.lock();
            if book.by_email(&email).is_some() {
                return Err(Error::EmailInUse { email });
            }
            let salt = Uuid::new_v4().simple().to_string();
            let account = Account {
                uid: UserId::generate(),
                password_hash: hash_password(&salt, password),
                salt,
                email,
                display_name: None,
            };
            let user = account.user_ref();
            let mut staged = book.clone();
            staged.accounts.push(account);
            staged.current = Some(user.uid.clone());
            self.commit(&mut book, staged)?;
            user
        };
        info!(target: "bigfive::identity", uid = %user.uid, "Account created");
        self.announce(Some(user.clone()));
        Ok(user)
    }

    fn sign_out(&self) -> Result<()> {
        {
            let mut book = self.book.lock();
            if book.current.is_none() {
                return Ok(());
            }
            let mut staged = book.clone();
            staged.current = None;
            self.commit(&mut book, staged)?;
        }
        info!(target: "bigfive::identity", "Signed out");
        self.announce(None);
        Ok(())
    }

    fn current_user(&self) -> Option<UserRef> {
        self.book.lock().current_user()
    }

    fn update_profile(&self, display_name: &str) -> Result<UserRef> {
        let name = display_name.trim();
        let mut book = self.book.lock();
        let mut staged = book.clone();
        let account = staged.current_account_mut().ok_or(Error::NotSignedIn)?;
        if !name.is_empty() {
            account.display_name = Some(name.to_string());
        }
        let user = account.user_ref();
        self.commit(&mut book, staged)?;
        debug!(target: "bigfive::identity", uid = %user.uid, "Profile updated");
        Ok(user)
    }

    fn subscribe_auth_state(&self, callback: AuthCallback) -> Subscription {
        let current = self.current_user();
        let sub = self.observers.subscribe((), callback.clone());
        callback(&current);
        sub
    }
}
