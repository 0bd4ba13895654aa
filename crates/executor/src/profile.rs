//! The profile screen: account details, live history, delete, rename, logout.
//!
//! Activation subscribes to auth state. While a user is signed in the screen
//! also holds a history subscription for that user; every delivery replaces
//! the list. Signing out (from anywhere) drops the history subscription and
//! asks for a redirect to the login screen.
//!
//! Deactivating or dropping the screen releases both subscriptions. Callbacks
//! that arrive afterwards find the screen inactive (or gone) and do nothing.

use crate::error::Result;
use crate::route::Route;
use crate::services::Services;
use bigfive_core::{RecordId, UserId};
use bigfive_engine::{
    DocumentStore, Error as ServiceError, HistoryUpdate, StoredTestResult, Subscription, UserRef,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Shown in place of a missing email.
pub const NO_EMAIL: &str = "No Email";
/// Shown in place of an empty display name.
pub const NAME_PLACEHOLDER: &str = "Enter Your Name!";

/// The signed-in user as the profile shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUser {
    /// Account id
    pub uid: UserId,
    /// Email, or [`NO_EMAIL`]
    pub email: String,
    /// Display name, possibly empty
    pub display_name: String,
}

impl ProfileUser {
    fn from_user(user: &UserRef) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.clone().unwrap_or_else(|| NO_EMAIL.to_string()),
            display_name: user.display_name.clone().unwrap_or_default(),
        }
    }

    /// The name to display, or the placeholder prompt.
    pub fn name_label(&self) -> &str {
        if self.display_name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.display_name
        }
    }
}

/// A point-in-time copy of what the profile shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    /// Signed-in user, if any
    pub user: Option<ProfileUser>,
    /// Past results, newest first
    pub history: Vec<StoredTestResult>,
    /// True until the first history delivery (or sign-out)
    pub loading: bool,
    /// Where to go instead of this screen
    pub redirect: Option<Route>,
}

#[derive(Default)]
struct Inner {
    view: ProfileState,
    history_sub: Option<Subscription>,
    active: bool,
}

impl Inner {
    fn is_current(&self, uid: &UserId) -> bool {
        self.active && self.view.user.as_ref().map(|u| &u.uid) == Some(uid)
    }
}

/// Profile screen state and subscriptions.
pub struct ProfileScreen {
    services: Services,
    inner: Arc<Mutex<Inner>>,
    auth_sub: Option<Subscription>,
}

impl ProfileScreen {
    /// Activate the screen: subscribe to auth state and, through it, history.
    pub fn activate(services: &Services) -> Self {
        let inner = Arc::new(Mutex::new(Inner {
            view: ProfileState {
                loading: true,
                ..ProfileState::default()
            },
            history_sub: None,
            active: true,
        }));

        let weak = Arc::downgrade(&inner);
        let store = Arc::clone(&services.store);
        let auth_sub = services.identity.subscribe_auth_state(Arc::new(
            move |user: &Option<UserRef>| on_auth_state(&weak, &store, user.as_ref()),
        ));

        Self {
            services: services.clone(),
            inner,
            auth_sub: Some(auth_sub),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> ProfileState {
        self.inner.lock().view.clone()
    }

    /// True while subscriptions are held.
    pub fn is_active(&self) -> bool {
        self.inner.lock().active
    }

    fn current_uid(&self) -> Result<UserId> {
        self.inner
            .lock()
            .view
            .user
            .as_ref()
            .map(|u| u.uid.clone())
            .ok_or_else(|| ServiceError::NotSignedIn.into())
    }

    /// Sign out and return to the welcome screen.
    pub fn logout(&self) -> Result<Route> {
        self.services.identity.sign_out()?;
        Ok(Route::Welcome)
    }

    /// Delete one of the user's results.
    ///
    /// On success the record is also dropped from the local list right away.
    pub fn delete_test(&self, id: &RecordId) -> Result<()> {
        let uid = self.current_uid()?;
        self.services.store.delete(&uid, id)?;
        self.inner.lock().view.history.retain(|r| &r.id != id);
        info!(target: "bigfive::profile", uid = %uid, id = %id, "Test deleted");
        Ok(())
    }

    /// Change the display name. Empty names are ignored.
    pub fn edit_display_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        self.current_uid()?;
        let user = self.services.identity.update_profile(name)?;
        let mut inner = self.inner.lock();
        if let Some(current) = inner.view.user.as_mut() {
            if current.uid == user.uid {
                current.display_name = user.display_name.unwrap_or_default();
            }
        }
        Ok(())
    }

    /// Route that redisplays a history entry, if it is in the list.
    pub fn open_result(&self, id: &RecordId) -> Option<Route> {
        self.inner
            .lock()
            .view
            .history
            .iter()
            .find(|r| &r.id == id)
            .map(|r| Route::stored_results(r.scores))
    }

    /// Release both subscriptions. Idempotent.
    pub fn deactivate(&mut self) {
        let history_sub = {
            let mut inner = self.inner.lock();
            inner.active = false;
            inner.history_sub.take()
        };
        drop(history_sub);
        if self.auth_sub.take().is_some() {
            debug!(target: "bigfive::profile", "Profile deactivated");
        }
    }
}

impl Drop for ProfileScreen {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl std::fmt::Debug for ProfileScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileScreen")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

fn on_auth_state(
    weak: &Weak<Mutex<Inner>>,
    store: &Arc<dyn DocumentStore>,
    user: Option<&UserRef>,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    // Swap state under the lock; subscriptions are dropped and created
    // outside it because both can call back into this screen.
    let previous = {
        let mut guard = inner.lock();
        if !guard.active {
            return;
        }
        match user {
            Some(user) => {
                guard.view.user = Some(ProfileUser::from_user(user));
                guard.view.history.clear();
                guard.view.loading = true;
                guard.view.redirect = None;
            }
            None => {
                guard.view = ProfileState {
                    redirect: Some(Route::Login),
                    ..ProfileState::default()
                };
            }
        }
        guard.history_sub.take()
    };
    drop(previous);

    let Some(user) = user else {
        debug!(target: "bigfive::profile", "No user, redirecting to login");
        return;
    };

    let uid = user.uid.clone();
    let history_weak = weak.clone();
    let history_uid = uid.clone();
    let sub = store.subscribe(
        &uid,
        Arc::new(move |update: &HistoryUpdate| {
            on_history(&history_weak, &history_uid, update)
        }),
    );

    let mut guard = inner.lock();
    if guard.is_current(&uid) {
        guard.history_sub = Some(sub);
    } else {
        drop(guard);
        drop(sub);
    }
}

fn on_history(weak: &Weak<Mutex<Inner>>, uid: &UserId, update: &HistoryUpdate) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut guard = inner.lock();
    if !guard.is_current(uid) {
        return;
    }
    match update {
        Ok(list) => {
            debug!(target: "bigfive::profile", uid = %uid, count = list.len(), "History delivered");
            guard.view.history = list.clone();
        }
        Err(e) => {
            warn!(target: "bigfive::profile", uid = %uid, error = %e, "History unavailable");
            guard.view.history.clear();
        }
    }
    guard.view.loading = false;
}
