//! Cancellable observer lists
//!
//! Live feeds (auth state, result history) are delivered to callbacks
//! registered through an [`Observers`] list. Registering returns a
//! [`Subscription`]; dropping or cancelling it unregisters the callback, so
//! a screen that owns its subscriptions stops receiving updates the moment
//! it is torn down.
//!
//! Callbacks are invoked outside the list's lock. A callback may therefore
//! subscribe, unsubscribe or trigger further notifications without
//! deadlocking.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

/// A registered callback.
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Entry<K, T> {
    key: K,
    callback: Callback<T>,
}

struct Registry<K, T> {
    next_id: u64,
    entries: BTreeMap<u64, Entry<K, T>>,
}

/// A keyed list of callbacks.
///
/// `K` scopes delivery: [`Observers::notify`] only reaches callbacks
/// registered under an equal key. Use `()` for a single global feed.
pub struct Observers<K, T> {
    inner: Arc<Mutex<Registry<K, T>>>,
}

impl<K, T> Observers<K, T>
where
    K: PartialEq + Clone + Send + 'static,
    T: 'static,
{
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Register a callback under `key`.
    pub fn subscribe(&self, key: K, callback: Callback<T>) -> Subscription {
        let id = {
            let mut reg = self.inner.lock();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.entries.insert(id, Entry { key, callback });
            id
        };

        let weak: Weak<Mutex<Registry<K, T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().entries.remove(&id);
            }
        })
    }

    /// Deliver `value` to every callback registered under `key`.
    ///
    /// Returns the number of callbacks invoked.
    pub fn notify(&self, key: &K, value: &T) -> usize {
        let targets: Vec<Callback<T>> = {
            let reg = self.inner.lock();
            reg.entries
                .values()
                .filter(|e| &e.key == key)
                .map(|e| Arc::clone(&e.callback))
                .collect()
        };
        for cb in &targets {
            cb(value);
        }
        targets.len()
    }

    /// Deliver `value` to every callback regardless of key.
    pub fn notify_all(&self, value: &T) -> usize {
        let targets: Vec<Callback<T>> = {
            let reg = self.inner.lock();
            reg.entries.values().map(|e| Arc::clone(&e.callback)).collect()
        };
        for cb in &targets {
            cb(value);
        }
        targets.len()
    }

    /// Number of live registrations under `key`.
    pub fn count(&self, key: &K) -> usize {
        self.inner
            .lock()
            .entries
            .values()
            .filter(|e| &e.key == key)
            .count()
    }

    /// Total number of live registrations.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, T> Default for Observers<K, T>
where
    K: PartialEq + Clone + Send + 'static,
    T: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a live registration. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap an unsubscribe action.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
