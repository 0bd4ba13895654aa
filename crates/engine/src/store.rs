//! Result-history document store.
//!
//! Results live under `users/{uid}/tests`: every record belongs to exactly
//! one user and is only reachable through that user's id, which is what
//! makes deletion owner-only. Records are never modified after creation.
//!
//! The store, not the caller, assigns creation timestamps. The local store
//! keeps them strictly increasing so that "newest first" ordering is total.

use crate::error::{Error, Result};
use crate::persist::{load_json, write_json};
use crate::subscription::{Callback, Observers, Subscription};
use bigfive_core::{RecordId, Timestamp, TraitScores, UserId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the history snapshot inside a data directory.
pub const HISTORY_FILE_NAME: &str = "tests.json";

/// One saved test attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTestResult {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Trait percentages
    pub scores: TraitScores,
    /// Store-assigned creation time
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// What a history subscriber receives: the full current list (newest
/// first), or the error that prevented reading it.
pub type HistoryUpdate = Result<Vec<StoredTestResult>>;

/// Callback for history deliveries.
pub type HistoryCallback = Callback<HistoryUpdate>;

/// Document store contract.
pub trait DocumentStore: Send + Sync {
    /// Save a result for `uid`, stamping it with the store's clock.
    fn create(&self, uid: &UserId, scores: &TraitScores) -> Result<RecordId>;

    /// All of `uid`'s results, newest first.
    fn list(&self, uid: &UserId) -> Result<Vec<StoredTestResult>>;

    /// One of `uid`'s results.
    fn get(&self, uid: &UserId, id: &RecordId) -> Result<StoredTestResult> {
        self.list(uid)?
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| Error::RecordNotFound { id: id.to_string() })
    }

    /// Delete one of `uid`'s results.
    fn delete(&self, uid: &UserId, id: &RecordId) -> Result<()>;

    /// Observe `uid`'s results, ordered by creation time descending.
    ///
    /// The current list is delivered immediately, then the full list again
    /// after every change. Each delivery replaces the previous one.
    fn subscribe(&self, uid: &UserId, callback: HistoryCallback) -> Subscription;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Collections {
    users: BTreeMap<UserId, Vec<StoredTestResult>>,
    last_created: Timestamp,
}

impl Collections {
    /// Newest first.
    fn sorted(&self, uid: &UserId) -> Vec<StoredTestResult> {
        let mut tests = self.users.get(uid).cloned().unwrap_or_default();
        tests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tests
    }
}

/// In-process document store, optionally backed by `tests.json`.
pub struct LocalDocumentStore {
    data: Mutex<Collections>,
    path: Option<PathBuf>,
    observers: Observers<UserId, HistoryUpdate>,
}

impl LocalDocumentStore {
    /// A store that keeps results in memory only.
    pub fn in_memory() -> Self {
        Self {
            data: Mutex::new(Collections::default()),
            path: None,
            observers: Observers::new(),
        }
    }

    /// A store backed by `dir/tests.json`, created on first write.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(HISTORY_FILE_NAME);
        let data: Collections = load_json(&path)?.unwrap_or_default();
        debug!(target: "bigfive::store", path = %path.display(), users = data.users.len(), "History store opened");
        Ok(Self {
            data: Mutex::new(data),
            path: Some(path),
            observers: Observers::new(),
        })
    }

    /// Number of live history subscriptions for `uid`.
    pub fn subscriber_count(&self, uid: &UserId) -> usize {
        self.observers.count(uid)
    }

    fn save(&self, data: &Collections) -> Result<()> {
        match &self.path {
            Some(path) => write_json(path, data),
            None => Ok(()),
        }
    }

    fn publish(&self, uid: &UserId, tests: Vec<StoredTestResult>) {
        self.observers.notify(uid, &Ok(tests));
    }
}

impl DocumentStore for LocalDocumentStore {
    fn create(&self, uid: &UserId, scores: &TraitScores) -> Result<RecordId> {
        let (id, snapshot) = {
            let mut data = self.data.lock();
            let created_at = Timestamp::now().max(data.last_created.next());
            let record = StoredTestResult {
                id: RecordId::generate(),
                scores: *scores,
                created_at,
            };
            let id = record.id.clone();
            data.users.entry(uid.clone()).or_default().push(record);
            let previous = std::mem::replace(&mut data.last_created, created_at);
            if let Err(e) = self.save(&data) {
                // Roll back so memory and file agree.
                if let Some(tests) = data.users.get_mut(uid) {
                    tests.retain(|r| r.id != id);
                }
                data.last_created = previous;
                return Err(e);
            }
            (id, data.sorted(uid))
        };
        info!(target: "bigfive::store", uid = %uid, id = %id, "Test result stored");
        self.publish(uid, snapshot);
        Ok(id)
    }

    fn list(&self, uid: &UserId) -> Result<Vec<StoredTestResult>> {
        Ok(self.data.lock().sorted(uid))
    }

    fn delete(&self, uid: &UserId, id: &RecordId) -> Result<()> {
        let snapshot = {
            let mut data = self.data.lock();
            let tests = data
                .users
                .get_mut(uid)
                .ok_or_else(|| Error::RecordNotFound { id: id.to_string() })?;
            let pos = tests
                .iter()
                .position(|r| &r.id == id)
                .ok_or_else(|| Error::RecordNotFound { id: id.to_string() })?;
            let removed = tests.remove(pos);
            if let Err(e) = self.save(&data) {
                if let Some(tests) = data.users.get_mut(uid) {
                    tests.insert(pos, removed);
                }
                return Err(e);
            }
            data.sorted(uid)
        };
        info!(target: "bigfive::store", uid = %uid, id = %id, "Test result deleted");
        self.publish(uid, snapshot);
        Ok(())
    }

    fn subscribe(&self, uid: &UserId, callback: HistoryCallback) -> Subscription {
        let current = self.data.lock().sorted(uid);
        let sub = self.observers.subscribe(uid.clone(), callback.clone());
        callback(&Ok(current));
        sub
    }
}
