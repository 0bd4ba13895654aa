//! Test modules for the executor crate.

pub mod results;

use crate::{Services, SignUpForm};
use bigfive_core::{RecordId, TraitScores, UserId};
use bigfive_engine::{
    DocumentStore, Error as ServiceError, HistoryCallback, HistoryUpdate, LocalDocumentStore,
    LocalIdentity, QuizConfig, StoredTestResult, Subscription,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Document store that counts writes and can be told to fail them.
pub struct CountingStore {
    inner: LocalDocumentStore,
    creates: AtomicUsize,
    fail_writes: AtomicBool,
    fail_history: Arc<AtomicBool>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: LocalDocumentStore::in_memory(),
            creates: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
            fail_history: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// While set, history subscribers receive an error instead of the list.
    pub fn fail_history(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }

    pub fn subscriber_count(&self, uid: &UserId) -> usize {
        self.inner.subscriber_count(uid)
    }

    fn check(&self) -> bigfive_engine::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ServiceError::Io {
                reason: "store offline".into(),
            });
        }
        Ok(())
    }
}

impl DocumentStore for CountingStore {
    fn create(&self, uid: &UserId, scores: &TraitScores) -> bigfive_engine::Result<RecordId> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.create(uid, scores)
    }

    fn list(&self, uid: &UserId) -> bigfive_engine::Result<Vec<StoredTestResult>> {
        self.inner.list(uid)
    }

    fn delete(&self, uid: &UserId, id: &RecordId) -> bigfive_engine::Result<()> {
        self.check()?;
        self.inner.delete(uid, id)
    }

    fn subscribe(&self, uid: &UserId, callback: HistoryCallback) -> Subscription {
        let failing = Arc::clone(&self.fail_history);
        self.inner.subscribe(
            uid,
            Arc::new(move |update: &HistoryUpdate| {
                if failing.load(Ordering::SeqCst) {
                    callback(&Err(ServiceError::Io {
                        reason: "history unavailable".into(),
                    }));
                } else {
                    callback(update);
                }
            }),
        )
    }
}

/// In-memory services whose store is a [`CountingStore`].
pub fn counting_services() -> (Services, Arc<CountingStore>) {
    let config = QuizConfig::default();
    let store = Arc::new(CountingStore::new());
    let services = Services::new(
        Arc::new(LocalIdentity::in_memory(config.min_password_length)),
        store.clone(),
        config,
    );
    (services, store)
}

/// Create and sign in an account.
pub fn sign_up(services: &Services, email: &str) -> UserId {
    SignUpForm::new(email, "secret1", "secret1")
        .submit(services)
        .unwrap();
    services.identity.current_user().unwrap().uid
}

pub fn uniform_scores(v: i32) -> TraitScores {
    TraitScores {
        E: v,
        A: v,
        C: v,
        N: v,
        O: v,
    }
}
