//! Shared helpers for the inventory integration suite.

#![allow(dead_code)]

pub use bigfive::*;
use tempfile::TempDir;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "secret1";

/// Services backed by a temporary data directory.
pub struct TestDir {
    pub dir: TempDir,
    pub services: Services,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let services = Services::open(dir.path()).unwrap();
        Self { dir, services }
    }

    /// Open the same directory again, as a new process would.
    pub fn reopen(&self) -> Services {
        Services::open(self.dir.path()).unwrap()
    }
}

pub fn sign_up(services: &Services) -> UserId {
    SignUpForm::new(EMAIL, PASSWORD, PASSWORD)
        .submit(services)
        .unwrap();
    services.identity.current_user().unwrap().uid
}

/// Walk all five pages answering question `i` with `pick(i)`.
pub fn answer_all(pick: impl Fn(usize) -> u8) -> ResultsParams {
    let mut route = Route::start_test();
    while let Some(mut screen) = TestScreen::from_route(&route) {
        let offset = screen.page().offset();
        for i in 0..10 {
            screen
                .select(i, Rating::new(pick(offset + i)).unwrap())
                .unwrap();
        }
        route = screen.next().unwrap();
    }
    match route {
        Route::Results { params } => params,
        other => panic!("expected results, got {:?}", other),
    }
}
