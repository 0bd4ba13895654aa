//! Profile history: live updates, redisplay, delete.

use crate::common::*;
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn full_journey() {
    let t = TestDir::new();
    let services = &t.services;

    // Signed out: the profile sends the user to login.
    let profile = ProfileScreen::activate(services);
    assert_eq!(profile.snapshot().redirect, Some(Route::Login));

    assert_eq!(
        LoginForm::new(EMAIL, PASSWORD).submit(services).unwrap_err().notice(Action::SignIn).title,
        "Login Error"
    );
    sign_up(services);
    let state = profile.snapshot();
    assert!(state.redirect.is_none());
    assert_eq!(state.user.as_ref().unwrap().email, EMAIL);

    // Take two tests while the profile is open.
    let mut first = ResultsScreen::new(answer_all(|_| 1));
    first.render(services);
    let mut second = ResultsScreen::new(answer_all(|_| 5));
    second.render(services);

    let history = profile.snapshot().history;
    assert_eq!(history.len(), 2);
    assert_eq!(Some(&history[0].id), second.saved_record());
    assert_eq!(Some(&history[1].id), first.saved_record());

    // Redisplay the older one: same scores, nothing new saved.
    let route = profile.open_result(&history[1].id).unwrap();
    let Route::Results { params } = route else {
        panic!("expected results route");
    };
    let mut redisplay = ResultsScreen::new(params);
    let report = redisplay.render(services);
    assert_eq!(report.scores, history[1].scores);
    assert!(redisplay.saved_record().is_none());
    assert_eq!(profile.snapshot().history.len(), 2);

    // Delete it.
    profile.delete_test(&history[1].id).unwrap();
    let remaining = profile.snapshot().history;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, history[0].id);

    // Name, then logout.
    profile.edit_display_name("Ada").unwrap();
    assert_eq!(profile.snapshot().user.unwrap().name_label(), "Ada");
    assert_eq!(profile.logout().unwrap(), Route::Welcome);
    assert_eq!(profile.snapshot().redirect, Some(Route::Login));
}

#[test]
fn history_subscription_sees_each_change_as_full_list() {
    let services = Services::in_memory();
    let uid = sign_up(&services);

    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let sub = services.store.subscribe(
        &uid,
        Arc::new(move |update: &engine::HistoryUpdate| {
            if let Ok(list) = update {
                s.lock().push(list.len());
            }
        }),
    );

    ResultsScreen::new(answer_all(|_| 2)).render(&services);
    ResultsScreen::new(answer_all(|_| 4)).render(&services);
    sub.cancel();
    ResultsScreen::new(answer_all(|_| 3)).render(&services);

    assert_eq!(*seen.lock(), vec![0, 1, 2]);
    assert_eq!(services.store.list(&uid).unwrap().len(), 3);
}

#[test]
fn other_users_cannot_delete() {
    let services = Services::in_memory();
    let ada = sign_up(&services);
    ResultsScreen::new(answer_all(|_| 3)).render(&services);
    let id = services.store.list(&ada).unwrap()[0].id.clone();

    services.identity.sign_out().unwrap();
    SignUpForm::new("bob@example.com", PASSWORD, PASSWORD)
        .submit(&services)
        .unwrap();
    let profile = ProfileScreen::activate(&services);
    let err = profile.delete_test(&id).unwrap_err();
    assert_eq!(err.notice(Action::DeleteTest).message, "Failed to delete test.");
    assert_eq!(services.store.list(&ada).unwrap().len(), 1);
}
