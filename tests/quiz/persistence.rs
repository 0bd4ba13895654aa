//! Automatic saving and file-backed data directories.

use crate::common::*;
use std::sync::Arc;

#[test]
fn result_saved_once_for_signed_in_user() {
    let t = TestDir::new();
    let uid = sign_up(&t.services);

    let mut screen = ResultsScreen::new(answer_all(|_| 2));
    for _ in 0..3 {
        screen.render(&t.services);
    }
    let history = t.services.store.list(&uid).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(Some(&history[0].id), screen.saved_record());
}

#[test]
fn data_directory_survives_reopen() {
    let t = TestDir::new();
    let uid = sign_up(&t.services);
    ResultsScreen::new(answer_all(|_| 4)).render(&t.services);

    let services = t.reopen();
    let user = services.identity.current_user().unwrap();
    assert_eq!(user.uid, uid);
    assert_eq!(user.email.as_deref(), Some(EMAIL));
    assert_eq!(services.store.list(&uid).unwrap().len(), 1);

    // Sign out persists too.
    services.identity.sign_out().unwrap();
    assert!(t.reopen().identity.current_user().is_none());
}

#[test]
fn config_file_controls_auto_save() {
    let t = TestDir::new();
    let path = t.dir.path().join(engine::CONFIG_FILE_NAME);
    assert!(path.exists());

    let config = QuizConfig {
        auto_save: false,
        ..QuizConfig::default()
    };
    config.write_to_file(&path).unwrap();

    let services = t.reopen();
    assert!(!services.config.auto_save);
    let uid = sign_up(&services);
    let mut screen = ResultsScreen::new(answer_all(|_| 3));
    screen.render(&services);
    assert!(!screen.save_attempted());
    assert!(services.store.list(&uid).unwrap().is_empty());
}

#[test]
fn custom_collaborators_plug_in() {
    let identity = Arc::new(LocalIdentity::in_memory(8));
    let store = Arc::new(LocalDocumentStore::in_memory());
    let services = Services::new(identity.clone(), store.clone(), QuizConfig::default());

    let err = SignUpForm::new(EMAIL, "short12", "short12")
        .submit(&services)
        .unwrap_err();
    assert_eq!(
        err.notice(Action::SignUp).message,
        "Password should be at least 8 characters."
    );

    SignUpForm::new(EMAIL, "longer123", "longer123")
        .submit(&services)
        .unwrap();
    assert_eq!(identity.account_count(), 1);
    let uid = services.identity.current_user().unwrap().uid;
    ResultsScreen::new(answer_all(|_| 5)).render(&services);
    assert_eq!(store.list(&uid).unwrap()[0].scores.N, 80);
}
