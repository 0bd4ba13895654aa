//! Results tests: scoring on render and the one-time automatic save.

use super::{counting_services, sign_up, uniform_scores};
use crate::{ResultsParams, ResultsScreen, Services};
use bigfive_core::{CompleteAnswers, Rating, Trait};
use bigfive_engine::QuizConfig;

fn fresh(rating: u8) -> ResultsParams {
    ResultsParams::Answers(CompleteAnswers::uniform(Rating::new(rating).unwrap()))
}

// =============================================================================
// Persist once
// =============================================================================

#[test]
fn test_two_renders_issue_one_create() {
    let (services, store) = counting_services();
    let uid = sign_up(&services, "ada@example.com");

    let mut screen = ResultsScreen::new(fresh(3));
    let first = screen.render(&services);
    let second = screen.render(&services);

    assert_eq!(first, second);
    assert_eq!(store.creates(), 1);
    assert!(screen.save_attempted());

    let history = services.store.list(&uid).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(Some(&history[0].id), screen.saved_record());
    assert_eq!(history[0].scores, first.scores);
}

#[test]
fn test_failed_save_is_not_retried_and_scores_still_show() {
    let (services, store) = counting_services();
    sign_up(&services, "ada@example.com");
    store.fail_writes(true);

    let mut screen = ResultsScreen::new(fresh(5));
    let report = screen.render(&services);
    assert_eq!(report.strongest, Trait::Neuroticism);
    assert!(screen.save_attempted());
    assert!(screen.saved_record().is_none());

    store.fail_writes(false);
    screen.render(&services);
    assert_eq!(store.creates(), 1);
}

#[test]
fn test_stored_scores_are_never_saved() {
    let (services, store) = counting_services();
    sign_up(&services, "ada@example.com");

    let mut screen = ResultsScreen::new(ResultsParams::Stored(uniform_scores(70)));
    let report = screen.render(&services);
    screen.render(&services);

    assert_eq!(report.scores, uniform_scores(70));
    assert_eq!(store.creates(), 0);
    assert!(!screen.save_attempted());
}

#[test]
fn test_no_user_means_no_save() {
    let (services, store) = counting_services();
    let mut screen = ResultsScreen::new(fresh(3));
    screen.render(&services);
    assert_eq!(store.creates(), 0);
    assert!(!screen.save_attempted());
}

#[test]
fn test_auto_save_disabled() {
    let config = QuizConfig {
        auto_save: false,
        ..QuizConfig::default()
    };
    let services = Services::in_memory_with(config);
    let uid = sign_up(&services, "ada@example.com");

    ResultsScreen::new(fresh(3)).render(&services);
    assert!(services.store.list(&uid).unwrap().is_empty());
}

#[test]
fn test_each_screen_saves_its_own_attempt() {
    let (services, store) = counting_services();
    let uid = sign_up(&services, "ada@example.com");

    ResultsScreen::new(fresh(1)).render(&services);
    ResultsScreen::new(fresh(5)).render(&services);

    assert_eq!(store.creates(), 2);
    let history = services.store.list(&uid).unwrap();
    // Newest first.
    assert_eq!(history[0].scores.N, 80);
    assert_eq!(history[1].scores.N, 20);
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn test_report_rows_in_display_order() {
    let services = Services::in_memory();
    let report = ResultsScreen::new(fresh(1)).render(&services);
    let letters: Vec<char> = report.rows.iter().map(|r| r.trait_.letter()).collect();
    assert_eq!(letters, vec!['O', 'C', 'E', 'A', 'N']);
    let values: Vec<i32> = report.rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![30, 40, 50, 40, 20]);
    assert_eq!(report.rows[4].label, "Neuroticism");
    assert_eq!(report.rows[4].color, "#e74c3c");
}

#[test]
fn test_report_json_shape() {
    let services = Services::in_memory();
    let report = ResultsScreen::new(fresh(3)).render(&services);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strongest"], "O");
    assert_eq!(json["scores"]["E"], 50);
    assert_eq!(json["rows"][0]["trait"], "O");
}
