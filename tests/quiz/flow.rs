//! End-to-end paging and scoring.

use crate::common::*;
use proptest::prelude::*;

#[test]
fn all_threes_score_fifty_everywhere() {
    let services = Services::in_memory();
    let report = ResultsScreen::new(answer_all(|_| 3)).render(&services);
    assert!(report.scores.iter().all(|(_, v)| v == 50));
    assert_eq!(report.strongest, Trait::Openness);
}

#[test]
fn all_ones_golden_values() {
    let services = Services::in_memory();
    let report = ResultsScreen::new(answer_all(|_| 1)).render(&services);
    assert_eq!(
        report.scores,
        TraitScores {
            E: 50,
            A: 40,
            C: 40,
            N: 20,
            O: 30
        }
    );
    assert_eq!(report.strongest, Trait::Neuroticism);
    assert_eq!(report.strongest_value, 20);
}

#[test]
fn half_point_rounds_away_from_zero() {
    let services = Services::in_memory();
    let params = answer_all(|i| if i == 0 { 4 } else { 3 });
    let report = ResultsScreen::new(params).render(&services);
    assert_eq!(report.scores.E, 53);
    assert_eq!(report.strongest, Trait::Extraversion);
}

#[test]
fn wandering_back_and_forth_keeps_every_answer() {
    let mut route = Route::start_test();
    // Fill pages 1-3, go back to page 1, then forward again without edits.
    for _ in 0..3 {
        let mut screen = TestScreen::from_route(&route).unwrap();
        for i in 0..10 {
            screen.select(i, Rating::MAX).unwrap();
        }
        route = screen.next().unwrap();
    }
    for _ in 0..3 {
        route = TestScreen::from_route(&route).unwrap().previous().unwrap();
    }
    let first = TestScreen::from_route(&route).unwrap();
    assert_eq!(first.page(), PageNumber::FIRST);
    assert_eq!(first.answers().answered(), 30);

    for _ in 0..3 {
        route = TestScreen::from_route(&route).unwrap().next().unwrap();
    }
    let fourth = TestScreen::from_route(&route).unwrap();
    assert_eq!(fourth.page().get(), 4);
    assert!(fourth.view().items.iter().all(|q| q.selected.is_none()));
}

proptest! {
    #[test]
    fn screens_score_like_the_scorer(values in proptest::collection::vec(1u8..=5, 50)) {
        let services = Services::in_memory();
        let params = answer_all(|i| values[i]);
        let report = ResultsScreen::new(params).render(&services);
        let direct = score(&CompleteAnswers::from_values(&values).unwrap());
        prop_assert_eq!(report.scores, direct);
        for (_, v) in report.scores.iter() {
            prop_assert!((0..=100).contains(&v));
        }
    }
}
