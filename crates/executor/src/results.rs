//! The results screen.
//!
//! A results screen is built from [`ResultsParams`]. Fresh answers are scored
//! once and the scores cached; stored scores are shown as-is. Each render of
//! a fresh result may trigger the automatic save, but the save is attempted
//! at most once per screen: the attempt flag is set before the store is
//! called, so neither a failure nor a re-render can produce a second write.
//!
//! A failed save is logged and otherwise ignored. Scores are always shown.

use crate::route::ResultsParams;
use crate::services::Services;
use bigfive_core::{describe, score, RecordId, Trait, TraitScores};
use serde::Serialize;
use tracing::{debug, info, warn};

/// One trait row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitRow {
    /// Trait letter
    #[serde(rename = "trait")]
    pub trait_: Trait,
    /// Full name
    pub label: &'static str,
    /// Icon
    pub emoji: &'static str,
    /// Theme color as `#rrggbb`
    pub color: &'static str,
    /// Percentage
    pub value: i32,
    /// One-line summary
    pub summary: &'static str,
}

/// What the results screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsReport {
    /// All five percentages
    pub scores: TraitScores,
    /// Trait furthest from 50
    pub strongest: Trait,
    /// Its percentage
    pub strongest_value: i32,
    /// Rows in `[O, C, E, A, N]` order
    pub rows: Vec<TraitRow>,
}

impl ResultsReport {
    /// Build the report for a score set.
    pub fn new(scores: TraitScores) -> Self {
        let (strongest, strongest_value) = scores.strongest();
        let rows = scores
            .iter()
            .map(|(t, value)| {
                let d = describe(t);
                TraitRow {
                    trait_: t,
                    label: t.label(),
                    emoji: d.emoji,
                    color: d.color,
                    value,
                    summary: d.summary,
                }
            })
            .collect();
        Self {
            scores,
            strongest,
            strongest_value,
            rows,
        }
    }

    /// The banner line.
    pub fn headline(&self) -> String {
        format!(
            "Your strongest trait is {} {} at {}%!",
            describe(self.strongest).emoji,
            self.strongest.label(),
            self.strongest_value
        )
    }
}

/// Results screen state.
#[derive(Debug, Clone)]
pub struct ResultsScreen {
    params: ResultsParams,
    scores: Option<TraitScores>,
    save_attempted: bool,
    saved: Option<RecordId>,
}

impl ResultsScreen {
    /// A screen for `params`. Nothing is computed until the first render.
    pub fn new(params: ResultsParams) -> Self {
        Self {
            params,
            scores: None,
            save_attempted: false,
            saved: None,
        }
    }

    /// The parameters this screen was opened with.
    pub fn params(&self) -> &ResultsParams {
        &self.params
    }

    /// Whether the automatic save has been attempted.
    pub fn save_attempted(&self) -> bool {
        self.save_attempted
    }

    /// Id of the stored record, once saved.
    pub fn saved_record(&self) -> Option<&RecordId> {
        self.saved.as_ref()
    }

    /// Scores to show, computing them on first use.
    pub fn scores(&mut self) -> TraitScores {
        if let Some(scores) = self.scores {
            return scores;
        }
        let scores = match &self.params {
            ResultsParams::Answers(answers) => {
                let scores = score(answers);
                debug!(target: "bigfive::scoring", ?scores, "Scores computed");
                scores
            }
            ResultsParams::Stored(scores) => *scores,
        };
        self.scores = Some(scores);
        scores
    }

    /// Render the screen, saving a fresh result on the first call.
    pub fn render(&mut self, services: &Services) -> ResultsReport {
        let scores = self.scores();
        self.persist_once(services, &scores);
        ResultsReport::new(scores)
    }

    fn persist_once(&mut self, services: &Services, scores: &TraitScores) {
        if self.save_attempted {
            return;
        }
        if matches!(self.params, ResultsParams::Stored(_)) {
            debug!(target: "bigfive::results", "Redisplayed result, not saving");
            return;
        }
        if !services.config.auto_save {
            debug!(target: "bigfive::results", "Auto-save disabled");
            return;
        }
        let user = match services.identity.current_user() {
            Some(user) => user,
            None => {
                debug!(target: "bigfive::results", "No signed-in user, result not saved");
                return;
            }
        };

        self.save_attempted = true;
        match services.store.create(&user.uid, scores) {
            Ok(id) => {
                info!(target: "bigfive::results", uid = %user.uid, id = %id, "Result saved");
                self.saved = Some(id);
            }
            Err(e) => {
                warn!(target: "bigfive::results", uid = %user.uid, error = %e, "Result could not be saved");
            }
        }
    }
}
