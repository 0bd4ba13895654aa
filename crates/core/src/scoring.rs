//! Trait scorer
//!
//! Maps a complete answer vector to five percentage scores. Each trait's raw
//! score is a fixed signed sum over ten answer indices plus a constant
//! offset:
//!
//! ```text
//! E = 20 + a0 - a5 + a10 - a15 + a20 - a25 + a30 - a35 + a40 - a45
//! A = 14 - a1 + a6 - a11 + a16 - a21 + a26 - a31 + a36 + a41 + a46
//! C = 14 + a2 - a7 + a12 - a17 + a22 - a27 + a32 - a37 + a42 + a47
//! N =  2 + a3 - a8 + a13 - a18 + a23 + a28 + a33 + a38 + a43 + a48
//! O =  8 + a4 - a9 + a14 - a19 + a24 - a29 + a34 + a39 + a44 + a49
//! ```
//!
//! The signs are kept exactly as above even where they differ from the
//! published IPIP key. For answers in `1..=5` every raw score lies in
//! `0..=40`, so every percentage lies in `0..=100`.
//!
//! Percentages are `round(raw / 40 * 100)` with halves rounded away from
//! zero, computed in integers so that no trait depends on float rounding.

use crate::answers::CompleteAnswers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denominator of the normalization.
pub const RAW_SCALE: i32 = 40;

/// Neutral midpoint used to rank trait strength.
pub const MIDPOINT: i32 = 50;

/// One of the Big Five traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    /// Openness
    #[serde(rename = "O")]
    Openness,
    /// Conscientiousness
    #[serde(rename = "C")]
    Conscientiousness,
    /// Extraversion
    #[serde(rename = "E")]
    Extraversion,
    /// Agreeableness
    #[serde(rename = "A")]
    Agreeableness,
    /// Neuroticism
    #[serde(rename = "N")]
    Neuroticism,
}

impl Trait {
    /// Evaluation and display order. Ties for the strongest trait go to the
    /// earliest entry.
    pub const ORDER: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    /// Single-letter code.
    pub const fn letter(self) -> char {
        match self {
            Trait::Openness => 'O',
            Trait::Conscientiousness => 'C',
            Trait::Extraversion => 'E',
            Trait::Agreeableness => 'A',
            Trait::Neuroticism => 'N',
        }
    }

    /// Full name.
    pub const fn label(self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Neuroticism => "Neuroticism",
        }
    }

    /// Parse a letter code or full name, case-insensitively.
    pub fn parse(s: &str) -> Option<Trait> {
        let s = s.trim();
        Trait::ORDER.into_iter().find(|t| {
            s.eq_ignore_ascii_case(t.label())
                || (s.len() == 1 && s.eq_ignore_ascii_case(&t.letter().to_string()))
        })
    }

    /// Constant offset and signed answer indices of the raw formula.
    const fn key(self) -> (i32, [(usize, i32); 10]) {
        match self {
            Trait::Extraversion => (
                20,
                [(0, 1), (5, -1), (10, 1), (15, -1), (20, 1), (25, -1), (30, 1), (35, -1), (40, 1), (45, -1)],
            ),
            Trait::Agreeableness => (
                14,
                [(1, -1), (6, 1), (11, -1), (16, 1), (21, -1), (26, 1), (31, -1), (36, 1), (41, 1), (46, 1)],
            ),
            Trait::Conscientiousness => (
                14,
                [(2, 1), (7, -1), (12, 1), (17, -1), (22, 1), (27, -1), (32, 1), (37, -1), (42, 1), (47, 1)],
            ),
            Trait::Neuroticism => (
                2,
                [(3, 1), (8, -1), (13, 1), (18, -1), (23, 1), (28, 1), (33, 1), (38, 1), (43, 1), (48, 1)],
            ),
            Trait::Openness => (
                8,
                [(4, 1), (9, -1), (14, 1), (19, -1), (24, 1), (29, -1), (34, 1), (39, 1), (44, 1), (49, 1)],
            ),
        }
    }

    /// Raw score of this trait for a complete answer vector.
    pub fn raw_score(self, answers: &CompleteAnswers) -> i32 {
        let (offset, terms) = self.key();
        terms
            .iter()
            .fold(offset, |acc, &(index, sign)| acc + sign * answers.value(index))
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unnormalized trait sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct RawScores {
    /// Extraversion
    pub E: i32,
    /// Agreeableness
    pub A: i32,
    /// Conscientiousness
    pub C: i32,
    /// Neuroticism
    pub N: i32,
    /// Openness
    pub O: i32,
}

impl RawScores {
    /// Compute all five raw sums.
    pub fn compute(answers: &CompleteAnswers) -> Self {
        RawScores {
            E: Trait::Extraversion.raw_score(answers),
            A: Trait::Agreeableness.raw_score(answers),
            C: Trait::Conscientiousness.raw_score(answers),
            N: Trait::Neuroticism.raw_score(answers),
            O: Trait::Openness.raw_score(answers),
        }
    }

    /// Normalize every trait to a percentage.
    pub fn normalize(&self) -> TraitScores {
        TraitScores {
            E: normalize(self.E),
            A: normalize(self.A),
            C: normalize(self.C),
            N: normalize(self.N),
            O: normalize(self.O),
        }
    }
}

/// `round(raw / 40 * 100)`, halves away from zero.
///
/// `raw / 40 * 100 == raw * 5 / 2`, so the only fractional part that can
/// occur is exactly one half.
pub fn normalize(raw: i32) -> i32 {
    let twice = raw * 5;
    if twice >= 0 {
        (twice + 1) / 2
    } else {
        (twice - 1) / 2
    }
}

/// Five trait percentages for one completed attempt. Immutable once built.
///
/// Serialized with single-letter keys (`{"E":..,"A":..,"C":..,"N":..,"O":..}`),
/// the shape stored in result history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct TraitScores {
    /// Extraversion
    pub E: i32,
    /// Agreeableness
    pub A: i32,
    /// Conscientiousness
    pub C: i32,
    /// Neuroticism
    pub N: i32,
    /// Openness
    pub O: i32,
}

impl TraitScores {
    /// Score a complete answer vector. Pure: same input, same output.
    pub fn from_answers(answers: &CompleteAnswers) -> Self {
        RawScores::compute(answers).normalize()
    }

    /// Percentage for one trait.
    pub fn get(&self, t: Trait) -> i32 {
        match t {
            Trait::Extraversion => self.E,
            Trait::Agreeableness => self.A,
            Trait::Conscientiousness => self.C,
            Trait::Neuroticism => self.N,
            Trait::Openness => self.O,
        }
    }

    /// `(trait, percentage)` pairs in evaluation order `[O, C, E, A, N]`.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, i32)> + '_ {
        Trait::ORDER.into_iter().map(move |t| (t, self.get(t)))
    }

    /// The trait furthest from the midpoint.
    ///
    /// Ties go to the trait earliest in `[O, C, E, A, N]`: a later trait
    /// replaces the current best only when strictly further from 50.
    pub fn strongest(&self) -> (Trait, i32) {
        let first = Trait::ORDER[0];
        self.iter().fold((first, self.get(first)), |best, cur| {
            if (cur.1 - MIDPOINT).abs() > (best.1 - MIDPOINT).abs() {
                cur
            } else {
                best
            }
        })
    }
}

/// Score a complete answer vector.
pub fn score(answers: &CompleteAnswers) -> TraitScores {
    TraitScores::from_answers(answers)
}
