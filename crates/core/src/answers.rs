//! Answer vectors
//!
//! [`AnswerVector`] is the partially filled vector the collector threads
//! through page transitions. [`CompleteAnswers`] is the fully filled vector
//! the scorer consumes; the only way to get one is to prove that no entry
//! is unset.
//!
//! Both are plain values. Navigation passes them by value, so two screens
//! never share one mutable vector.

use crate::error::{Error, Result};
use crate::questions::QUESTION_COUNT;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// 50 slots, each unset or a [`Rating`].
///
/// Index `i` is the answer to `QUESTIONS[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Rating>>", into = "Vec<Option<Rating>>")]
pub struct AnswerVector {
    slots: [Option<Rating>; QUESTION_COUNT],
}

impl AnswerVector {
    /// A vector with every slot unset.
    pub fn new() -> Self {
        Self {
            slots: [None; QUESTION_COUNT],
        }
    }

    /// Answer at a 0-based index (`None` if unset or out of range).
    pub fn get(&self, index: usize) -> Option<Rating> {
        self.slots.get(index).copied().flatten()
    }

    /// Set or clear one slot.
    pub fn set(&mut self, index: usize, rating: Option<Rating>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::QuestionOutOfRange { index })?;
        *slot = rating;
        Ok(())
    }

    /// Borrow the slots in `start..end`.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &[Option<Rating>] {
        &self.slots[start..end]
    }

    /// Overwrite `values.len()` slots starting at `start`.
    pub(crate) fn write_at(&mut self, start: usize, values: &[Option<Rating>]) {
        self.slots[start..start + values.len()].copy_from_slice(values);
    }

    /// All slots in question order.
    pub fn slots(&self) -> &[Option<Rating>; QUESTION_COUNT] {
        &self.slots
    }

    /// Number of answered slots.
    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when no slot is unset.
    pub fn is_complete(&self) -> bool {
        self.answered() == QUESTION_COUNT
    }

    /// Convert to [`CompleteAnswers`], failing if any slot is unset.
    pub fn complete(&self) -> Result<CompleteAnswers> {
        let mut out = [Rating::MIN; QUESTION_COUNT];
        let mut unanswered = 0;
        for (dst, src) in out.iter_mut().zip(self.slots.iter()) {
            match src {
                Some(r) => *dst = *r,
                None => unanswered += 1,
            }
        }
        if unanswered > 0 {
            return Err(Error::IncompleteAnswers { unanswered });
        }
        Ok(CompleteAnswers(out))
    }
}

impl Default for AnswerVector {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Option<Rating>>> for AnswerVector {
    type Error = Error;

    /// Shorter inputs leave the trailing slots unset, like a vector that was
    /// never filled that far. Longer inputs are rejected.
    fn try_from(values: Vec<Option<Rating>>) -> Result<Self> {
        if values.len() > QUESTION_COUNT {
            return Err(Error::WrongLength {
                expected: QUESTION_COUNT,
                actual: values.len(),
            });
        }
        let mut v = AnswerVector::new();
        v.write_at(0, &values);
        Ok(v)
    }
}

impl From<AnswerVector> for Vec<Option<Rating>> {
    fn from(v: AnswerVector) -> Self {
        v.slots.to_vec()
    }
}

impl From<CompleteAnswers> for AnswerVector {
    fn from(c: CompleteAnswers) -> Self {
        Self {
            slots: c.0.map(Some),
        }
    }
}

/// A fully answered inventory, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rating>", into = "Vec<Rating>")]
pub struct CompleteAnswers([Rating; QUESTION_COUNT]);

impl CompleteAnswers {
    /// Build from exactly 50 ratings.
    pub fn from_ratings(ratings: &[Rating]) -> Result<Self> {
        let arr: [Rating; QUESTION_COUNT] =
            ratings.try_into().map_err(|_| Error::WrongLength {
                expected: QUESTION_COUNT,
                actual: ratings.len(),
            })?;
        Ok(Self(arr))
    }

    /// Build from exactly 50 raw values, each validated against the scale.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let ratings = values
            .iter()
            .map(|v| Rating::new(*v))
            .collect::<Result<Vec<_>>>()?;
        Self::from_ratings(&ratings)
    }

    /// Every question answered with the same rating.
    pub fn uniform(rating: Rating) -> Self {
        Self([rating; QUESTION_COUNT])
    }

    /// Answer value at a 0-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 50`.
    #[inline]
    pub fn value(&self, index: usize) -> i32 {
        self.0[index].as_i32()
    }

    /// All ratings in question order.
    pub fn ratings(&self) -> &[Rating; QUESTION_COUNT] {
        &self.0
    }
}

impl TryFrom<Vec<Rating>> for CompleteAnswers {
    type Error = Error;

    fn try_from(v: Vec<Rating>) -> Result<Self> {
        Self::from_ratings(&v)
    }
}

impl From<CompleteAnswers> for Vec<Rating> {
    fn from(c: CompleteAnswers) -> Self {
        c.0.to_vec()
    }
}
