//! Core value types
//!
//! - [`Rating`]: one answer on the 1..=5 agreement scale
//! - [`UserId`]: opaque account identifier owned by the identity provider
//! - [`RecordId`]: opaque stored-result identifier owned by the document store

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One answer on the five-point agreement scale.
///
/// 1 = strongly disagree, 5 = strongly agree. A `Rating` can only hold a
/// value in `1..=5`; construction from anything else fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating ("Strongly Disagree")
    pub const MIN: Rating = Rating(1);
    /// Highest rating ("Strongly Agree")
    pub const MAX: Rating = Rating(5);
    /// Every rating in scale order.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    /// Create a rating, rejecting values outside `1..=5`.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(Error::InvalidRating {
                value: i64::from(value),
            })
        }
    }

    /// Parse a single ASCII digit.
    pub fn from_digit(c: char) -> Result<Self> {
        match c.to_digit(10) {
            Some(d) => Rating::new(d as u8),
            None => Err(Error::InvalidRating { value: -1 }),
        }
    }

    /// Raw value in `1..=5`.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Value as a signed integer, for weighted sums.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidRating { value })
            .and_then(Rating::new)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account identifier assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier issued by a provider.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (UUID v4, no hyphens).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored-result identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an identifier issued by a store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
