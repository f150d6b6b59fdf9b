//! Core types shared by the client and the form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soft display limit for review text, in characters
pub const REVIEW_SOFT_LIMIT: usize = 1000;

/// Highest rating the service returns
pub const MAX_RATING: u8 = 4;

/// Coarse sentiment polarity, 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_RATING).then_some(Self(value))
    }

    /// Clamp to the valid range
    pub fn saturating(value: u8) -> Self {
        Self(value.min(MAX_RATING))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rating::new)
            .ok_or_else(|| format!("rating {value} out of range 0..={MAX_RATING}"))
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

/// Wire request body for `POST /api/predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub review: String,
}

/// Wire response body. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictResponse {
    pub category: String,
    pub rating: Rating,
}

/// A completed classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub category: String,
    pub rating: Rating,
    pub received_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(category: impl Into<String>, rating: Rating) -> Self {
        Self {
            category: category.into(),
            rating,
            received_at: Utc::now(),
        }
    }
}

impl From<PredictResponse> for Prediction {
    fn from(resp: PredictResponse) -> Self {
        Self::new(resp.category, resp.rating)
    }
}

/// True when the text is empty after trimming whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Character count shown next to the text box
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
