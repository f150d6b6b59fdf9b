//! Rating to label/tone/icon mapping
//!
//! Pure functions of an optional rating. `None` means no result is present.

use crate::types::{Rating, MAX_RATING};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

/// Color class of the sentiment card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Gray,
    Red,
    Yellow,
    Green,
}

impl Sentiment {
    pub fn from_rating(rating: Rating) -> Self {
        match rating.value() {
            0 | 1 => Sentiment::Negative,
            2 => Sentiment::Neutral,
            _ => Sentiment::Positive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Sentiment::Negative => Tone::Red,
            Sentiment::Neutral => Tone::Yellow,
            Sentiment::Positive => Tone::Green,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Sentiment::Negative => "👎",
            Sentiment::Neutral => "🤔",
            Sentiment::Positive => "👍",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Gray => "bg-gray-100 text-gray-800",
            Tone::Red => "bg-red-100 text-red-800",
            Tone::Yellow => "bg-yellow-100 text-yellow-800",
            Tone::Green => "bg-green-100 text-green-800",
        }
    }

    /// ANSI foreground color for terminal output
    pub fn ansi_code(self) -> &'static str {
        match self {
            Tone::Gray => "\x1b[90m",
            Tone::Red => "\x1b[31m",
            Tone::Yellow => "\x1b[33m",
            Tone::Green => "\x1b[32m",
        }
    }
}

pub fn sentiment_label(rating: Option<Rating>) -> &'static str {
    rating.map(|r| Sentiment::from_rating(r).label()).unwrap_or("")
}

pub fn sentiment_tone(rating: Option<Rating>) -> Tone {
    rating
        .map(|r| Sentiment::from_rating(r).tone())
        .unwrap_or(Tone::Gray)
}

pub fn sentiment_icon(rating: Option<Rating>) -> Option<&'static str> {
    rating.map(|r| Sentiment::from_rating(r).icon())
}

/// e.g. `Positive (4/4)`
pub fn sentiment_summary(rating: Rating) -> String {
    format!(
        "{} ({}/{})",
        Sentiment::from_rating(rating).label(),
        rating,
        MAX_RATING
    )
}
