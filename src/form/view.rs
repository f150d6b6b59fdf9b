//! Render model for the form

use super::RequestState;
use crate::display::{sentiment_summary, Sentiment, Tone};
use crate::types::{char_count, Rating, REVIEW_SOFT_LIMIT};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub review: String,
    pub char_count: usize,
    pub over_limit: bool,
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<ResultCard>,
}

/// Category and sentiment cards, shown only after a successful request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub category: String,
    pub rating: Rating,
    pub sentiment: Sentiment,
    pub summary: String,
    pub tone: Tone,
    pub css_class: &'static str,
    pub icon: &'static str,
}

impl FormView {
    pub(super) fn from_form(review: &str, state: &RequestState) -> Self {
        let chars = char_count(review);
        let result = state.prediction().map(|p| {
            let sentiment = Sentiment::from_rating(p.rating);
            ResultCard {
                category: p.category.clone(),
                rating: p.rating,
                sentiment,
                summary: sentiment_summary(p.rating),
                tone: sentiment.tone(),
                css_class: sentiment.tone().css_class(),
                icon: sentiment.icon(),
            }
        });

        Self {
            review: review.to_string(),
            char_count: chars,
            over_limit: chars > REVIEW_SOFT_LIMIT,
            busy: state.is_loading(),
            error: state.error().map(str::to_string),
            result,
        }
    }

    /// e.g. `42/1000`
    pub fn counter(&self) -> String {
        format!("{}/{}", self.char_count, REVIEW_SOFT_LIMIT)
    }

    /// Terminal rendering. `color` wraps the sentiment line in its tone.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        if self.busy {
            out.push_str("Analyzing...\n");
        }
        if let Some(err) = &self.error {
            let _ = writeln!(out, "Error: {}", err);
        }
        if let Some(card) = &self.result {
            let _ = writeln!(out, "Category:  {}", card.category);
            let sentiment = format!("Sentiment: {} {}", card.summary, card.icon);
            if color {
                let _ = writeln!(out, "{}{}\x1b[0m", card.tone.ansi_code(), sentiment);
            } else {
                let _ = writeln!(out, "{}", sentiment);
            }
        }
        out
    }
}
