//! Headless analysis form
//!
//! Owns the review text and a single `RequestState`. Each accepted submit
//! gets a sequence number; completions carrying any other number are
//! dropped, so the last submission always wins.

mod view;

pub use view::{FormView, ResultCard};

use crate::error::{ClientError, Result};
use crate::types::{char_count, is_blank, Prediction, REVIEW_SOFT_LIMIT};
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle of the current prediction request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RequestState {
    Idle,
    Loading { seq: u64 },
    Success { seq: u64, prediction: Prediction },
    Failure { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            RequestState::Success { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure { message } => Some(message),
            _ => None,
        }
    }
}

/// One accepted submit: the single request the caller must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub request_id: Uuid,
    pub review: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisForm {
    review: String,
    state: RequestState,
    latest_seq: u64,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self {
            review: String::new(),
            state: RequestState::Idle,
            latest_seq: 0,
        }
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit control disabled, text read-only
    pub fn is_busy(&self) -> bool {
        self.state.is_loading()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.review = text.into();
    }

    /// Validate and start a request.
    ///
    /// Any submit, valid or not, supersedes whatever is still in flight.
    pub fn submit(&mut self) -> Result<Submission> {
        self.latest_seq += 1;

        if is_blank(&self.review) {
            let err = ClientError::empty_review();
            self.state = RequestState::Failure {
                message: err.user_message(),
            };
            return Err(err);
        }

        let chars = char_count(&self.review);
        if chars > REVIEW_SOFT_LIMIT {
            tracing::warn!(
                "Review is {} characters, over the {} character display limit",
                chars,
                REVIEW_SOFT_LIMIT
            );
        }

        let submission = Submission {
            seq: self.latest_seq,
            request_id: Uuid::new_v4(),
            review: self.review.clone(),
        };
        tracing::info!(seq = submission.seq, request_id = %submission.request_id, chars, "Submitting review");

        self.state = RequestState::Loading {
            seq: submission.seq,
        };
        Ok(submission)
    }

    /// Apply the outcome of submission `seq`. Returns false if it was stale.
    pub fn complete(&mut self, seq: u64, outcome: Result<Prediction>) -> bool {
        let current = matches!(self.state, RequestState::Loading { seq: s } if s == seq);
        if seq != self.latest_seq || !current {
            tracing::warn!(seq, latest = self.latest_seq, "Discarding stale prediction result");
            return false;
        }

        self.state = match outcome {
            Ok(prediction) => {
                tracing::info!(
                    seq,
                    category = %prediction.category,
                    rating = prediction.rating.value(),
                    "Prediction received"
                );
                RequestState::Success { seq, prediction }
            }
            Err(e) => {
                tracing::debug!(seq, "Prediction failed: {}", e);
                RequestState::Failure {
                    message: e.user_message(),
                }
            }
        };
        true
    }

    /// Clear text, result and error. In-flight results are discarded.
    pub fn reset(&mut self) {
        self.review.clear();
        self.latest_seq += 1;
        self.state = RequestState::Idle;
    }

    pub fn view(&self) -> FormView {
        FormView::from_form(&self.review, &self.state)
    }
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self::new()
    }
}
