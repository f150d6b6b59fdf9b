//! Sentiment service client
//!
//! This module provides the interface to the classification backend:
//! - `PredictionClient`: the seam used by the form and analyzer
//! - `HttpPredictionClient`: reqwest implementation of `POST /api/predict`
//! - `ScriptedPredictionClient`: in-memory stand-in for tests

mod http;
pub mod mock;

pub use http::{HttpPredictionClient, PREDICT_PATH};
pub use mock::{ScriptedPredictionClient, ScriptedResponse};

use crate::error::Result;
use crate::types::Prediction;
use async_trait::async_trait;

/// One classification request per call. Implementations must reject blank
/// input without contacting the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, review: &str) -> Result<Prediction>;
}
