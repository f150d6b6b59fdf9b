//! Scripted prediction client for testing
//!
//! Replays queued responses in order, records every review it receives,
//! and can delay individual responses to reproduce out-of-order completion.

use super::PredictionClient;
use crate::error::{ClientError, Result};
use crate::types::{is_blank, Prediction, Rating};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// A canned outcome for one call
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Ok { category: String, rating: Rating },
    Status(u16),
    Malformed(String),
}

impl ScriptedResponse {
    pub fn ok(category: &str, rating: u8) -> Self {
        Self::Ok {
            category: category.to_string(),
            rating: Rating::saturating(rating),
        }
    }

    fn into_result(self) -> Result<Prediction> {
        match self {
            Self::Ok { category, rating } => Ok(Prediction::new(category, rating)),
            Self::Status(status) => Err(ClientError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            Self::Malformed(reason) => Err(ClientError::Decode(reason)),
        }
    }
}

#[derive(Debug, Default)]
struct Script {
    queue: VecDeque<(ScriptedResponse, Duration)>,
    calls: Vec<String>,
}

/// In-memory client with scripted responses
#[derive(Clone)]
pub struct ScriptedPredictionClient {
    script: Arc<Mutex<Script>>,
    fallback: ScriptedResponse,
    latency: Duration,
}

impl ScriptedPredictionClient {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            fallback: ScriptedResponse::ok("General", 2),
            latency: Duration::ZERO,
        }
    }

    /// Response used once the queue is exhausted
    pub fn with_fallback(mut self, response: ScriptedResponse) -> Self {
        self.fallback = response;
        self
    }

    /// Every call fails with a 500
    pub fn with_failures(self) -> Self {
        self.with_fallback(ScriptedResponse::Status(500))
    }

    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency = Duration::from_millis(ms);
        self
    }

    pub fn push(&self, response: ScriptedResponse) -> &Self {
        self.push_delayed(response, self.latency)
    }

    pub fn push_delayed(&self, response: ScriptedResponse, delay: Duration) -> &Self {
        self.script.lock().queue.push_back((response, delay));
        self
    }

    /// Reviews received, in call order
    pub fn calls(&self) -> Vec<String> {
        self.script.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().calls.len()
    }
}

impl Default for ScriptedPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionClient for ScriptedPredictionClient {
    async fn predict(&self, review: &str) -> Result<Prediction> {
        if is_blank(review) {
            return Err(ClientError::empty_review());
        }

        let (response, delay) = {
            let mut script = self.script.lock();
            script.calls.push(review.to_string());
            script
                .queue
                .pop_front()
                .unwrap_or_else(|| (self.fallback.clone(), self.latency))
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response.into_result()
    }
}
