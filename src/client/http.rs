//! HTTP client for the prediction endpoint

use super::PredictionClient;
use crate::config::{ApiConfig, RetryConfig};
use crate::error::{ClientError, Result};
use crate::types::{char_count, is_blank, PredictRequest, PredictResponse, Prediction};
use async_trait::async_trait;
use reqwest::Client;

pub const PREDICT_PATH: &str = "/api/predict";

/// reqwest-backed prediction client
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: Client,
    endpoint: String,
    retry: RetryConfig,
}

impl HttpPredictionClient {
    /// Create a new client from the resolved API config
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), PREDICT_PATH),
            retry: config.retry.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, review: &str) -> Result<Prediction> {
        let body = PredictRequest {
            review: review.to_string(),
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: PredictResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.into())
    }
}

/// Only transport failures and 5xx are worth another attempt
fn is_retryable(err: &ClientError) -> bool {
    match err {
        ClientError::Network(_) => true,
        ClientError::Status { status, .. } => *status >= 500,
        _ => false,
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, review: &str) -> Result<Prediction> {
        if is_blank(review) {
            return Err(ClientError::empty_review());
        }

        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            tracing::debug!(endpoint = %self.endpoint, attempt, chars = char_count(review), "POST predict");

            match self.send_once(review).await {
                Ok(prediction) => return Ok(prediction),
                Err(e) if attempt < max_attempts && is_retryable(&e) => {
                    tracing::warn!("Prediction attempt {}/{} failed: {}", attempt, max_attempts, e);
                    tokio::time::sleep(self.retry.backoff()).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("Prediction error: {}", e);
                    return Err(e);
                }
            }
        }
    }
}
