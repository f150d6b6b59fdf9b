//! Review Sentiment Client
//!
//! Sends review text to a sentiment classification service and turns the
//! `{category, rating}` answer into display-ready output.

pub mod analyzer;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod types;

#[cfg(test)]
mod testing;

pub use analyzer::Analyzer;
pub use client::{HttpPredictionClient, PredictionClient};
pub use config::Config;
pub use error::{ClientError, Result};
pub use form::{AnalysisForm, FormView, RequestState};
pub use types::{Prediction, Rating};
