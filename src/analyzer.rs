//! Async driver joining the form and a prediction client

use crate::client::PredictionClient;
use crate::form::{AnalysisForm, FormView};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared form plus the client that serves its submissions.
///
/// The form lock is never held across the network call.
pub struct Analyzer<C: PredictionClient> {
    form: Arc<Mutex<AnalysisForm>>,
    client: Arc<C>,
}

impl<C: PredictionClient> Clone for Analyzer<C> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            client: self.client.clone(),
        }
    }
}

impl<C: PredictionClient> Analyzer<C> {
    pub fn new(client: C) -> Self {
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<C>) -> Self {
        Self {
            form: Arc::new(Mutex::new(AnalysisForm::new())),
            client,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> FormView {
        self.form.lock().view()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.form.lock().set_text(text);
    }

    pub fn reset(&self) -> FormView {
        let mut form = self.form.lock();
        form.reset();
        form.view()
    }

    /// Submit the current text and wait for its outcome
    pub async fn submit(&self) -> FormView {
        let submission = {
            let mut form = self.form.lock();
            match form.submit() {
                Ok(s) => s,
                Err(e) => {
                    tracing::debug!("Submit rejected: {}", e);
                    return form.view();
                }
            }
        };

        let outcome = self.client.predict(&submission.review).await;

        let mut form = self.form.lock();
        form.complete(submission.seq, outcome);
        form.view()
    }

    pub async fn analyze(&self, text: impl Into<String>) -> FormView {
        self.set_text(text);
        self.submit().await
    }
}
