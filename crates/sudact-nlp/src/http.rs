//! HTTP Classifier Implementation
//!
//! Client for a model server that hosts the pre-trained sentence classifier.
//! The server receives every sentence of one document in a single request and
//! answers with one label per sentence.
//!
//! # Protocol
//!
//! `POST {endpoint}/predict` with `{"model": "...", "sentences": [...]}`,
//! answered by `{"labels": ["fabula", "witness", ...]}`. Unknown or null
//! labels become `Label::Unlabeled`. Requests are never retried; a failed
//! call fails the document.
//!
//! # Examples
//!
//! ```no_run
//! use sudact_nlp::HttpClassifier;
//!
//! let classifier = HttpClassifier::new("http://localhost:8501", "ruling-zones").unwrap();
//! ```

use crate::NlpError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use sudact_domain::traits::SentenceClassifier;
use sudact_domain::Label;

/// Default model server endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8501";

/// Default model name
pub const DEFAULT_MODEL: &str = "ruling-zones";

/// Default timeout for classification requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sentence classifier backed by a remote model server
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    model: &'a str,
    sentences: &'a [String],
}

#[derive(Deserialize)]
struct PredictResponse {
    labels: Vec<Option<String>>,
}

impl HttpClassifier {
    /// Create a classifier client
    ///
    /// # Errors
    ///
    /// Returns `NlpError::Other` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, NlpError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a classifier client with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NlpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NlpError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn predict(&self, sentences: &[String]) -> Result<Vec<Label>, NlpError> {
        let url = format!("{}/predict", self.endpoint);
        let body = PredictRequest {
            model: &self.model,
            sentences,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| NlpError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(NlpError::ModelNotAvailable(self.model.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NlpError::Communication(format!("HTTP {}: {}", status, text)));
        }

        let parsed = response
            .json::<PredictResponse>()
            .map_err(|e| NlpError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parse_labels(&parsed.labels))
    }
}

fn parse_labels(labels: &[Option<String>]) -> Vec<Label> {
    labels
        .iter()
        .map(|l| l.as_deref().map(Label::parse).unwrap_or(Label::Unlabeled))
        .collect()
}

impl SentenceClassifier for HttpClassifier {
    type Error = NlpError;

    fn classify(&self, sentences: &[String]) -> Result<Vec<Label>, Self::Error> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = sentences.len(), model = %self.model, "classifying sentences");
        self.predict(sentences)
    }
}
