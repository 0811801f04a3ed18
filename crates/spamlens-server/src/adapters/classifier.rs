//! HTTP Classifier Implementation
//!
//! Calls the external classification service (`POST <base>/predict`) using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use spamlens::{ClassificationFailure, Classifier, Prediction};

/// HTTP implementation of Classifier
pub struct HttpClassifier {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Wire shape of `/predict`; every field is required
#[derive(Deserialize)]
struct PredictResponse {
    clean: String,
    label: i32,
    prob: f64,
    anomaly: bool,
}

impl HttpClassifier {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spamlens-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn failure(&self, err: reqwest::Error) -> ClassificationFailure {
        if err.is_timeout() {
            ClassificationFailure::Timeout(self.timeout.as_millis() as u64)
        } else if err.is_decode() {
            ClassificationFailure::Malformed(err.to_string())
        } else {
            ClassificationFailure::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction, ClassificationFailure> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| self.failure(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: PredictResponse = response.json().await.map_err(|e| self.failure(e))?;

        Prediction::from_raw(payload.clean, payload.label, payload.prob, payload.anomaly)
    }

    async fn health(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.client.get(&url).timeout(Duration::from_secs(5)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
