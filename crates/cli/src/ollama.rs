//! Ollama API client.
//!
//! One JSON POST to `/api/generate`, one reply. No retries, no timeout —
//! a hung server hangs the run, and the caller decides what a failure means.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::prompt::CANNOT_GENERATE_SENTINEL;

/// Sampling temperature for command generation.
const TEMPERATURE: f32 = 0.95;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to connect to Ollama service: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Ollama service error: {0}")]
    Service(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("failed to parse response data: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unable to generate command based on your description, please try to be more specific")]
    CannotGenerate,
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    options: Options,
    stream: bool,
}

#[derive(Serialize)]
struct Options {
    temperature: f32,
}

#[derive(Deserialize)]
struct Response {
    response: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for a locally hosted Ollama service.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Ask the model for a single shell command.
    ///
    /// Returns the reply text verbatim. The sentinel reply maps to
    /// [`GenerateError::CannotGenerate`]; a structured `{error}` body on a
    /// non-success status wins over the bare status code.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, GenerateError> {
        let request = Request {
            model,
            prompt,
            system,
            options: Options {
                temperature: TEMPERATURE,
            },
            stream: false,
        };

        debug!(model, url = %self.base_url, "sending generate request");

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(GenerateError::Unreachable)?;

        let status = response.status();
        let body = response.text().await.map_err(GenerateError::Unreachable)?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
                if !err.error.is_empty() {
                    return Err(GenerateError::Service(err.error));
                }
            }
            return Err(GenerateError::Status(status.as_u16()));
        }

        let parsed: Response = serde_json::from_str(&body).map_err(GenerateError::Parse)?;
        debug!(response = %parsed.response, "model reply");

        if parsed.response == CANNOT_GENERATE_SENTINEL {
            return Err(GenerateError::CannotGenerate);
        }

        Ok(parsed.response)
    }
}
