use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use super::error::TranslateError;

/// Public Fun Translations API root.
pub const DEFAULT_BASE_URL: &str = "https://api.funtranslations.com/translate";

/// Header carrying the optional paid-plan API secret.
pub const API_SECRET_HEADER: &str = "X-FunTranslations-Api-Secret";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    contents: Contents,
}

#[derive(Debug, Deserialize)]
struct Contents {
    translated: String,
}

/// Rejects empty or whitespace-only input before any request is built.
pub fn validate_input(text: &str) -> Result<(), TranslateError> {
    if text.trim().is_empty() {
        Err(TranslateError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Maps an HTTP status onto the user-facing error taxonomy.
pub fn check_status(status: StatusCode) -> Result<(), TranslateError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        Err(TranslateError::RateLimited)
    } else if status.is_success() {
        Ok(())
    } else {
        Err(TranslateError::connection(format!(
            "API request failed with status {status}"
        )))
    }
}

pub struct TranslationClient {
    client: Client,
    base_url: String,
    api_secret: Option<String>,
}

impl TranslationClient {
    pub fn new(base_url: String, api_secret: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("funtl/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_secret,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a style endpoint, e.g. `.../translate/yoda.json`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}.json", self.base_url.trim_end_matches('/'))
    }

    /// Translates `text` with the given style endpoint.
    ///
    /// The text is sent as typed; trimming is only used to decide whether
    /// there is anything to translate.
    pub async fn translate(&self, text: &str, endpoint: &str) -> Result<String, TranslateError> {
        validate_input(text)?;

        let url = self.endpoint_url(endpoint);
        let mut http_request = self.client.post(&url).form(&[("text", text)]);

        if let Some(secret) = &self.api_secret {
            http_request = http_request.header(API_SECRET_HEADER, secret);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| TranslateError::connection(format!("Failed to reach {url}: {e}")))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::connection(format!("Failed to read response: {e}")))?;

        parse_translation(&body)
    }
}

fn parse_translation(body: &str) -> Result<String, TranslateError> {
    serde_json::from_str::<TranslationResponse>(body)
        .map(|r| r.contents.translated)
        .map_err(|e| TranslateError::connection(format!("Malformed response: {e}")))
}
