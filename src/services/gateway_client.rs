use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;
use crate::models::TranslationResult;
use super::translator::{TranslateError, Translator};

/// Talks to a running gateway over `POST /api/translate`
pub struct GatewayClient {
    client: Client,
    endpoint: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Self {
        GatewayClient {
            client: Client::new(),
            endpoint: format!("{}/api/translate", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Translator for GatewayClient {
    fn name(&self) -> &'static str {
        "gateway"
    }

    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        // Non-2xx bodies are plain-text messages meant for the user
        if !response.status().is_success() {
            let message = response.text().await?;
            return Err(TranslateError::Gateway(message));
        }

        Ok(response.json().await?)
    }
}
