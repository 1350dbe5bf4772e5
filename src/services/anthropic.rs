use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use crate::models::TranslationResult;
use crate::utils::{is_blank, strip_code_fence};
use super::translator::{TranslateError, Translator};

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        AnthropicSettings {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Live translator calling the Anthropic Messages API
pub struct AnthropicTranslator {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl AnthropicTranslator {
    pub fn new(settings: AnthropicSettings) -> Result<Self, TranslateError> {
        let api_key = settings
            .api_key
            .filter(|key| !is_blank(key))
            .ok_or(TranslateError::MissingApiKey)?;
        Ok(AnthropicTranslator {
            client: Client::new(),
            api_key,
            model: settings.model,
            api_url: settings.api_url,
        })
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Translate the following English text to Japanese. Provide:\n\
         1. The Japanese characters\n\
         2. The romaji reading\n\
         3. The pronunciation broken into syllables separated by hyphens\n\
         \n\
         Respond with JSON only, using the keys \"japanese\", \"romaji\" and \"syllables\".\n\
         \n\
         English text: {}",
        text
    )
}

/// JSON shape asked of the model; missing keys read as empty
#[derive(Deserialize)]
struct ModelReply {
    #[serde(default)]
    japanese: String,
    #[serde(default)]
    romaji: String,
    #[serde(default)]
    syllables: Option<String>,
}

impl From<ModelReply> for TranslationResult {
    fn from(reply: ModelReply) -> Self {
        TranslationResult {
            japanese: reply.japanese,
            romaji: reply.romaji,
            syllables: reply.syllables,
        }
    }
}

/// Read the model's reply as a translation.
///
/// Replies that are not a JSON object fall back to "japanese on line one,
/// romaji on line two" with no syllable breakdown.
pub fn parse_model_text(text: &str) -> TranslationResult {
    match serde_json::from_str::<ModelReply>(strip_code_fence(text)) {
        Ok(reply) => reply.into(),
        Err(e) => {
            warn!("Model reply was not JSON ({}), falling back to line split", e);
            let mut lines = text.lines();
            TranslationResult {
                japanese: lines.next().unwrap_or_default().to_string(),
                romaji: lines.next().unwrap_or_default().to_string(),
                syllables: None,
            }
        }
    }
}

#[async_trait]
impl Translator for AnthropicTranslator {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        if is_blank(text) {
            return Err(TranslateError::EmptyText);
        }

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: build_prompt(text),
            }],
        };

        debug!("Sending translation request to {} ({})", self.api_url, self.model);
        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: MessagesResponse = response.json().await?;
        let first = reply.content.into_iter().next().ok_or(TranslateError::UnexpectedContent)?;
        match (first.kind.as_str(), first.text) {
            ("text", Some(text)) => Ok(parse_model_text(&text)),
            _ => Err(TranslateError::UnexpectedContent),
        }
    }
}
