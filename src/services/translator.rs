use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use thiserror::Error;
use crate::models::TranslationResult;
use super::anthropic::{AnthropicSettings, AnthropicTranslator};
use super::lookup::LookupTranslator;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Text is required")]
    EmptyText,

    #[error("No API key configured for the live translator")]
    MissingApiKey,

    #[error("Request to translation backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Expected a text response from the translation backend")]
    UnexpectedContent,

    /// Message reported by a remote gateway, surfaced as-is
    #[error("{0}")]
    Gateway(String),
}

/// Anything that can turn English text into a Japanese rendering
#[async_trait]
pub trait Translator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError>;
}

/// Which backend serves `/api/translate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorKind {
    Lookup,
    Anthropic,
}

impl FromStr for TranslatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lookup" => Ok(TranslatorKind::Lookup),
            "anthropic" => Ok(TranslatorKind::Anthropic),
            other => Err(format!("Unknown translator '{}'", other)),
        }
    }
}

impl fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorKind::Lookup => write!(f, "lookup"),
            TranslatorKind::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Build the configured backend once, for sharing across workers
pub fn build_translator(
    kind: TranslatorKind,
    anthropic: AnthropicSettings,
) -> Result<Arc<dyn Translator>, TranslateError> {
    let translator: Arc<dyn Translator> = match kind {
        TranslatorKind::Lookup => Arc::new(LookupTranslator::new()),
        TranslatorKind::Anthropic => Arc::new(AnthropicTranslator::new(anthropic)?),
    };
    info!("Using {} translator", translator.name());
    Ok(translator)
}
