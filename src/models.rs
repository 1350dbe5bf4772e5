use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::services::options::QuizStrategy;
use crate::services::translator::Translator;

/// Application state shared across all handlers
pub struct AppState {
    pub translator: Arc<dyn Translator>,
    pub quiz_strategy: QuizStrategy,
    pub started_at: DateTime<Utc>,
}

/// One kana glyph and its romanized reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Character {
    #[serde(rename = "char")]
    pub glyph: &'static str,
    pub romaji: &'static str,
}

impl Character {
    pub const fn new(glyph: &'static str, romaji: &'static str) -> Self {
        Character { glyph, romaji }
    }
}

/// Incoming body of `POST /api/translate`.
///
/// `text` stays untyped so a missing or non-string value can be told apart
/// from a malformed body.
#[derive(Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub japanese: String,
    pub romaji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<String>,
}

impl TranslationResult {
    pub fn new(japanese: impl Into<String>, romaji: impl Into<String>, syllables: impl Into<String>) -> Self {
        TranslationResult {
            japanese: japanese.into(),
            romaji: romaji.into(),
            syllables: Some(syllables.into()),
        }
    }
}

#[derive(Serialize)]
pub struct ScriptResponse {
    pub script: &'static str,
    pub rows: &'static [&'static [Character]],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizCard {
    pub index: usize,
    pub character: Character,
    pub options: Vec<Character>,
    pub strategy: QuizStrategy,
}

#[derive(Deserialize)]
pub struct QuizQuery {
    pub current: Option<usize>,
    pub strategy: Option<String>,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub index: usize,
    pub romaji: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub answer: Character,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<TranslationResult>,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub translator: &'static str,
    pub quiz_strategy: QuizStrategy,
    pub started_at: String,
}
