//! Client for the Gemini text service.
//!
//! This is the whole error boundary for the app: both operations catch
//! transport, HTTP and parse failures here and hand the screens a sentinel
//! value instead — `None` for the verse, a fixed fallback string for the
//! explanation. Nothing past this module ever sees an error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Verse;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Shown in the sharh overlay when the service cannot be reached.
pub const EXPLANATION_FALLBACK: &str = "Unable to load explanation at this time.";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned status {status}")]
    Api { status: u16 },
    #[error("completion was empty")]
    EmptyCompletion,
    #[error("malformed verse payload: {0}")]
    MalformedVerse(#[from] serde_json::Error),
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// `base_url` overrides the public endpoint (proxies, tests).
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Fetch a short inspirational verse as structured JSON.
    ///
    /// Any failure resolves to `None`; the caller shows its placeholder
    /// and never retries on its own.
    pub async fn verse_of_the_day(&self) -> Option<Verse> {
        match self.request_verse().await {
            Ok(verse) => Some(verse),
            Err(err) => {
                log::warn!("verse of the day unavailable: {}", err);
                None
            }
        }
    }

    /// Fetch a short sharh for a hadith.
    ///
    /// Always returns displayable, non-empty text: on any failure the
    /// fixed fallback string is returned instead.
    pub async fn explain_hadith(&self, arabic: &str, translation: &str) -> String {
        match self.request_explanation(arabic, translation).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("hadith explanation unavailable: {}", err);
                EXPLANATION_FALLBACK.to_string()
            }
        }
    }

    async fn request_verse(&self) -> Result<Verse, AiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Generate a beautiful and inspiring Quranic verse (Arabic and \
                           English translation) that focuses on hope, patience, or gratitude. \
                           Return in JSON format with fields 'arabic', 'translation', and \
                           'reference'."
                        .to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({
                    "type": "OBJECT",
                    "properties": {
                        "arabic": { "type": "STRING" },
                        "translation": { "type": "STRING" },
                        "reference": { "type": "STRING" }
                    }
                }),
            }),
        };

        let text = self.generate(&request).await?;
        Ok(serde_json::from_str::<Verse>(&text)?)
    }

    async fn request_explanation(
        &self,
        arabic: &str,
        translation: &str,
    ) -> Result<String, AiError> {
        let prompt = format!(
            "Provide a brief spiritual and practical explanation (Sharh) of the \
             following Hadith:\nArabic: {}\nTranslation: {}\n\nKeep it encouraging \
             and easy for a modern user to understand.",
            arabic, translation
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        };

        self.generate(&request).await
    }

    /// Single-shot completion: returns the first candidate's text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text: String = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::EmptyCompletion);
        }
        Ok(text)
    }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}
