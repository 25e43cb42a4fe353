pub mod gemini;
pub mod worker;

pub use gemini::{AiError, GeminiClient, EXPLANATION_FALLBACK};
pub use worker::{AiHandle, AiRequest, AiResponse};
