use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

const CHAT_PERSONA: &str = "You are a helpful interview preparation assistant. \
Help users with their interview questions, provide study tips, and motivate them.";

/// Typed result of one outbound model call. Timeouts are distinguished from
/// other failures so callers can log them apart; both trigger the same
/// deterministic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutcome {
    Text(String),
    TimedOut,
    Failed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> ModelOutcome;
}

/// Gemini `generateContent` REST client with a hard per-request timeout.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            timeout: Duration::from_secs(config.model_timeout_secs),
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> ModelOutcome {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return ModelOutcome::TimedOut,
            Err(err) => return ModelOutcome::Failed(err.to_string()),
        };

        if !response.status().is_success() {
            return ModelOutcome::Failed(format!("model API returned {}", response.status()));
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(err) => return ModelOutcome::Failed(err.to_string()),
        };

        let text = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .unwrap_or_default();

        if text.is_empty() {
            ModelOutcome::Failed("empty model response".to_string())
        } else {
            ModelOutcome::Text(text.to_string())
        }
    }
}

/// Prompt construction plus the degraded-mode fallbacks. Scoring and
/// question creation stay available when the model is down; only chat
/// surfaces the failure.
pub struct AiService {
    model: Arc<dyn GenerativeModel>,
}

impl AiService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Generates an explanatory answer for a new question. Falls back to the
    /// reference answer verbatim on any model failure.
    pub async fn generate_answer(
        &self,
        question_text: &str,
        correct_answer: &str,
        explanation: Option<&str>,
    ) -> String {
        let mut prompt = format!("Question: {}\n", question_text);
        if let Some(explanation) = explanation {
            prompt.push_str(&format!("Context: {}\n", explanation));
        }
        prompt.push_str(&format!(
            "Correct Answer: {}\n\nProvide a comprehensive explanation of this answer.",
            correct_answer
        ));

        match self.model.generate(&prompt).await {
            ModelOutcome::Text(text) => text,
            ModelOutcome::TimedOut => {
                log::error!("AI answer generation timed out");
                correct_answer.to_string()
            }
            ModelOutcome::Failed(reason) => {
                log::error!("AI answer generation failed: {}", reason);
                correct_answer.to_string()
            }
        }
    }

    /// Semantic-equivalence judgment for free-text answers. Falls back to
    /// case-insensitive trimmed equality when the model is unreachable.
    pub async fn validate_answer(
        &self,
        question_text: &str,
        correct_answer: &str,
        user_answer: &str,
    ) -> bool {
        let prompt = format!(
            "Question: {}\nCorrect Answer: {}\nUser's Answer: {}\n\n\
             Evaluate if the user's answer is correct. Consider semantic similarity, not just exact match.\n\
             Respond with only 'CORRECT' or 'INCORRECT'.",
            question_text, correct_answer, user_answer
        );

        match self.model.generate(&prompt).await {
            ModelOutcome::Text(text) => {
                let verdict = text.to_uppercase();
                !verdict.contains("INCORRECT") && verdict.contains("CORRECT")
            }
            ModelOutcome::TimedOut => {
                log::error!("AI validation timed out, falling back to string comparison");
                user_answer.trim().eq_ignore_ascii_case(correct_answer.trim())
            }
            ModelOutcome::Failed(reason) => {
                log::error!("AI validation failed ({}), falling back to string comparison", reason);
                user_answer.trim().eq_ignore_ascii_case(correct_answer.trim())
            }
        }
    }

    /// Assistant chat with the fixed persona. Model failure propagates as an
    /// external-service error; there is no local fallback for chat.
    pub async fn chat(&self, message: &str) -> AppResult<String> {
        let prompt = format!("{}\n\nUser: {}", CHAT_PERSONA, message);

        match self.model.generate(&prompt).await {
            ModelOutcome::Text(text) => Ok(text),
            ModelOutcome::TimedOut => {
                Err(AppError::ExternalService("AI chat timed out".to_string()))
            }
            ModelOutcome::Failed(reason) => Err(AppError::ExternalService(format!(
                "AI chat error: {}",
                reason
            ))),
        }
    }
}
