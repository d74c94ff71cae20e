use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::CreateQuestionRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuestionType {
    #[serde(rename = "mcq")]
    Mcq,
    #[serde(rename = "descriptive")]
    Descriptive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_answer: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub time_estimate: i64,
    pub created_at: DateTime<Utc>,
}

/// One second per ten characters of question plus reference answer,
/// clamped to [30, 300] seconds.
pub fn calculate_time_estimate(text: &str, answer: &str) -> i64 {
    let total_length = (text.len() + answer.len()) as i64;
    (total_length / 10).clamp(30, 300)
}

impl Question {
    pub fn from_request(request: CreateQuestionRequest, ai_answer: Option<String>) -> Self {
        let time_estimate = calculate_time_estimate(&request.text, &request.correct_answer);

        Question {
            id: Uuid::new_v4().to_string(),
            text: request.text,
            question_type: request.question_type,
            options: request.options,
            correct_answer: request.correct_answer,
            explanation: request.explanation,
            ai_answer,
            topic: request.topic,
            difficulty: request.difficulty,
            source_url: request.source_url,
            source_name: request.source_name,
            company: request.company,
            time_estimate,
            created_at: Utc::now(),
        }
    }
}
