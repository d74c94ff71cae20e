use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use crate::models::domain::question::{Difficulty, QuestionType};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub password: String,

    #[serde(default)]
    pub selected_topics: Vec<String>,

    #[serde(default)]
    pub custom_topics: Vec<String>,

    #[serde(default)]
    pub target_companies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Explicit shape for topic-preference updates; only these two fields are
/// mutable through this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTopicsRequest {
    #[serde(default)]
    pub selected_topics: Vec<String>,

    #[serde(default)]
    pub custom_topics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompaniesRequest {
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub text: String,

    pub question_type: QuestionType,

    pub options: Option<Vec<String>>,

    #[validate(length(min = 1))]
    pub correct_answer: String,

    pub explanation: Option<String>,

    #[validate(length(min = 1))]
    pub topic: String,

    pub difficulty: Difficulty,

    pub source_url: Option<String>,

    pub source_name: Option<String>,

    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFilterParams {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartQuizRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1, message = "At least one topic is required"))]
    pub topics: Vec<String>,

    #[serde(default = "default_num_questions")]
    pub num_questions: usize,

    pub difficulty: Option<Difficulty>,

    pub companies: Option<Vec<String>>,

    #[serde(default = "default_enable_timer")]
    pub enable_timer: bool,
}

fn default_num_questions() -> usize {
    10
}

fn default_enable_timer() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1))]
    pub quiz_id: String,

    pub user_answers: HashMap<String, String>,

    pub time_taken: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1, max = 10000))]
    pub message: String,

    pub session_id: String,
}
