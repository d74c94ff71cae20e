use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::domain::question::{Difficulty, Question, QuestionType};
use crate::models::domain::QuizAttempt;

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// A question as handed to a quiz taker: everything except the reference
/// answer. The pre-generated ai_answer passes through unchanged, matching
/// the upstream behavior.
#[derive(Debug, Clone, Serialize)]
pub struct RedactedQuestion {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
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

impl From<Question> for RedactedQuestion {
    fn from(question: Question) -> Self {
        RedactedQuestion {
            id: question.id,
            text: question.text,
            question_type: question.question_type,
            options: question.options,
            explanation: question.explanation,
            ai_answer: question.ai_answer,
            topic: question.topic,
            difficulty: question.difficulty,
            source_url: question.source_url,
            source_name: question.source_name,
            company: question.company,
            time_estimate: question.time_estimate,
            created_at: question.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartQuizResponse {
    pub quiz_id: String,
    pub questions: Vec<RedactedQuestion>,
    pub enable_timer: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuizResponse {
    pub quiz_id: String,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub scores: HashMap<String, bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResult {
    pub question: Question,
    pub user_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResultsResponse {
    pub quiz: QuizAttempt,
    pub results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BucketStats {
    pub attempted: i64,
    pub correct: i64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub date: Option<DateTime<Utc>>,
    pub total: i64,
    pub correct: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub total_quizzes: i64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub accuracy: f64,
    pub topic_performance: HashMap<String, BucketStats>,
    pub difficulty_performance: HashMap<String, BucketStats>,
    pub recent_activity: Vec<ActivityEntry>,
}

impl AnalyticsResponse {
    pub fn empty() -> Self {
        AnalyticsResponse {
            total_quizzes: 0,
            total_questions: 0,
            correct_answers: 0,
            accuracy: 0.0,
            topic_performance: HashMap::new(),
            difficulty_performance: HashMap::new(),
            recent_activity: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicProgress {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistResponse {
    pub checklist: HashMap<String, TopicProgress>,
    pub completed_quizzes: i64,
    pub total_questions_answered: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<String>,
}
