#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use prep_server::{
    errors::{AppError, AppResult},
    models::domain::{
        question::{Difficulty, Question, QuestionType},
        QuizAttempt, User,
    },
    services::{AiService, GenerativeModel, ModelOutcome},
    repositories::{QuestionFilter, QuestionRepository, QuizAttemptRepository, UserRepository},
};

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<String, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn sorted_by_id(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by(|a, b| a.id.cmp(&b.id));
    questions
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::AlreadyExists(format!(
                "Question with id '{}' already exists",
                question.id
            )));
        }
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_filtered(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let items = questions
            .values()
            .filter(|q| filter.topic.as_ref().map(|t| &q.topic == t).unwrap_or(true))
            .filter(|q| {
                filter
                    .difficulty
                    .as_ref()
                    .map(|d| q.difficulty.as_str() == d)
                    .unwrap_or(true)
            })
            .filter(|q| {
                filter
                    .company
                    .as_ref()
                    .map(|c| q.company.as_deref() == Some(c.as_str()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        Ok(sorted_by_id(items))
    }

    async fn find_candidates(
        &self,
        topics: &[String],
        difficulty: Option<&str>,
        companies: Option<&[String]>,
        excluded_ids: &[String],
    ) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let items = questions
            .values()
            .filter(|q| topics.contains(&q.topic))
            .filter(|q| difficulty.map(|d| q.difficulty.as_str() == d).unwrap_or(true))
            .filter(|q| {
                companies
                    .map(|cs| {
                        q.company
                            .as_ref()
                            .map(|c| cs.contains(c))
                            .unwrap_or(false)
                    })
                    .unwrap_or(true)
            })
            .filter(|q| !excluded_ids.contains(&q.id))
            .cloned()
            .collect();
        Ok(sorted_by_id(items))
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let items = questions
            .values()
            .filter(|q| ids.contains(&q.id))
            .cloned()
            .collect();
        Ok(sorted_by_id(items))
    }

    async fn find_by_topics(&self, topics: &[String]) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let items = questions
            .values()
            .filter(|q| topics.contains(&q.topic))
            .cloned()
            .collect();
        Ok(sorted_by_id(items))
    }

    async fn distinct_topics(&self) -> AppResult<Vec<String>> {
        let questions = self.questions.read().await;
        let mut topics: Vec<String> = questions.values().map(|q| q.topic.clone()).collect();
        topics.sort();
        topics.dedup();
        Ok(topics)
    }

    async fn distinct_companies(&self) -> AppResult<Vec<String>> {
        let questions = self.questions.read().await;
        let mut companies: Vec<String> = questions
            .values()
            .filter_map(|q| q.company.clone())
            .collect();
        companies.sort();
        companies.dedup();
        Ok(companies)
    }
}

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update_topics(
        &self,
        user_id: &str,
        selected_topics: &[String],
        custom_topics: &[String],
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(user_id).ok_or_else(|| {
            AppError::NotFound(format!("User with id '{}' not found", user_id))
        })?;
        user.selected_topics = selected_topics.to_vec();
        user.custom_topics = custom_topics.to_vec();
        Ok(())
    }

    async fn update_companies(&self, user_id: &str, companies: &[String]) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(user_id).ok_or_else(|| {
            AppError::NotFound(format!("User with id '{}' not found", user_id))
        })?;
        user.target_companies = companies.to_vec();
        Ok(())
    }
}

pub struct InMemoryQuizAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, QuizAttempt>>>,
}

impl InMemoryQuizAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&attempt.id) {
            return Err(AppError::AlreadyExists(format!(
                "Attempt with id '{}' already exists",
                attempt.id
            )));
        }
        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_completed_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.user_id == user_id && a.completed_at.is_some())
            .cloned()
            .collect())
    }

    async fn complete(
        &self,
        attempt_id: &str,
        user_answers: &HashMap<String, String>,
        scores: &HashMap<String, bool>,
        correct_answers: i64,
        time_taken: i64,
        completed_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut attempts = self.attempts.write().await;
        let attempt = attempts.get_mut(attempt_id).ok_or_else(|| {
            AppError::NotFound(format!("Quiz attempt with id '{}' not found", attempt_id))
        })?;
        attempt.user_answers = user_answers.clone();
        attempt.scores = scores.clone();
        attempt.correct_answers = correct_answers;
        attempt.time_taken = time_taken;
        attempt.completed_at = Some(completed_at);
        Ok(())
    }
}

/// Scripted model double: always answers with the configured outcome.
pub struct StubModel {
    outcome: ModelOutcome,
}

impl StubModel {
    pub fn returning(outcome: ModelOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, _prompt: &str) -> ModelOutcome {
        self.outcome.clone()
    }
}

pub fn ai_service_with(outcome: ModelOutcome) -> Arc<AiService> {
    Arc::new(AiService::new(Arc::new(StubModel::returning(outcome))))
}

pub fn make_question(
    id: &str,
    topic: &str,
    difficulty: Difficulty,
    question_type: QuestionType,
    correct_answer: &str,
    company: Option<&str>,
) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        question_type,
        options: match question_type {
            QuestionType::Mcq => Some(vec![
                "abc".to_string(),
                correct_answer.to_string(),
                "xyz".to_string(),
                "nope".to_string(),
            ]),
            QuestionType::Descriptive => None,
        },
        correct_answer: correct_answer.to_string(),
        explanation: None,
        ai_answer: None,
        topic: topic.to_string(),
        difficulty,
        source_url: None,
        source_name: None,
        company: company.map(|c| c.to_string()),
        time_estimate: 60,
        created_at: Utc::now(),
    }
}

pub fn make_user(id: &str, email: &str, selected_topics: &[&str]) -> User {
    User {
        id: id.to_string(),
        username: format!("user-{}", id),
        email: email.to_string(),
        password: "password123".to_string(),
        selected_topics: selected_topics.iter().map(|t| t.to_string()).collect(),
        custom_topics: vec![],
        target_companies: vec![],
        notification_frequency: 10,
        quiz_goal: 1,
        created_at: Utc::now(),
    }
}
