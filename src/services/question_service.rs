use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Question, dto::request::CreateQuestionRequest},
    repositories::{QuestionFilter, QuestionRepository},
    services::ai_service::AiService,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    ai: Arc<AiService>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>, ai: Arc<AiService>) -> Self {
        Self { repository, ai }
    }

    /// Creates a question, backfilling the AI-generated answer at creation
    /// time. The backfill degrades to the reference answer when the model is
    /// unavailable, so creation never fails on the model.
    pub async fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        let ai_answer = self
            .ai
            .generate_answer(
                &request.text,
                &request.correct_answer,
                request.explanation.as_deref(),
            )
            .await;

        let question = Question::from_request(request, Some(ai_answer));
        self.repository.create(question).await
    }

    pub async fn list_questions(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        self.repository.find_filtered(filter).await
    }

    pub async fn get_question(&self, question_id: &str) -> AppResult<Question> {
        self.repository
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
    }

    pub async fn topics(&self) -> AppResult<Vec<String>> {
        self.repository.distinct_topics().await
    }

    pub async fn companies(&self) -> AppResult<Vec<String>> {
        self.repository.distinct_companies().await
    }
}
