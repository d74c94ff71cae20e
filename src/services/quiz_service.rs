use chrono::Utc;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{question::QuestionType, Question, QuizAttempt},
        dto::request::{StartQuizRequest, SubmitQuizRequest},
        dto::response::{
            QuestionResult, QuizResultsResponse, StartQuizResponse, SubmitQuizResponse,
        },
    },
    repositories::{QuestionRepository, QuizAttemptRepository},
    services::ai_service::AiService,
};

pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
    ai: Arc<AiService>,
}

impl QuizService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
        ai: Arc<AiService>,
    ) -> Self {
        Self {
            questions,
            attempts,
            ai,
        }
    }

    /// Starts a new quiz: filters the bank down to questions the user has
    /// never been assigned, samples uniformly without replacement, persists
    /// the attempt, and returns the questions with answers redacted.
    pub async fn start_quiz(&self, request: StartQuizRequest) -> AppResult<StartQuizResponse> {
        // Every question the user has ever been assigned is excluded, from
        // in-progress attempts as well as completed ones.
        let prior_attempts = self.attempts.find_by_user(&request.user_id).await?;
        let excluded: HashSet<String> = prior_attempts
            .into_iter()
            .flat_map(|attempt| attempt.questions)
            .collect();
        let excluded: Vec<String> = excluded.into_iter().collect();

        let candidates = self
            .questions
            .find_candidates(
                &request.topics,
                request.difficulty.map(|d| d.as_str()),
                request.companies.as_deref(),
                &excluded,
            )
            .await?;

        if candidates.is_empty() {
            return Err(AppError::NotFound("No new questions available".to_string()));
        }

        let sample_size = request.num_questions.min(candidates.len());
        let mut rng = rand::thread_rng();
        let selected: Vec<Question> = candidates
            .choose_multiple(&mut rng, sample_size)
            .cloned()
            .collect();

        let question_ids = selected.iter().map(|q| q.id.clone()).collect();
        let attempt = QuizAttempt::new(&request.user_id, question_ids);
        let attempt = self.attempts.create(attempt).await?;

        log::info!(
            "Started quiz '{}' for user '{}' with {} questions",
            attempt.id,
            request.user_id,
            attempt.total_questions
        );

        Ok(StartQuizResponse {
            quiz_id: attempt.id,
            questions: selected.into_iter().map(Into::into).collect(),
            enable_timer: request.enable_timer,
        })
    }

    /// Scores a submission and finalizes the attempt in one update.
    /// Resubmitting a completed attempt is rejected rather than overwriting
    /// the recorded scores.
    pub async fn submit_quiz(&self, request: SubmitQuizRequest) -> AppResult<SubmitQuizResponse> {
        let attempt = self
            .attempts
            .find_by_id(&request.quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if attempt.is_completed() {
            return Err(AppError::AlreadyExists("Quiz already submitted".to_string()));
        }

        let questions = self.questions.find_by_ids(&attempt.questions).await?;
        let question_map: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        let mut scores: HashMap<String, bool> = HashMap::new();
        let mut correct_count: i64 = 0;

        for (question_id, user_answer) in &request.user_answers {
            // Answers for questions outside the attempt resolve to nothing
            // here and are silently skipped.
            let Some(question) = question_map.get(question_id.as_str()) else {
                continue;
            };

            let is_correct = match question.question_type {
                QuestionType::Mcq => user_answer.trim() == question.correct_answer.trim(),
                QuestionType::Descriptive => {
                    self.ai
                        .validate_answer(&question.text, &question.correct_answer, user_answer)
                        .await
                }
            };

            scores.insert(question_id.clone(), is_correct);
            if is_correct {
                correct_count += 1;
            }
        }

        self.attempts
            .complete(
                &attempt.id,
                &request.user_answers,
                &scores,
                correct_count,
                request.time_taken,
                Utc::now(),
            )
            .await?;

        log::info!(
            "Quiz '{}' submitted: {}/{} correct",
            attempt.id,
            correct_count,
            attempt.total_questions
        );

        Ok(SubmitQuizResponse {
            quiz_id: attempt.id,
            total_questions: attempt.total_questions,
            correct_answers: correct_count,
            scores,
        })
    }

    pub async fn quiz_results(&self, quiz_id: &str) -> AppResult<QuizResultsResponse> {
        let attempt = self
            .attempts
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let questions = self.questions.find_by_ids(&attempt.questions).await?;

        let results = questions
            .into_iter()
            .map(|question| {
                let user_answer = attempt
                    .user_answers
                    .get(&question.id)
                    .cloned()
                    .unwrap_or_default();
                let is_correct = attempt.scores.get(&question.id).copied().unwrap_or(false);
                QuestionResult {
                    question,
                    user_answer,
                    is_correct,
                }
            })
            .collect();

        Ok(QuizResultsResponse {
            quiz: attempt,
            results,
        })
    }
}
