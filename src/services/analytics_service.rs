use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::{
        ActivityEntry, AnalyticsResponse, BucketStats, ChecklistResponse, TopicProgress,
    },
    repositories::{QuestionRepository, QuizAttemptRepository, UserRepository},
};

fn accuracy_pct(correct: i64, attempted: i64) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        correct as f64 / attempted as f64 * 100.0
    }
}

pub struct AnalyticsService {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl AnalyticsService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self {
            users,
            questions,
            attempts,
        }
    }

    /// Aggregates a user's completed attempts into overall, per-topic and
    /// per-difficulty accuracy plus a recency-ordered activity feed.
    pub async fn analyze(&self, user_id: &str) -> AppResult<AnalyticsResponse> {
        let attempts = self.attempts.find_completed_by_user(user_id).await?;

        if attempts.is_empty() {
            return Ok(AnalyticsResponse::empty());
        }

        let total_quizzes = attempts.len() as i64;
        let total_questions: i64 = attempts.iter().map(|a| a.total_questions).sum();
        let correct_answers: i64 = attempts.iter().map(|a| a.correct_answers).sum();
        let accuracy = accuracy_pct(correct_answers, total_questions);

        let mut topic_performance: HashMap<String, BucketStats> = HashMap::new();
        let mut difficulty_performance: HashMap<String, BucketStats> = HashMap::new();

        for attempt in &attempts {
            let questions = self.questions.find_by_ids(&attempt.questions).await?;

            for question in questions {
                let is_correct = attempt.scores.get(&question.id).copied().unwrap_or(false);

                let topic_stats = topic_performance.entry(question.topic.clone()).or_default();
                topic_stats.attempted += 1;
                if is_correct {
                    topic_stats.correct += 1;
                }

                let difficulty_stats = difficulty_performance
                    .entry(question.difficulty.as_str().to_string())
                    .or_default();
                difficulty_stats.attempted += 1;
                if is_correct {
                    difficulty_stats.correct += 1;
                }
            }
        }

        for stats in topic_performance.values_mut() {
            stats.accuracy = accuracy_pct(stats.correct, stats.attempted);
        }
        for stats in difficulty_performance.values_mut() {
            stats.accuracy = accuracy_pct(stats.correct, stats.attempted);
        }

        let mut recent = attempts;
        recent.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        let recent_activity = recent
            .iter()
            .take(10)
            .map(|attempt| ActivityEntry {
                date: attempt.completed_at,
                total: attempt.total_questions,
                correct: attempt.correct_answers,
            })
            .collect();

        Ok(AnalyticsResponse {
            total_quizzes,
            total_questions,
            correct_answers,
            // Only the headline figure is rounded.
            accuracy: (accuracy * 100.0).round() / 100.0,
            topic_performance,
            difficulty_performance,
            recent_activity,
        })
    }

    /// Cross-references the user's subscribed topics against the question
    /// bank and the completed-question set. Completed here means questions
    /// from submitted attempts only; in-progress attempts count toward the
    /// start-quiz exclusion set but not toward checklist completion.
    pub async fn checklist(&self, user_id: &str) -> AppResult<ChecklistResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let all_topics: Vec<String> = user
            .selected_topics
            .iter()
            .chain(user.custom_topics.iter())
            .cloned()
            .collect();

        let completed_attempts = self.attempts.find_completed_by_user(user_id).await?;
        let completed_quizzes = completed_attempts.len() as i64;
        let completed_ids: HashSet<String> = completed_attempts
            .into_iter()
            .flat_map(|attempt| attempt.questions)
            .collect();

        let all_questions = self.questions.find_by_topics(&all_topics).await?;

        let mut checklist: HashMap<String, TopicProgress> = HashMap::new();
        for topic in &all_topics {
            let topic_questions: Vec<_> = all_questions
                .iter()
                .filter(|q| &q.topic == topic)
                .collect();
            let total = topic_questions.len() as i64;
            let completed = topic_questions
                .iter()
                .filter(|q| completed_ids.contains(&q.id))
                .count() as i64;

            checklist.insert(
                topic.clone(),
                TopicProgress {
                    total,
                    completed,
                    pending: total - completed,
                    completion_percentage: accuracy_pct(completed, total),
                },
            );
        }

        Ok(ChecklistResponse {
            checklist,
            completed_quizzes,
            total_questions_answered: completed_ids.len() as i64,
        })
    }
}
