use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::IndexOptions,
    Collection, IndexModel,
};
use std::collections::HashMap;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::QuizAttempt,
};

#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>>;
    /// Every attempt of the user, completed or in-progress. Feeds the
    /// exclusion set when starting a new quiz.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>>;
    /// Only attempts with `completed_at` set. Feeds analytics and checklist.
    async fn find_completed_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>>;
    /// Writes the full submission result in a single update.
    async fn complete(
        &self,
        attempt_id: &str,
        user_answers: &HashMap<String, String>,
        scores: &HashMap<String, bool>,
        correct_answers: i64,
        time_taken: i64,
        completed_at: DateTime<Utc>,
    ) -> AppResult<()>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Created indexes for quiz_attempts collection");
        Ok(())
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self
            .collection
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn find_completed_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self
            .collection
            .find(doc! {
                "user_id": user_id,
                "completed_at": { "$ne": null }
            })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
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
        let update = doc! { "$set": {
            "user_answers": to_bson(user_answers)?,
            "scores": to_bson(scores)?,
            "correct_answers": correct_answers,
            "time_taken": time_taken,
            "completed_at": to_bson(&completed_at)?,
        } };

        let result = self
            .collection
            .update_one(doc! { "id": attempt_id }, update)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz attempt with id '{}' not found",
                attempt_id
            )));
        }

        Ok(())
    }
}
