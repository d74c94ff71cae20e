use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Question};

/// Equality filters for the public question listing; all optional,
/// AND-combined.
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub company: Option<String>,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn find_filtered(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>>;
    /// Quiz-eligible candidates: topic in `topics`, optional difficulty and
    /// company narrowing, minus everything in `excluded_ids`.
    async fn find_candidates(
        &self,
        topics: &[String],
        difficulty: Option<&str>,
        companies: Option<&[String]>,
        excluded_ids: &[String],
    ) -> AppResult<Vec<Question>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>>;
    async fn find_by_topics(&self, topics: &[String]) -> AppResult<Vec<Question>>;
    async fn distinct_topics(&self) -> AppResult<Vec<String>>;
    async fn distinct_companies(&self) -> AppResult<Vec<String>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
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

        let topic_index = IndexModel::builder()
            .keys(doc! { "topic": 1 })
            .options(IndexOptions::builder().name("topic".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(topic_index).await?;

        log::info!("Created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_filtered(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let mut query = doc! {};
        if let Some(topic) = &filter.topic {
            query.insert("topic", topic);
        }
        if let Some(difficulty) = &filter.difficulty {
            query.insert("difficulty", difficulty);
        }
        if let Some(company) = &filter.company {
            query.insert("company", company);
        }

        let questions = self.collection.find(query).await?.try_collect().await?;
        Ok(questions)
    }

    async fn find_candidates(
        &self,
        topics: &[String],
        difficulty: Option<&str>,
        companies: Option<&[String]>,
        excluded_ids: &[String],
    ) -> AppResult<Vec<Question>> {
        let mut query = doc! { "topic": { "$in": topics } };
        if let Some(difficulty) = difficulty {
            query.insert("difficulty", difficulty);
        }
        if let Some(companies) = companies {
            query.insert("company", doc! { "$in": companies });
        }
        if !excluded_ids.is_empty() {
            query.insert("id", doc! { "$nin": excluded_ids });
        }

        let questions = self.collection.find(query).await?.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "id": { "$in": ids } })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn find_by_topics(&self, topics: &[String]) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "topic": { "$in": topics } })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn distinct_topics(&self) -> AppResult<Vec<String>> {
        let values = self.collection.distinct("topic", doc! {}).await?;
        let mut topics: Vec<String> = values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect();
        topics.sort();
        Ok(topics)
    }

    async fn distinct_companies(&self) -> AppResult<Vec<String>> {
        let values = self
            .collection
            .distinct("company", doc! { "company": { "$ne": null } })
            .await?;
        let mut companies: Vec<String> = values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect();
        companies.sort();
        Ok(companies)
    }
}
