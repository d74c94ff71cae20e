use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn update_topics(
        &self,
        user_id: &str,
        selected_topics: &[String],
        custom_topics: &[String],
    ) -> AppResult<()>;
    async fn update_companies(&self, user_id: &str, companies: &[String]) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("email_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on email field");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    async fn update_topics(
        &self,
        user_id: &str,
        selected_topics: &[String],
        custom_topics: &[String],
    ) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": user_id },
                doc! { "$set": {
                    "selected_topics": selected_topics,
                    "custom_topics": custom_topics,
                } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                user_id
            )));
        }

        Ok(())
    }

    async fn update_companies(&self, user_id: &str, companies: &[String]) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": user_id },
                doc! { "$set": { "target_companies": companies } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                user_id
            )));
        }

        Ok(())
    }
}
