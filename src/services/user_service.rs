use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::request::{LoginRequest, RegisterUserRequest},
        dto::response::RegisteredUserResponse,
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<RegisteredUserResponse> {
        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let user = self.repository.create(User::from_request(request)).await?;
        log::info!("Registered user '{}'", user.username);

        Ok(RegisteredUserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("No account found with this email".to_string())
            })?;

        // Plaintext comparison, carried from the upstream data model.
        if user.password != request.password {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn update_topics(
        &self,
        user_id: &str,
        selected_topics: &[String],
        custom_topics: &[String],
    ) -> AppResult<()> {
        self.repository
            .update_topics(user_id, selected_topics, custom_topics)
            .await
    }

    pub async fn update_companies(&self, user_id: &str, companies: &[String]) -> AppResult<()> {
        self.repository.update_companies(user_id, companies).await
    }
}
