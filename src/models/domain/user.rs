use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::RegisterUserRequest;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    // Stored verbatim, matching the upstream data. Known weakness, not a
    // design choice to extend.
    pub password: String,
    #[serde(default)]
    pub selected_topics: Vec<String>,
    #[serde(default)]
    pub custom_topics: Vec<String>,
    #[serde(default)]
    pub target_companies: Vec<String>,
    #[serde(default = "default_notification_frequency")]
    pub notification_frequency: i64,
    #[serde(default = "default_quiz_goal")]
    pub quiz_goal: i64,
    pub created_at: DateTime<Utc>,
}

fn default_notification_frequency() -> i64 {
    10
}

fn default_quiz_goal() -> i64 {
    1
}

impl User {
    pub fn from_request(request: RegisterUserRequest) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            username: request.username,
            email: request.email,
            password: request.password,
            selected_topics: request.selected_topics,
            custom_topics: request.custom_topics,
            target_companies: request.target_companies,
            notification_frequency: default_notification_frequency(),
            quiz_goal: default_quiz_goal(),
            created_at: Utc::now(),
        }
    }
}
