pub mod ai_service;
pub mod analytics_service;
pub mod question_service;
pub mod quiz_service;
pub mod user_service;

pub use ai_service::{AiService, GeminiClient, GenerativeModel, ModelOutcome};
pub use analytics_service::AnalyticsService;
pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
