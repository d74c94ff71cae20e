pub mod analytics_handler;
pub mod chat_handler;
pub mod question_handler;
pub mod quiz_handler;
pub mod user_handler;

pub use analytics_handler::{get_analytics, get_checklist};
pub use chat_handler::ai_chat;
pub use question_handler::{
    create_question, get_question, list_questions, metadata_companies, metadata_topics,
};
pub use quiz_handler::{quiz_results, start_quiz, submit_quiz};
pub use user_handler::{
    get_user, health_check, login_user, register_user, root, update_companies, update_topics,
};
