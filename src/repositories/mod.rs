pub mod question_repository;
pub mod quiz_attempt_repository;
pub mod user_repository;

pub use question_repository::{MongoQuestionRepository, QuestionFilter, QuestionRepository};
pub use quiz_attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
