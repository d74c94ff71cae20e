pub mod question;
pub mod quiz_attempt;
pub mod user;

pub use question::{Difficulty, Question, QuestionType};
pub use quiz_attempt::QuizAttempt;
pub use user::User;
