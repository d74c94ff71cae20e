use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One user taking one quiz. `questions` is fixed at creation and doubles as
/// the exclusion set for future quizzes; the scoring fields transition once,
/// on submission.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub questions: Vec<String>,
    pub user_answers: HashMap<String, String>,
    pub scores: HashMap<String, bool>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub time_taken: i64,
}

impl QuizAttempt {
    pub fn new(user_id: &str, question_ids: Vec<String>) -> Self {
        let total_questions = question_ids.len() as i64;
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            questions: question_ids,
            user_answers: HashMap::new(),
            scores: HashMap::new(),
            started_at: Utc::now(),
            completed_at: None,
            total_questions,
            correct_answers: 0,
            time_taken: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_attempt_starts_in_progress_with_empty_maps() {
        let attempt = QuizAttempt::new("user-1", vec!["q1".to_string(), "q2".to_string()]);

        assert!(!attempt.is_completed());
        assert_eq!(attempt.total_questions, 2);
        assert_eq!(attempt.correct_answers, 0);
        assert_eq!(attempt.time_taken, 0);
        assert!(attempt.user_answers.is_empty());
        assert!(attempt.scores.is_empty());
    }

    #[test]
    fn serialization_omits_completed_at_while_in_progress() {
        let attempt = QuizAttempt::new("user-1", vec!["q1".to_string()]);
        let json = serde_json::to_value(&attempt).unwrap();
        assert!(json.get("completed_at").is_none());
    }

    #[test]
    fn serialization_round_trips_scoring_fields() {
        let mut attempt = QuizAttempt::new("user-1", vec!["q1".to_string()]);
        attempt.user_answers.insert("q1".to_string(), "def".to_string());
        attempt.scores.insert("q1".to_string(), true);
        attempt.correct_answers = 1;
        attempt.time_taken = 42;
        attempt.completed_at = Some(Utc::now());

        let json = serde_json::to_string(&attempt).unwrap();
        let parsed: QuizAttempt = serde_json::from_str(&json).unwrap();

        assert!(parsed.is_completed());
        assert_eq!(parsed.scores.get("q1"), Some(&true));
        assert_eq!(parsed.correct_answers, 1);
    }
}
