mod common;

use std::collections::HashMap;

use chrono::Utc;
use common::*;
use prep_server::{
    errors::AppError,
    models::domain::question::{Difficulty, QuestionType},
    models::domain::QuizAttempt,
    repositories::{
        QuestionFilter, QuestionRepository, QuizAttemptRepository, UserRepository,
    },
};

#[tokio::test]
async fn question_create_then_find_by_id() {
    let repo = InMemoryQuestionRepository::new();
    let question = make_question("q1", "Python", Difficulty::Easy, QuestionType::Mcq, "def", None);

    let created = repo.create(question.clone()).await.unwrap();
    assert_eq!(created.id, "q1");

    let found = repo.find_by_id("q1").await.unwrap().unwrap();
    assert_eq!(found, question);

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn question_create_rejects_duplicate_id() {
    let repo = InMemoryQuestionRepository::new();
    let question = make_question("q1", "Python", Difficulty::Easy, QuestionType::Mcq, "def", None);

    repo.create(question.clone()).await.unwrap();
    let duplicate = repo.create(question).await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));
}

#[tokio::test]
async fn find_filtered_combines_filters_conjunctively() {
    let repo = InMemoryQuestionRepository::new();
    repo.create(make_question(
        "a",
        "Python",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        Some("Google"),
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "b",
        "Python",
        Difficulty::Hard,
        QuestionType::Mcq,
        "def",
        Some("Google"),
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "c",
        "JavaScript",
        Difficulty::Easy,
        QuestionType::Mcq,
        "push()",
        Some("Google"),
    ))
    .await
    .unwrap();

    let all = repo.find_filtered(&QuestionFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let filter = QuestionFilter {
        topic: Some("Python".to_string()),
        difficulty: Some("Easy".to_string()),
        company: Some("Google".to_string()),
    };
    let matched = repo.find_filtered(&filter).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "a");

    let no_match = repo
        .find_filtered(&QuestionFilter {
            company: Some("Amazon".to_string()),
            ..QuestionFilter::default()
        })
        .await
        .unwrap();
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn find_candidates_respects_exclusions_and_narrowing() {
    let repo = InMemoryQuestionRepository::new();
    repo.create(make_question(
        "a",
        "Python",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        Some("Google"),
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "b",
        "Python",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        None,
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "c",
        "Python",
        Difficulty::Hard,
        QuestionType::Mcq,
        "def",
        Some("Amazon"),
    ))
    .await
    .unwrap();

    let topics = vec!["Python".to_string()];

    let unrestricted = repo
        .find_candidates(&topics, None, None, &[])
        .await
        .unwrap();
    assert_eq!(unrestricted.len(), 3);

    let excluded = vec!["a".to_string()];
    let remaining = repo
        .find_candidates(&topics, None, None, &excluded)
        .await
        .unwrap();
    let ids: Vec<&str> = remaining.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);

    let hard_only = repo
        .find_candidates(&topics, Some("Hard"), None, &[])
        .await
        .unwrap();
    assert_eq!(hard_only.len(), 1);
    assert_eq!(hard_only[0].id, "c");

    // Company narrowing drops questions with no company tag.
    let companies = vec!["Google".to_string()];
    let google_only = repo
        .find_candidates(&topics, None, Some(&companies), &[])
        .await
        .unwrap();
    assert_eq!(google_only.len(), 1);
    assert_eq!(google_only[0].id, "a");
}

#[tokio::test]
async fn distinct_listings_are_sorted_and_skip_untagged() {
    let repo = InMemoryQuestionRepository::new();
    repo.create(make_question(
        "a",
        "Python",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        Some("Google"),
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "b",
        "Algorithms",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        Some("Amazon"),
    ))
    .await
    .unwrap();
    repo.create(make_question(
        "c",
        "Python",
        Difficulty::Easy,
        QuestionType::Mcq,
        "def",
        None,
    ))
    .await
    .unwrap();

    assert_eq!(
        repo.distinct_topics().await.unwrap(),
        vec!["Algorithms".to_string(), "Python".to_string()]
    );
    assert_eq!(
        repo.distinct_companies().await.unwrap(),
        vec!["Amazon".to_string(), "Google".to_string()]
    );
}

#[tokio::test]
async fn user_email_lookup_and_updates() {
    let repo = InMemoryUserRepository::new();
    repo.create(make_user("u1", "jane@example.com", &["Python"]))
        .await
        .unwrap();

    let by_email = repo.find_by_email("jane@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, "u1");
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());

    repo.update_topics(
        "u1",
        &["JavaScript".to_string()],
        &["Kubernetes".to_string()],
    )
    .await
    .unwrap();
    repo.update_companies("u1", &["Google".to_string()]).await.unwrap();

    let user = repo.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(user.selected_topics, vec!["JavaScript".to_string()]);
    assert_eq!(user.custom_topics, vec!["Kubernetes".to_string()]);
    assert_eq!(user.target_companies, vec!["Google".to_string()]);
}

#[tokio::test]
async fn user_updates_against_unknown_id_are_not_found() {
    let repo = InMemoryUserRepository::new();

    let topics = repo.update_topics("ghost", &[], &[]).await;
    assert!(matches!(topics, Err(AppError::NotFound(_))));

    let companies = repo.update_companies("ghost", &[]).await;
    assert!(matches!(companies, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn attempt_queries_distinguish_completed_from_in_progress() {
    let repo = InMemoryQuizAttemptRepository::new();

    let first = repo
        .create(QuizAttempt::new("u1", vec!["q1".to_string(), "q2".to_string()]))
        .await
        .unwrap();
    let second = repo
        .create(QuizAttempt::new("u1", vec!["q3".to_string()]))
        .await
        .unwrap();
    repo.create(QuizAttempt::new("u2", vec!["q1".to_string()]))
        .await
        .unwrap();

    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), "def".to_string());
    let mut scores = HashMap::new();
    scores.insert("q1".to_string(), true);
    repo.complete(&first.id, &answers, &scores, 1, 42, Utc::now())
        .await
        .unwrap();

    let all = repo.find_by_user("u1").await.unwrap();
    assert_eq!(all.len(), 2);

    let completed = repo.find_completed_by_user("u1").await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, first.id);

    let still_open = repo.find_by_id(&second.id).await.unwrap().unwrap();
    assert!(!still_open.is_completed());
}

#[tokio::test]
async fn complete_finalizes_every_submission_field() {
    let repo = InMemoryQuizAttemptRepository::new();
    let attempt = repo
        .create(QuizAttempt::new("u1", vec!["q1".to_string(), "q2".to_string()]))
        .await
        .unwrap();
    assert!(attempt.completed_at.is_none());
    assert_eq!(attempt.total_questions, 2);

    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), "def".to_string());
    answers.insert("q2".to_string(), "pop()".to_string());
    let mut scores = HashMap::new();
    scores.insert("q1".to_string(), true);
    scores.insert("q2".to_string(), false);

    let completed_at = Utc::now();
    repo.complete(&attempt.id, &answers, &scores, 1, 95, completed_at)
        .await
        .unwrap();

    let stored = repo.find_by_id(&attempt.id).await.unwrap().unwrap();
    assert!(stored.is_completed());
    assert_eq!(stored.completed_at, Some(completed_at));
    assert_eq!(stored.user_answers, answers);
    assert_eq!(stored.scores, scores);
    assert_eq!(stored.correct_answers, 1);
    assert_eq!(stored.time_taken, 95);
    // The assigned question list is immutable after creation.
    assert_eq!(stored.questions, attempt.questions);
}

#[tokio::test]
async fn completing_an_unknown_attempt_is_not_found() {
    let repo = InMemoryQuizAttemptRepository::new();
    let result = repo
        .complete("missing", &HashMap::new(), &HashMap::new(), 0, 0, Utc::now())
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
