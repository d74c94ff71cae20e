use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoQuizAttemptRepository, MongoUserRepository},
    services::{
        ai_service::GeminiClient, AiService, AnalyticsService, QuestionService, QuizService,
        UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub ai_service: Arc<AiService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let ai_service = Arc::new(AiService::new(Arc::new(GeminiClient::from_config(&config))));

        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let question_service = Arc::new(QuestionService::new(
            question_repository.clone(),
            ai_service.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            question_repository.clone(),
            attempt_repository.clone(),
            ai_service.clone(),
        ));
        let analytics_service = Arc::new(AnalyticsService::new(
            user_repository,
            question_repository,
            attempt_repository,
        ));

        Ok(Self {
            user_service,
            question_service,
            quiz_service,
            analytics_service,
            ai_service,
            config: Arc::new(config),
        })
    }
}
