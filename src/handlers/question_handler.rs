use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, QuestionFilterParams},
    models::dto::response::{CompaniesResponse, TopicsResponse},
    repositories::QuestionFilter,
};

#[post("/api/questions")]
async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let question = state.question_service.create_question(request).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[get("/api/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<QuestionFilterParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let filter = QuestionFilter {
        topic: params.topic,
        difficulty: params.difficulty,
        company: params.company,
    };

    let questions = state.question_service.list_questions(&filter).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/questions/{question_id}")]
async fn get_question(
    state: web::Data<AppState>,
    question_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(&question_id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[get("/api/metadata/topics")]
async fn metadata_topics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let topics = state.question_service.topics().await?;
    Ok(HttpResponse::Ok().json(TopicsResponse { topics }))
}

#[get("/api/metadata/companies")]
async fn metadata_companies(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let companies = state.question_service.companies().await?;
    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}
