use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{StartQuizRequest, SubmitQuizRequest},
};

#[post("/api/quiz/start")]
async fn start_quiz(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.quiz_service.start_quiz(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quiz/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.quiz_service.submit_quiz(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz/{quiz_id}/results")]
async fn quiz_results(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.quiz_results(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
