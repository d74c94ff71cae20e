use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        LoginRequest, RegisterUserRequest, UpdateCompaniesRequest, UpdateTopicsRequest,
    },
    models::dto::response::MessageResponse,
};

#[post("/api/users/register")]
async fn register_user(
    state: web::Data<AppState>,
    request: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.user_service.register(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/users/login")]
async fn login_user(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/api/users/{user_id}")]
async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/api/users/{user_id}/topics")]
async fn update_topics(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    request: web::Json<UpdateTopicsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    state
        .user_service
        .update_topics(&user_id, &request.selected_topics, &request.custom_topics)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Topics updated")))
}

#[put("/api/users/{user_id}/companies")]
async fn update_companies(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    request: web::Json<UpdateCompaniesRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .user_service
        .update_companies(&user_id, &request.into_inner().companies)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Companies updated")))
}

#[get("/api/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Interview Prep API"))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
