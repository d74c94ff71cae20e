use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/analytics/{user_id}")]
async fn get_analytics(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.analytics_service.analyze(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/checklist/{user_id}")]
async fn get_checklist(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.analytics_service.checklist(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
