use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::ChatRequest,
    models::dto::response::ChatResponse,
};

#[post("/api/ai/chat")]
async fn ai_chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.ai_service.chat(&request.message).await?;
    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
