use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::dto::user_dto::{CreateUserRequest, MessageResponse};
use crate::models::User;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/usersWithoutCache", get(get_users_without_cache))
        .route("/user", post(create_user))
        .route("/user/:id", delete(delete_user))
        .route("/userWithoutRemovingCache/:id", delete(delete_user_without_removing_cache))
}

async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users().await)
}

async fn get_users_without_cache(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users_uncached().await)
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<User>)> {
    let Json(request) = payload.map_err(|e| {
        AppError::BadRequest(format!("Failed to parse request body: {}", e.body_text()))
    })?;

    let user = state.user_service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(&id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

async fn delete_user_without_removing_cache(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user_keeping_cache(&id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
