use axum::{extract::State, Json};

use models::user;
use service::user_service;

use crate::errors::ApiError;
use crate::state::AppState;

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, ApiError> {
    let users = user_service::list_users(&state.db).await?;
    Ok(Json(users))
}
