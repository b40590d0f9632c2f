use axum::{extract::{Path, State}, Json};
use uuid::Uuid;

use models::business;
use service::business_service::{self, BusinessDetail};

use crate::errors::ApiError;
use crate::state::AppState;

/// `GET /business/`
pub async fn list_businesses(State(state): State<AppState>) -> Result<Json<Vec<business::Model>>, ApiError> {
    let rows = business_service::list_businesses(&state.db).await?;
    Ok(Json(rows))
}

/// `GET /business/:business_id`: the business with its address embedded,
/// or `null` when no such business exists.
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Option<BusinessDetail>>, ApiError> {
    let found = business_service::get_business_with_address(&state.db, business_id).await?;
    Ok(Json(found))
}
