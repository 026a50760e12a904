use axum::extract::State;
use axum::Json;

use models::company;

use crate::errors::ApiError;
use crate::routes::ApiState;
use crate::views::CompanyInfoView;

/// `GET /api/company-info` — the current record; synthesizes and persists
/// the hardcoded default when the collection is empty.
pub async fn info(State(state): State<ApiState>) -> Result<Json<CompanyInfoView>, ApiError> {
    let info = company::current_or_default(&state.store).await?;
    Ok(Json(info.into()))
}
