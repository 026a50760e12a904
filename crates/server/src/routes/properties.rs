use axum::extract::{Path, State};
use axum::Json;

use models::ids::RecordId;
use models::property::{self, PropertyInput};

use crate::errors::ApiError;
use crate::routes::ApiState;
use crate::views::PropertyView;

/// `GET /api/properties` — all active listings, capped at 100.
pub async fn list(State(state): State<ApiState>) -> Result<Json<Vec<PropertyView>>, ApiError> {
    let listings = property::list_active(&state.store).await?;
    Ok(Json(listings.into_iter().map(PropertyView::from).collect()))
}

/// `GET /api/properties/:id` — 400 on a malformed id, 404 when the listing
/// is absent or archived.
pub async fn detail(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyView>, ApiError> {
    let id: RecordId = id.parse().map_err(|_| ApiError::InvalidId(id))?;
    let listing = property::find_active(&state.store, id.as_object_id())
        .await?
        .ok_or(ApiError::NotFound("property"))?;
    Ok(Json(listing.into()))
}

/// `POST /api/properties` — admin-side creation; server assigns id, status
/// and creation time. No validation beyond the payload shape.
pub async fn create(
    State(state): State<ApiState>,
    Json(input): Json<PropertyInput>,
) -> Result<Json<PropertyView>, ApiError> {
    let created = property::create(&state.store, input).await?;
    Ok(Json(created.into()))
}
