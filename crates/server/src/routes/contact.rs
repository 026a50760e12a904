use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use models::contact::{self, ContactInput};

use crate::errors::ApiError;
use crate::routes::ApiState;
use crate::views::ContactView;

const CONFIRMATION: &str =
    "İletişim formunuz başarıyla gönderildi. En kısa sürede size geri dönüş yapacağız.";

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// `POST /api/contact` — persists unconditionally; no content validation.
pub async fn submit(
    State(state): State<ApiState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<ContactAck>, ApiError> {
    let contact = contact::create(&state.store, input).await?;
    info!(name = %contact.name, email = %contact.email, "new contact submission");
    Ok(Json(ContactAck {
        success: true,
        message: CONFIRMATION.to_string(),
        id: contact.id.map(|oid| oid.to_hex()).unwrap_or_default(),
    }))
}

/// `GET /api/contacts` — admin-side listing, newest first, capped at 100.
pub async fn list(State(state): State<ApiState>) -> Result<Json<Vec<ContactView>>, ApiError> {
    let contacts = contact::list_recent(&state.store).await?;
    Ok(Json(contacts.into_iter().map(ContactView::from).collect()))
}
