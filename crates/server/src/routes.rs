pub mod company;
pub mod contact;
pub mod properties;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::{Health, ServiceIdentity};
use models::db::Store;

/// Shared per-process state; the store handle is the only thing carried
/// across requests.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<Store>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Liveness/identity probe at the API root.
async fn identity() -> Json<ServiceIdentity> {
    Json(ServiceIdentity {
        message: "Golden Citizen API - Yunanistan Golden Visa",
        status: "active",
    })
}

/// CORS layer from the configured origin list; a `*` entry means wildcard.
pub fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::very_permissive();
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full application router: `/health` at the root plus the public
/// API under `/api`.
pub fn build_router(cors: CorsLayer, state: ApiState) -> Router {
    let api = Router::new()
        .route("/", get(identity))
        .route(
            "/properties",
            get(properties::list).post(properties::create),
        )
        .route("/properties/:id", get(properties::detail))
        .route("/contact", post(contact::submit))
        .route("/contacts", get(contact::list))
        .route("/company-info", get(company::info));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
