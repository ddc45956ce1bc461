use axum::Router;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wordbook_core::LookupError;
use wordbook_types::{Language, LookupResult};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/dictionary/:language/:word", get(lookup_word))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn lookup_word(
    Path((language, word)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<LookupResult>, ApiError> {
    let language: Language = language.parse().map_err(LookupError::from)?;

    let result = state.lookup.lookup_in(&word, language).await?;

    Ok(Json(LookupResult::clone(&result)))
}
