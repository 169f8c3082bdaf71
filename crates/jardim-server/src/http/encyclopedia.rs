//! Routes for the standalone encyclopedia variant.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use jardim_core::{
    params::{CreateEntry, Id, ListEntries, UpdateEntry},
    GardenError, Keeper, PlantEntry,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::{
    errors::{ApiError, ApiResult},
    AppState,
};

/// Builds the encyclopedia variant router.
///
/// Cross-origin requests are allowed from the given origins, or from any
/// origin when the list is empty.
pub fn router(keeper: Arc<Keeper>, cors_origins: &[String]) -> anyhow::Result<Router> {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{origin}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Ok(Router::new()
        .route("/plantas/", post(create_entry).get(list_entries))
        .route(
            "/plantas/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .with_state(AppState { keeper })
        .layer(cors))
}

async fn create_entry(
    State(state): State<AppState>,
    Json(params): Json<CreateEntry>,
) -> Result<(StatusCode, Json<PlantEntry>), ApiError> {
    let entry = state.keeper.create_entry(&params).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<ListEntries>,
) -> ApiResult<Vec<PlantEntry>> {
    Ok(Json(state.keeper.list_entries(&params).await?))
}

async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<PlantEntry> {
    let entry = state
        .keeper
        .get_entry(&Id { id })
        .await?
        .ok_or(GardenError::EntryNotFound { id })?;
    Ok(Json(entry))
}

async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(changes): Json<UpdateEntry>,
) -> ApiResult<PlantEntry> {
    Ok(Json(state.keeper.update_entry(id, &changes).await?))
}

async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<PlantEntry> {
    Ok(Json(state.keeper.delete_entry(&Id { id }).await?))
}
