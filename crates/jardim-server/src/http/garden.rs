//! Routes for the multi-entity garden variant.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use jardim_core::{
    params::{CreateGardener, CreateSpecies, Id, LogCareTask, RegisterPlant},
    CareTask, Gardener, Keeper, Plant, Species, WateringForecast,
};
use log::debug;

use super::{
    errors::{ApiError, ApiResult},
    AppState,
};

/// Builds the garden variant router.
pub fn router(keeper: Arc<Keeper>) -> Router {
    Router::new()
        .route("/jardineiros/", post(create_gardener))
        .route("/especies/", post(create_species).get(list_species))
        .route(
            "/jardineiros/{id}/plantas/",
            post(register_plant).get(list_plants),
        )
        .route("/plantas/{id}/tarefas/", post(log_care_task))
        .route("/plantas/{id}/proxima_rega/", get(next_watering))
        .with_state(AppState { keeper })
}

async fn create_gardener(
    State(state): State<AppState>,
    Json(params): Json<CreateGardener>,
) -> ApiResult<Gardener> {
    debug!("create_gardener: {:?}", params.email);
    Ok(Json(state.keeper.create_gardener(&params).await?))
}

async fn create_species(
    State(state): State<AppState>,
    Json(params): Json<CreateSpecies>,
) -> ApiResult<Species> {
    Ok(Json(state.keeper.create_species(&params).await?))
}

async fn list_species(State(state): State<AppState>) -> ApiResult<Vec<Species>> {
    Ok(Json(state.keeper.list_species().await?))
}

async fn register_plant(
    State(state): State<AppState>,
    Path(gardener_id): Path<u64>,
    Json(params): Json<RegisterPlant>,
) -> ApiResult<Plant> {
    Ok(Json(state.keeper.register_plant(gardener_id, &params).await?))
}

async fn list_plants(
    State(state): State<AppState>,
    Path(gardener_id): Path<u64>,
) -> ApiResult<Vec<Plant>> {
    Ok(Json(state.keeper.list_plants(gardener_id).await?))
}

async fn log_care_task(
    State(state): State<AppState>,
    Path(plant_id): Path<u64>,
    Json(params): Json<LogCareTask>,
) -> ApiResult<CareTask> {
    Ok(Json(state.keeper.log_care_task(plant_id, &params).await?))
}

async fn next_watering(
    State(state): State<AppState>,
    Path(plant_id): Path<u64>,
) -> Result<Json<WateringForecast>, ApiError> {
    let forecast = state.keeper.next_watering(&Id { id: plant_id }).await?;
    Ok(Json(forecast))
}
