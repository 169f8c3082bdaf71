//! Registered plant and care task operations for the Keeper.

use tokio::task;

use super::{join_error, Keeper};
use crate::{
    db::Database,
    error::{GardenError, Result},
    models::{CareTask, Plant},
    params::{Id, LogCareTask, RegisterPlant},
    watering::{self, WateringForecast},
};

impl Keeper {
    /// Registers a new plant under the given gardener.
    pub async fn register_plant(&self, gardener_id: u64, params: &RegisterPlant) -> Result<Plant> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.register_plant(gardener_id, &params)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists all plants of a gardener, each with its species populated.
    pub async fn list_plants(&self, gardener_id: u64) -> Result<Vec<Plant>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plants(gardener_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a plant by ID with species and tasks populated.
    pub async fn get_plant(&self, params: &Id) -> Result<Option<Plant>> {
        let db_path = self.db_path.clone();
        let plant_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plant(plant_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Permanently deletes a plant and all its care tasks.
    pub async fn delete_plant(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plant_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plant(plant_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Logs a care task for the given plant.
    pub async fn log_care_task(&self, plant_id: u64, params: &LogCareTask) -> Result<CareTask> {
        let db_path = self.db_path.clone();
        let task_type = params.task_type.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.log_care_task(plant_id, &task_type)
        })
        .await
        .map_err(join_error)?
    }

    /// Computes the next-watering forecast for a plant.
    ///
    /// Composes the plant lookup (not-found when unknown) with the most
    /// recent watering task, then delegates to the pure calculator in
    /// [`crate::watering`]. Both reads share one scoped connection.
    pub async fn next_watering(&self, params: &Id) -> Result<WateringForecast> {
        let db_path = self.db_path.clone();
        let plant_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;

            let plant = db
                .get_plant(plant_id)?
                .ok_or(GardenError::PlantNotFound { id: plant_id })?;
            let last_watering = db.last_watering(plant_id)?;

            watering::forecast(
                last_watering.map(|task| task.performed_at),
                plant.species.watering_interval_days,
            )
        })
        .await
        .map_err(join_error)?
    }
}
