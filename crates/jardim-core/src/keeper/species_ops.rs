//! Species catalog operations for the Keeper.

use tokio::task;

use super::{join_error, Keeper};
use crate::{
    db::Database,
    error::Result,
    models::Species,
    params::CreateSpecies,
};

impl Keeper {
    /// Adds a species to the catalog after validating its parameters.
    pub async fn create_species(&self, params: &CreateSpecies) -> Result<Species> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.create_species(&params)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists the whole species catalog.
    pub async fn list_species(&self) -> Result<Vec<Species>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_species()
        })
        .await
        .map_err(join_error)?
    }

    /// Ensures the fixed seed species catalog is present (garden variant
    /// startup). Idempotent; returns the number of rows inserted.
    pub async fn ensure_species_catalog(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.ensure_species_catalog()
        })
        .await
        .map_err(join_error)?
    }
}
