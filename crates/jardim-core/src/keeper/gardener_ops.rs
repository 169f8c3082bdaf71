//! Gardener operations for the Keeper.

use tokio::task;

use super::{join_error, Keeper};
use crate::{
    db::Database,
    error::Result,
    models::Gardener,
    params::CreateGardener,
};

impl Keeper {
    /// Registers a new gardener.
    ///
    /// Fails with `GardenError::EmailTaken` when the email is already
    /// registered; the uniqueness check lives in the storage layer.
    pub async fn create_gardener(&self, params: &CreateGardener) -> Result<Gardener> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let email = params.email.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.create_gardener(&name, &email)
        })
        .await
        .map_err(join_error)?
    }

    /// Looks up a gardener by email.
    pub async fn gardener_by_email(&self, email: &str) -> Result<Option<Gardener>> {
        let db_path = self.db_path.clone();
        let email = email.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_gardener_by_email(&email)
        })
        .await
        .map_err(join_error)?
    }
}
