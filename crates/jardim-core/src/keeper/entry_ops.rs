//! Encyclopedia entry operations for the Keeper.

use tokio::task;

use super::{join_error, Keeper};
use crate::{
    db::Database,
    error::Result,
    models::PlantEntry,
    params::{CreateEntry, Id, ListEntries, UpdateEntry},
};

impl Keeper {
    /// Creates a new encyclopedia entry.
    pub async fn create_entry(&self, params: &CreateEntry) -> Result<PlantEntry> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.create_entry(&params)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists entries ordered by ID with skip/limit pagination.
    pub async fn list_entries(&self, params: &ListEntries) -> Result<Vec<PlantEntry>> {
        let db_path = self.db_path.clone();
        let ListEntries { skip, limit } = *params;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_entries(skip, limit)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves an entry by ID.
    pub async fn get_entry(&self, params: &Id) -> Result<Option<PlantEntry>> {
        let db_path = self.db_path.clone();
        let entry_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_entry(entry_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Partially updates an entry; absent fields keep their stored values.
    pub async fn update_entry(&self, entry_id: u64, changes: &UpdateEntry) -> Result<PlantEntry> {
        let db_path = self.db_path.clone();
        let changes = changes.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_entry(entry_id, &changes)
        })
        .await
        .map_err(join_error)?
    }

    /// Deletes an entry, returning the deleted record.
    pub async fn delete_entry(&self, params: &Id) -> Result<PlantEntry> {
        let db_path = self.db_path.clone();
        let entry_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_entry(entry_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Ensures the fixed encyclopedia catalog is present (encyclopedia
    /// variant startup). Idempotent; returns the number of rows inserted.
    pub async fn ensure_entry_catalog(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.ensure_entry_catalog()
        })
        .await
        .map_err(join_error)?
    }
}
