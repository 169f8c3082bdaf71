//! Encyclopedia entry CRUD queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::PlantEntry,
    params::{CreateEntry, UpdateEntry},
};

use super::utils::id_column;

const INSERT_ENTRY_SQL: &str = "INSERT INTO plant_entries (popular_name, scientific_name, family, origin, care_notes) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ENTRY_SQL: &str = "SELECT id, popular_name, scientific_name, family, origin, care_notes FROM plant_entries WHERE id = ?1";
const LIST_ENTRIES_SQL: &str = "SELECT id, popular_name, scientific_name, family, origin, care_notes FROM plant_entries ORDER BY id LIMIT ?1 OFFSET ?2";
const UPDATE_ENTRY_SQL: &str = "UPDATE plant_entries SET popular_name = ?1, scientific_name = ?2, family = ?3, origin = ?4, care_notes = ?5 WHERE id = ?6";
const DELETE_ENTRY_SQL: &str = "DELETE FROM plant_entries WHERE id = ?1";

impl super::Database {
    /// Helper to construct a PlantEntry from a database row.
    fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlantEntry> {
        Ok(PlantEntry {
            id: id_column(row, 0)?,
            popular_name: row.get(1)?,
            scientific_name: row.get(2)?,
            family: row.get(3)?,
            origin: row.get(4)?,
            care_notes: row.get(5)?,
        })
    }

    /// Creates a new encyclopedia entry.
    pub fn create_entry(&self, params: &CreateEntry) -> Result<PlantEntry> {
        self.connection
            .execute(
                INSERT_ENTRY_SQL,
                params![
                    params.popular_name,
                    params.scientific_name,
                    params.family,
                    params.origin,
                    params.care_notes
                ],
            )
            .db_context("Failed to insert plant entry")?;

        Ok(PlantEntry {
            id: self.connection.last_insert_rowid() as u64,
            popular_name: params.popular_name.clone(),
            scientific_name: params.scientific_name.clone(),
            family: params.family.clone(),
            origin: params.origin.clone(),
            care_notes: params.care_notes.clone(),
        })
    }

    /// Lists entries ordered by ID with skip/limit pagination.
    pub fn list_entries(&self, skip: u32, limit: u32) -> Result<Vec<PlantEntry>> {
        let mut stmt = self
            .connection
            .prepare(LIST_ENTRIES_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        let entries: Vec<PlantEntry> = stmt
            .query_map(params![limit as i64, skip as i64], Self::build_entry_from_row)
            .map_err(|e| GardenError::database_error("Failed to query plant entries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GardenError::database_error("Failed to fetch plant entries", e))?;

        Ok(entries)
    }

    /// Retrieves an entry by ID.
    pub fn get_entry(&self, id: u64) -> Result<Option<PlantEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ENTRY_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::build_entry_from_row)
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query plant entry", e))
    }

    /// Partially updates an entry.
    ///
    /// Fields present in the request overwrite the stored values field by
    /// field; absent fields keep the stored value. The merged record is
    /// written back in full and returned.
    pub fn update_entry(&mut self, id: u64, changes: &UpdateEntry) -> Result<PlantEntry> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut entry = tx
            .query_row(SELECT_ENTRY_SQL, params![id as i64], Self::build_entry_from_row)
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query plant entry", e))?
            .ok_or(GardenError::EntryNotFound { id })?;

        if let Some(ref popular_name) = changes.popular_name {
            entry.popular_name = popular_name.clone();
        }
        if let Some(ref scientific_name) = changes.scientific_name {
            entry.scientific_name = scientific_name.clone();
        }
        if let Some(ref family) = changes.family {
            entry.family = family.clone();
        }
        if let Some(ref origin) = changes.origin {
            entry.origin = origin.clone();
        }
        if let Some(ref care_notes) = changes.care_notes {
            entry.care_notes = care_notes.clone();
        }

        tx.execute(
            UPDATE_ENTRY_SQL,
            params![
                entry.popular_name,
                entry.scientific_name,
                entry.family,
                entry.origin,
                entry.care_notes,
                id as i64
            ],
        )
        .map_err(|e| GardenError::database_error("Failed to update plant entry", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(entry)
    }

    /// Deletes an entry, returning the deleted record.
    pub fn delete_entry(&mut self, id: u64) -> Result<PlantEntry> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let entry = tx
            .query_row(SELECT_ENTRY_SQL, params![id as i64], Self::build_entry_from_row)
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query plant entry", e))?
            .ok_or(GardenError::EntryNotFound { id })?;

        tx.execute(DELETE_ENTRY_SQL, params![id as i64])
            .map_err(|e| GardenError::database_error("Failed to delete plant entry", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(entry)
    }
}
