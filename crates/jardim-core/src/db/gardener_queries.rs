//! Gardener queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{GardenError, Result},
    models::Gardener,
};

use super::utils::{id_column, is_unique_violation};

const INSERT_GARDENER_SQL: &str = "INSERT INTO gardeners (name, email) VALUES (?1, ?2)";
const SELECT_GARDENER_BY_EMAIL_SQL: &str =
    "SELECT id, name, email FROM gardeners WHERE email = ?1";

impl super::Database {
    /// Registers a new gardener.
    ///
    /// Email uniqueness is enforced by the UNIQUE constraint on the
    /// gardeners table rather than a prior read, so concurrent requests
    /// cannot slip a duplicate past the check.
    pub fn create_gardener(&self, name: &str, email: &str) -> Result<Gardener> {
        match self.connection.execute(INSERT_GARDENER_SQL, params![name, email]) {
            Ok(_) => Ok(Gardener {
                id: self.connection.last_insert_rowid() as u64,
                name: name.into(),
                email: email.into(),
                plants: Vec::new(),
            }),
            Err(e) if is_unique_violation(&e) => Err(GardenError::EmailTaken {
                email: email.into(),
            }),
            Err(e) => Err(GardenError::database_error("Failed to insert gardener", e)),
        }
    }

    /// Looks up a gardener by email.
    pub fn get_gardener_by_email(&self, email: &str) -> Result<Option<Gardener>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GARDENER_BY_EMAIL_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![email], |row| {
            Ok(Gardener {
                id: id_column(row, 0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                plants: Vec::new(),
            })
        })
        .optional()
        .map_err(|e| GardenError::database_error("Failed to query gardener", e))
    }
}
