//! Species catalog queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{GardenError, Result},
    models::Species,
    params::CreateSpecies,
};

use super::utils::{id_column, is_unique_violation};

const INSERT_SPECIES_SQL: &str = "INSERT INTO species (popular_name, scientific_name, care_instructions, watering_interval_days) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SPECIES_COLUMNS: &str =
    "id, popular_name, scientific_name, care_instructions, watering_interval_days";
const LIST_SPECIES_SQL: &str = "SELECT id, popular_name, scientific_name, care_instructions, watering_interval_days FROM species ORDER BY id";

impl super::Database {
    /// Helper to construct a Species from a database row.
    pub(crate) fn build_species_from_row(row: &rusqlite::Row) -> rusqlite::Result<Species> {
        Ok(Species {
            id: id_column(row, 0)?,
            popular_name: row.get(1)?,
            scientific_name: row.get(2)?,
            care_instructions: row.get(3)?,
            watering_interval_days: row.get(4)?,
        })
    }

    /// Adds a species to the catalog.
    pub fn create_species(&self, params: &CreateSpecies) -> Result<Species> {
        let result = self.connection.execute(
            INSERT_SPECIES_SQL,
            params![
                params.popular_name,
                params.scientific_name,
                params.care_instructions,
                params.watering_interval_days
            ],
        );

        match result {
            Ok(_) => Ok(Species {
                id: self.connection.last_insert_rowid() as u64,
                popular_name: params.popular_name.clone(),
                scientific_name: params.scientific_name.clone(),
                care_instructions: params.care_instructions.clone(),
                watering_interval_days: params.watering_interval_days,
            }),
            Err(e) if is_unique_violation(&e) => Err(GardenError::SpeciesExists {
                name: params.popular_name.clone(),
            }),
            Err(e) => Err(GardenError::database_error("Failed to insert species", e)),
        }
    }

    /// Lists the whole species catalog ordered by ID.
    pub fn list_species(&self) -> Result<Vec<Species>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SPECIES_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        let species: Vec<Species> = stmt
            .query_map([], Self::build_species_from_row)
            .map_err(|e| GardenError::database_error("Failed to query species", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GardenError::database_error("Failed to fetch species", e))?;

        Ok(species)
    }

    /// Fetches a single species by ID.
    pub(crate) fn get_species(&self, id: u64) -> Result<Option<Species>> {
        let sql = format!("SELECT {SELECT_SPECIES_COLUMNS} FROM species WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::build_species_from_row)
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query species", e))
    }
}
