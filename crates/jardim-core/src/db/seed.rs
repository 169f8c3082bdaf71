//! Idempotent seed catalogs for both deployment variants.
//!
//! Each variant inserts a small fixed catalog on startup. The functions
//! here are explicit and guarded by existence checks, so running them on
//! every process start never duplicates rows.

use rusqlite::params;

use crate::error::{DatabaseResultExt, GardenError, Result};

/// A seed row for the species catalog.
struct SeedSpecies {
    popular_name: &'static str,
    scientific_name: &'static str,
    care_instructions: &'static str,
    watering_interval_days: i32,
}

/// A seed row for the encyclopedia.
struct SeedEntry {
    popular_name: &'static str,
    scientific_name: &'static str,
    family: &'static str,
    origin: &'static str,
    care_notes: &'static str,
}

const SPECIES_CATALOG: &[SeedSpecies] = &[
    SeedSpecies {
        popular_name: "Jiboia",
        scientific_name: "Epipremnum aureum",
        care_instructions: "Manter o solo úmido, mas não encharcado. Gosta de luz indireta.",
        watering_interval_days: 7,
    },
    SeedSpecies {
        popular_name: "Espada-de-São-Jorge",
        scientific_name: "Dracaena trifasciata",
        care_instructions: "Muito resistente. Regar apenas quando o solo estiver bem seco.",
        watering_interval_days: 15,
    },
    SeedSpecies {
        popular_name: "Samambaia",
        scientific_name: "Nephrolepis exaltata",
        care_instructions: "Gosta de muita umidade. Borrife água nas folhas.",
        watering_interval_days: 3,
    },
];

const ENTRY_CATALOG: &[SeedEntry] = &[
    SeedEntry {
        popular_name: "Jiboia",
        scientific_name: "Epipremnum aureum",
        family: "Araceae",
        origin: "Sudeste Asiático",
        care_notes: "Manter o solo úmido, mas não encharcado. Gosta de luz indireta.",
    },
    SeedEntry {
        popular_name: "Espada-de-São-Jorge",
        scientific_name: "Dracaena trifasciata",
        family: "Asparagaceae",
        origin: "África Ocidental",
        care_notes: "Muito resistente. Regar apenas quando o solo estiver bem seco.",
    },
    SeedEntry {
        popular_name: "Samambaia",
        scientific_name: "Nephrolepis exaltata",
        family: "Lomariopsidaceae",
        origin: "Regiões tropicais das Américas",
        care_notes: "Gosta de muita umidade. Borrife água nas folhas.",
    },
];

impl super::Database {
    /// Ensures the fixed species catalog is present.
    ///
    /// Each seed species is checked by popular name and inserted only when
    /// absent. Returns the number of rows inserted.
    pub fn ensure_species_catalog(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut inserted = 0;
        for seed in SPECIES_CATALOG {
            let exists: bool = tx
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM species WHERE popular_name = ?1)",
                    params![seed.popular_name],
                    |row| row.get(0),
                )
                .map_err(|e| GardenError::database_error("Failed to check seed species", e))?;

            if !exists {
                tx.execute(
                    "INSERT INTO species (popular_name, scientific_name, care_instructions, watering_interval_days) VALUES (?1, ?2, ?3, ?4)",
                    params![
                        seed.popular_name,
                        seed.scientific_name,
                        seed.care_instructions,
                        seed.watering_interval_days
                    ],
                )
                .map_err(|e| GardenError::database_error("Failed to insert seed species", e))?;
                inserted += 1;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(inserted)
    }

    /// Ensures the fixed encyclopedia catalog is present.
    ///
    /// The catalog is inserted only when the table is empty. Returns the
    /// number of rows inserted.
    pub fn ensure_entry_catalog(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let count: i64 = tx
            .query_row("SELECT COUNT(*) FROM plant_entries", [], |row| row.get(0))
            .map_err(|e| GardenError::database_error("Failed to count plant entries", e))?;

        let mut inserted = 0;
        if count == 0 {
            for seed in ENTRY_CATALOG {
                tx.execute(
                    "INSERT INTO plant_entries (popular_name, scientific_name, family, origin, care_notes) VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        seed.popular_name,
                        seed.scientific_name,
                        seed.family,
                        seed.origin,
                        seed.care_notes
                    ],
                )
                .map_err(|e| GardenError::database_error("Failed to insert seed entry", e))?;
                inserted += 1;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(inserted)
    }
}
