//! Database operations and SQLite management for the plant care store.
//!
//! This module provides low-level database operations for the jardim
//! service. It handles SQLite connections, schema management, and the
//! specialized query interfaces for each entity. Every public method is
//! one unit of work: single statements execute directly, multi-statement
//! work runs in one transaction and commits before returning.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod entry_queries;
pub mod gardener_queries;
pub mod migrations;
pub mod plant_queries;
pub mod seed;
pub mod species_queries;
pub mod task_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
