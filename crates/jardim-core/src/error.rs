//! Error types for the plant care library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all plant care operations.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Gardener not found for the given ID
    #[error("Gardener with ID {id} not found")]
    GardenerNotFound { id: u64 },
    /// Species not found for the given ID
    #[error("Species with ID {id} not found")]
    SpeciesNotFound { id: u64 },
    /// Registered plant not found for the given ID
    #[error("Plant with ID {id} not found")]
    PlantNotFound { id: u64 },
    /// Encyclopedia entry not found for the given ID
    #[error("Plant entry with ID {id} not found")]
    EntryNotFound { id: u64 },
    /// A gardener with this email is already registered
    #[error("Email '{email}' is already registered")]
    EmailTaken { email: String },
    /// A species with this popular or scientific name already exists
    #[error("Species '{name}' is already in the catalog")]
    SpeciesExists { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GardenError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database_error(message, e))
    }
}

/// Result type alias for plant care operations
pub type Result<T> = std::result::Result<T, GardenError>;
