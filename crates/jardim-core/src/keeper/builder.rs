//! Builder for creating and configuring Keeper instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::{join_error, Keeper};
use crate::{
    db::Database,
    error::{GardenError, Result},
};

/// Builder for creating and configuring Keeper instances.
#[derive(Debug, Clone)]
pub struct KeeperBuilder {
    database_path: Option<PathBuf>,
}

impl KeeperBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/jardim/jardim.db` or `~/.local/share/jardim/jardim.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured keeper instance.
    ///
    /// Opens the database once to create the schema, then hands the path
    /// to the keeper; every operation re-opens its own scoped connection.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the database path is invalid
    /// Returns `GardenError::Database` if schema initialization fails
    pub async fn build(self) -> Result<Keeper> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), GardenError>(())
        })
        .await
        .map_err(join_error)??;

        Ok(Keeper::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("jardim")
            .place_data_file("jardim.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}

impl Default for KeeperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
