//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, warn};

use super::Planner;
use crate::{
    catalog::PortfolioCatalog,
    error::{GlamError, Result},
    storage::{SqliteStorage, Storage},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Arc<dyn Storage>>,
    catalog: Option<Arc<PortfolioCatalog>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage: None,
            catalog: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/glam/glam.db` or `~/.local/share/glam/glam.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed storage adapter instead of SQLite. Takes
    /// precedence over [`PlannerBuilder::with_database_path`].
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Uses a custom catalog instead of the bundled one.
    pub fn with_catalog(mut self, catalog: Arc<PortfolioCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the planner and loads persisted events and saved items.
    ///
    /// Unreadable persisted state degrades to an empty store rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `GlamError::Configuration` if the database path names a
    /// directory, `GlamError::FileSystem` if its parent cannot be created,
    /// `GlamError::XdgDirectory` if no default path can be found, and
    /// `GlamError::Storage` if the database cannot be opened.
    pub async fn build(self) -> Result<Planner> {
        let storage: Arc<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                if db_path.is_dir() {
                    return Err(GlamError::Configuration {
                        message: format!("database path {} is a directory", db_path.display()),
                    });
                }

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| GlamError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let sqlite = SqliteStorage::open(&db_path).await?;
                debug!("Opened storage at {}", sqlite.path().display());
                Arc::new(sqlite)
            }
        };

        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(PortfolioCatalog::bundled()));

        let planner = Planner::new(storage, catalog);
        planner.load_events().await;
        if let Err(e) = planner.saved_items().load().await {
            warn!("Failed to load saved items, starting empty: {e}");
        }

        Ok(planner)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("glam")
            .place_data_file("glam.db")
            .map_err(|e| GlamError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
