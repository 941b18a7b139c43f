//! Builder for creating and configuring PizzaStore instances.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::{writer::Writer, PizzaStore};
use crate::{
    error::{PizackError, Result},
    storage::{load_orders, FileStorage, Storage, STORAGE_KEY},
};

/// Builder for creating and configuring PizzaStore instances.
///
/// A store must be built inside a Tokio runtime: it spawns the background
/// writer that persists the collection.
#[derive(Clone, Default)]
pub struct PizzaStoreBuilder {
    data_dir: Option<PathBuf>,
    storage: Option<Arc<dyn Storage>>,
}

impl fmt::Debug for PizzaStoreBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PizzaStoreBuilder")
            .field("data_dir", &self.data_dir)
            .field("custom_storage", &self.storage.is_some())
            .finish()
    }
}

impl PizzaStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory for file-backed storage.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pizack/` or `~/.local/share/pizack/`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a custom storage backend; takes precedence over the data dir.
    pub fn with_storage<S: Storage>(mut self, storage: S) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Builds the store, loading any previously saved orders.
    ///
    /// Missing or corrupt saved data yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `PizackError::XdgDirectory` if no default data dir can be found
    /// Returns `PizackError::Storage` if the data dir cannot be created
    pub async fn build(self) -> Result<PizzaStore> {
        let storage: Arc<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None => {
                let dir = match self.data_dir {
                    Some(dir) => dir,
                    None => Self::default_data_dir()?,
                };
                debug!("Using data directory {}", dir.display());
                Arc::new(FileStorage::open(dir)?)
            }
        };

        let loader = Arc::clone(&storage);
        let orders = task::spawn_blocking(move || load_orders(loader.as_ref()))
            .await
            .map_err(|e| PizackError::Configuration {
                message: format!("Task join error: {e}"),
            })?;
        debug!("Loaded {} order(s)", orders.len());

        Ok(PizzaStore::new(orders, Writer::spawn(storage)))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let file = xdg::BaseDirectories::with_prefix("pizack")
            .place_data_file(format!("{STORAGE_KEY}.json"))
            .map_err(|e| PizackError::XdgDirectory(e.to_string()))?;

        file.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| PizackError::XdgDirectory("Data file has no parent".to_string()))
    }
}
