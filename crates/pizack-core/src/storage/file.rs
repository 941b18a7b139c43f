//! File-backed storage backend.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::Storage;
use crate::error::{PizackError, Result, StorageResultExt};

/// Storage keeping one `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).storage_context(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PizackError::invalid_input("key")
                .with_reason(format!("Storage key '{key}' must be [A-Za-z0-9_-]+")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PizackError::storage(path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Write beside the target and rename so readers never see a torn file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).storage_context(&tmp)?;
        fs::rename(&tmp, &path).storage_context(&path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(storage.get_item("pizack_orders").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::open(temp_dir.path().join("nested/data")).unwrap();

        storage.set_item("pizack_orders", "[]").unwrap();
        storage.set_item("pizack_orders", "[1]").unwrap();

        assert_eq!(storage.get_item("pizack_orders").unwrap().as_deref(), Some("[1]"));
        assert!(storage.dir().join("pizack_orders.json").exists());
        assert!(!storage.dir().join("pizack_orders.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        assert!(storage.set_item("../escape", "x").is_err());
        assert!(storage.get_item("").is_err());
    }
}
