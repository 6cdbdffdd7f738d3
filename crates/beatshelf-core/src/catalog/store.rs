//! Load and save the persisted catalog
//!
//! Pure data access: no filesystem scanning logic lives here. The recovery
//! policy for a missing or malformed catalog file belongs to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Persisted catalog access, backed by a human-diffable JSON file.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store backed by the given catalog file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deserialize the persisted catalog.
    ///
    /// An absent file is [`Error::CatalogNotFound`] and malformed contents
    /// are [`Error::CatalogParse`]; both are fatal at this level.
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(Error::CatalogNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| Error::CatalogParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Serialize the catalog to disk.
    ///
    /// Writes to a sibling temporary file and renames it into place, so a
    /// crash mid-write never truncates the previous valid file.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            serde_json::to_string_pretty(catalog).map_err(|e| Error::CatalogWrite {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BeatmapSetRecord, DifficultyRecord};
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        let mut set = BeatmapSetRecord::new("Song A");
        set.song_name = Some("audio".to_string());
        set.song_ext = Some("ogg".to_string());
        set.preview_time = Some("3.250".to_string());
        set.artist = Some("Band".to_string());
        set.difficulties
            .insert("Easy".to_string(), DifficultyRecord::default());

        let mut catalog = Catalog::new();
        catalog.insert("001".to_string(), set);
        catalog
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("database.json"));
        assert!(matches!(store.load(), Err(Error::CatalogNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, "{ not json").unwrap();
        let store = CatalogStore::new(path);
        assert!(matches!(store.load(), Err(Error::CatalogParse { .. })));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("database.json"));

        let catalog = sample_catalog();
        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, catalog);

        // A second save of the loaded catalog reproduces identical bytes.
        let first = fs::read(store.path()).unwrap();
        store.save(&loaded).unwrap();
        let second = fs::read(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("database.json"));
        store.save(&sample_catalog()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["database.json".to_string()]);
    }

    #[test]
    fn test_save_overwrites_previous_catalog() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("database.json"));

        store.save(&sample_catalog()).unwrap();

        let mut updated = sample_catalog();
        updated.insert("002".to_string(), BeatmapSetRecord::new("Song B"));
        store.save(&updated).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains_key("002"));
    }
}
