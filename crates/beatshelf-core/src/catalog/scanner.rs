//! Scan the beatmap library folder and synchronize the catalog
//!
//! The scanner walks the immediate subdirectories of the library root,
//! creates records for sets and difficulties the catalog does not know yet,
//! and persists the result. Existing records are never mutated or removed,
//! even when the underlying files changed or disappeared.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use tracing::{info, warn};

use crate::catalog::{BeatmapSetRecord, Catalog, CatalogStore, DifficultyRecord};
use crate::error::{Error, Result};
use crate::parser::read_metadata;

/// Extension of difficulty description files.
pub const DESCRIPTION_EXT: &str = "txt";
/// Separator between set identifier and display name in folder names.
pub const SET_SEPARATOR: &str = " - ";

/// Scanner for a beatmap library root directory.
///
/// Performs blocking filesystem I/O; invoke at startup or on an explicit
/// re-scan, never on a per-frame path.
pub struct CatalogScanner {
    root: PathBuf,
}

impl CatalogScanner {
    /// Create a scanner for the given library root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The library root this scanner walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Synchronize the persisted catalog with the library on disk.
    ///
    /// Additive only: missing sets and difficulties are created, nothing is
    /// updated or deleted. The full mapping is persisted through `store`
    /// before returning, so partial progress survives malformed entries.
    ///
    /// A missing catalog file starts an empty catalog; a malformed one is a
    /// fatal error, since overwriting it could destroy recoverable data.
    pub fn sync(&self, store: &CatalogStore) -> Result<Catalog> {
        if !self.root.exists() {
            return Err(Error::LibraryNotFound(self.root.clone()));
        }

        let mut catalog = match store.load() {
            Ok(catalog) => catalog,
            Err(Error::CatalogNotFound(path)) => {
                info!(
                    "Catalog file '{}' not found, starting from an empty catalog",
                    path.display()
                );
                Catalog::new()
            }
            Err(e) => return Err(e),
        };

        for folder in self.set_folders()? {
            let Some((set_id, beatmap_name)) = folder.split_once(SET_SEPARATOR) else {
                warn!(
                    "Skipping folder '{}': name has no '{}' separator",
                    folder, SET_SEPARATOR
                );
                continue;
            };
            let set_id = set_id.trim();

            let set = match catalog.entry(set_id.to_string()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    info!("Adding new beatmap set '{} - {}' to catalog", set_id, beatmap_name);
                    entry.insert(BeatmapSetRecord::new(beatmap_name))
                }
            };

            let set_dir = self.root.join(&folder);
            for difficulty_name in description_files(&set_dir)? {
                if set.difficulties.contains_key(&difficulty_name) {
                    continue;
                }

                let description_path =
                    set_dir.join(format!("{}.{}", difficulty_name, DESCRIPTION_EXT));
                let metadata = read_metadata(&description_path);

                info!(
                    "Adding missing difficulty '{}' for beatmap set '{}'",
                    difficulty_name, set_id
                );
                set.difficulties.insert(
                    difficulty_name,
                    DifficultyRecord::from_metadata(&metadata),
                );
                set.populate_song_fields(&metadata);
            }
        }

        store.save(&catalog)?;
        Ok(catalog)
    }

    /// Immediate subdirectory names of the root, sorted lexicographically
    /// for deterministic processing order.
    fn set_folders(&self) -> Result<Vec<String>> {
        let mut folders: Vec<String> = fs::read_dir(&self.root)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        folders.sort();
        Ok(folders)
    }
}

/// Description file stems within a set folder, sorted for determinism.
fn description_files(set_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(set_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(DESCRIPTION_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_description(dir: &Path, name: &str, creator: &str) {
        let content = format!(
            "[METADATA]\nSONG_NAME: audio\nSONG_EXTENSION: ogg\nARTIST: Band\n\
             PREVIEW_TIME: 3.250\nCREATOR: {}\n[OBJECTS]\n0.5,left\n",
            creator
        );
        fs::write(dir.join(format!("{}.txt", name)), content).unwrap();
    }

    fn library_with_one_set() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let set_dir = dir.path().join("001 - Song A");
        fs::create_dir(&set_dir).unwrap();
        write_description(&set_dir, "Easy", "X");
        write_description(&set_dir, "Hard", "Y");
        let catalog_path = dir.path().join("database.json");
        (dir, catalog_path)
    }

    #[test]
    fn test_sync_discovers_sets_and_difficulties() {
        let (dir, catalog_path) = library_with_one_set();
        let store = CatalogStore::new(catalog_path);
        let scanner = CatalogScanner::new(dir.path());

        let catalog = scanner.sync(&store).unwrap();
        assert_eq!(catalog.len(), 1);

        let set = &catalog["001"];
        assert_eq!(set.beatmap_name, "Song A");
        assert_eq!(set.song_name(), "audio");
        assert_eq!(set.song_ext(), "ogg");
        assert_eq!(set.artist(), "Band");
        assert_eq!(set.difficulties.len(), 2);

        let names: Vec<_> = set.difficulties.keys().cloned().collect();
        assert_eq!(names, vec!["Easy", "Hard"]);
        assert_eq!(set.difficulties["Easy"].creator, "X");
        assert_eq!(set.difficulties["Hard"].creator, "Y");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let (dir, catalog_path) = library_with_one_set();
        let store = CatalogStore::new(&catalog_path);
        let scanner = CatalogScanner::new(dir.path());

        scanner.sync(&store).unwrap();
        let first = fs::read(&catalog_path).unwrap();
        scanner.sync(&store).unwrap();
        let second = fs::read(&catalog_path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sync_is_additive_after_file_removal() {
        let (dir, catalog_path) = library_with_one_set();
        let store = CatalogStore::new(catalog_path);
        let scanner = CatalogScanner::new(dir.path());

        scanner.sync(&store).unwrap();
        fs::remove_file(dir.path().join("001 - Song A/Hard.txt")).unwrap();

        let catalog = scanner.sync(&store).unwrap();
        assert!(catalog["001"].difficulties.contains_key("Hard"));
    }

    #[test]
    fn test_sync_never_overwrites_existing_records() {
        let (dir, catalog_path) = library_with_one_set();
        let store = CatalogStore::new(catalog_path);
        let scanner = CatalogScanner::new(dir.path());

        scanner.sync(&store).unwrap();

        // Change the file on disk; the stored record must keep its values.
        let set_dir = dir.path().join("001 - Song A");
        write_description(&set_dir, "Easy", "Z");

        let catalog = scanner.sync(&store).unwrap();
        assert_eq!(catalog["001"].difficulties["Easy"].creator, "X");
    }

    #[test]
    fn test_malformed_folder_name_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("no-separator-here")).unwrap();
        let set_dir = dir.path().join("002 - Song B");
        fs::create_dir(&set_dir).unwrap();
        write_description(&set_dir, "Normal", "X");

        let store = CatalogStore::new(dir.path().join("database.json"));
        let catalog = CatalogScanner::new(dir.path()).sync(&store).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key("002"));
    }

    #[test]
    fn test_unreadable_description_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let set_dir = dir.path().join("003 - Song C");
        fs::create_dir(&set_dir).unwrap();
        fs::write(set_dir.join("Broken.txt"), [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let store = CatalogStore::new(dir.path().join("database.json"));
        let catalog = CatalogScanner::new(dir.path()).sync(&store).unwrap();

        let set = &catalog["003"];
        let broken = &set.difficulties["Broken"];
        assert_eq!(broken.creator, crate::catalog::DEFAULT_CREATOR);
        assert_eq!(broken.bg_name, crate::catalog::DEFAULT_BG_NAME);
        assert_eq!(set.song_name(), crate::catalog::DEFAULT_SONG_NAME);
    }

    #[test]
    fn test_missing_library_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("database.json"));
        let scanner = CatalogScanner::new(dir.path().join("missing"));
        assert!(matches!(
            scanner.sync(&store),
            Err(Error::LibraryNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_catalog_is_fatal() {
        let (dir, catalog_path) = library_with_one_set();
        fs::write(&catalog_path, "{ not json").unwrap();
        let store = CatalogStore::new(catalog_path);
        let scanner = CatalogScanner::new(dir.path());
        assert!(matches!(
            scanner.sync(&store),
            Err(Error::CatalogParse { .. })
        ));
    }

    #[test]
    fn test_set_id_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let set_dir = dir.path().join("  7 - Padded");
        fs::create_dir(&set_dir).unwrap();
        write_description(&set_dir, "Easy", "X");

        let store = CatalogStore::new(dir.path().join("database.json"));
        let catalog = CatalogScanner::new(dir.path()).sync(&store).unwrap();
        assert!(catalog.contains_key("7"));
    }
}
