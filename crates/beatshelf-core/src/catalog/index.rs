//! Flatten the persisted catalog into an ordered sequence of playable entries

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, SET_SEPARATOR};

/// Stable identity of a catalog entry, independent of its position in any
/// filtered view. Selection survival across filtering is an identity lookup
/// on this key, never a positional or pointer comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub set_id: String,
    pub difficulty_name: String,
}

/// One playable (set, difficulty) pair with resolved media paths.
///
/// Derived, immutable, and rebuilt whenever the index re-derives from the
/// catalog; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: EntryKey,
    pub beatmap_name: String,
    pub difficulty_name: String,
    pub song_path: PathBuf,
    pub bg_path: PathBuf,
    /// Set-level preview offset in seconds.
    pub preview_time: f64,
    pub creator: String,
    pub artist: String,
}

/// In-memory index over the catalog: one entry per (set, difficulty) pair,
/// in catalog insertion order. The index exclusively owns the sequence;
/// consumers borrow entries read-only.
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    /// Build the entry sequence from a catalog and the library root.
    ///
    /// Pure transformation: no I/O and no existence checks. Missing media
    /// files at the resolved paths are a playback-layer concern.
    pub fn build(catalog: &Catalog, root: &Path) -> Self {
        let mut entries = Vec::new();

        for (set_id, set) in catalog {
            let set_folder = format!("{}{}{}", set_id, SET_SEPARATOR, set.beatmap_name);
            let song_path = root
                .join(set_folder)
                .join(format!("{}.{}", set.song_name(), set.song_ext()));

            for (difficulty_name, difficulty) in &set.difficulties {
                // Backgrounds resolve against the bare set id folder.
                let bg_path = root
                    .join(set_id)
                    .join(format!("{}.{}", difficulty.bg_name, difficulty.bg_ext));

                entries.push(CatalogEntry {
                    key: EntryKey {
                        set_id: set_id.clone(),
                        difficulty_name: difficulty_name.clone(),
                    },
                    beatmap_name: set.beatmap_name.clone(),
                    difficulty_name: difficulty_name.clone(),
                    song_path: song_path.clone(),
                    bg_path,
                    preview_time: set.preview_seconds(),
                    creator: difficulty.creator.clone(),
                    artist: set.artist().to_string(),
                });
            }
        }

        Self { entries }
    }

    /// The full entry sequence, in catalog insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
