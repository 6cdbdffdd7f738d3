//! Persisted catalog record types
//!
//! The catalog maps a set identifier (derived once from the folder name) to
//! a [`BeatmapSetRecord`]. Both mappings are insertion-ordered so that the
//! derived entry sequence is stable across rebuilds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parser::{
    MetadataRecord, KEY_ARTIST, KEY_BG_EXTENSION, KEY_BG_NAME, KEY_CREATOR, KEY_PREVIEW_TIME,
    KEY_SONG_EXTENSION, KEY_SONG_NAME,
};

/// The persisted catalog: set identifier -> set record.
pub type Catalog = IndexMap<String, BeatmapSetRecord>;

/// Defaults substituted for absent metadata keys.
pub const DEFAULT_SONG_NAME: &str = "unknown";
pub const DEFAULT_SONG_EXT: &str = "mp3";
pub const DEFAULT_ARTIST: &str = "Unknown Artist";
pub const DEFAULT_PREVIEW_TIME: &str = "0.000";
pub const DEFAULT_BG_NAME: &str = "background";
pub const DEFAULT_BG_EXT: &str = "jpg";
pub const DEFAULT_CREATOR: &str = "Unknown Creator";

fn default_bg_name() -> String {
    DEFAULT_BG_NAME.to_string()
}

fn default_bg_ext() -> String {
    DEFAULT_BG_EXT.to_string()
}

fn default_preview_time() -> String {
    DEFAULT_PREVIEW_TIME.to_string()
}

fn default_creator() -> String {
    DEFAULT_CREATOR.to_string()
}

/// A single difficulty within a beatmap set.
///
/// Created when its description file is first discovered. Synchronization is
/// additive: a record is never overwritten or removed once present, even if
/// the file on disk changes or disappears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRecord {
    #[serde(default = "default_bg_name")]
    pub bg_name: String,
    #[serde(default = "default_bg_ext")]
    pub bg_ext: String,
    #[serde(default = "default_preview_time")]
    pub preview_time: String,
    #[serde(default = "default_creator")]
    pub creator: String,
}

impl Default for DifficultyRecord {
    fn default() -> Self {
        Self {
            bg_name: default_bg_name(),
            bg_ext: default_bg_ext(),
            preview_time: default_preview_time(),
            creator: default_creator(),
        }
    }
}

impl DifficultyRecord {
    /// Build a record from a parsed metadata record, substituting the
    /// documented defaults for absent keys.
    pub fn from_metadata(metadata: &MetadataRecord) -> Self {
        Self {
            bg_name: metadata
                .get(KEY_BG_NAME)
                .cloned()
                .unwrap_or_else(default_bg_name),
            bg_ext: metadata
                .get(KEY_BG_EXTENSION)
                .cloned()
                .unwrap_or_else(default_bg_ext),
            preview_time: metadata
                .get(KEY_PREVIEW_TIME)
                .cloned()
                .unwrap_or_else(default_preview_time),
            creator: metadata
                .get(KEY_CREATOR)
                .cloned()
                .unwrap_or_else(default_creator),
        }
    }
}

/// A persisted beatmap set, keyed in the catalog by its set identifier.
///
/// Song-level fields are absent until the first difficulty of the set is
/// synced, and are omitted from the serialized form while absent so that a
/// load/save cycle reproduces the stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatmapSetRecord {
    /// Display name parsed from the folder name after the `" - "` separator.
    pub beatmap_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_ext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Difficulty name -> record, insertion-ordered.
    #[serde(default)]
    pub difficulties: IndexMap<String, DifficultyRecord>,
}

impl BeatmapSetRecord {
    /// Create a new set record with no difficulties and no song fields yet.
    pub fn new(beatmap_name: impl Into<String>) -> Self {
        Self {
            beatmap_name: beatmap_name.into(),
            song_name: None,
            song_ext: None,
            preview_time: None,
            artist: None,
            difficulties: IndexMap::new(),
        }
    }

    /// Whether the set-level song fields have been populated.
    pub fn has_song_fields(&self) -> bool {
        self.song_name.is_some()
    }

    /// Populate the song-level fields from a metadata record.
    ///
    /// The first difficulty processed for a set wins these fields; once set
    /// they are never replaced, so later calls are no-ops.
    pub fn populate_song_fields(&mut self, metadata: &MetadataRecord) {
        if self.has_song_fields() {
            return;
        }
        self.song_name = Some(
            metadata
                .get(KEY_SONG_NAME)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SONG_NAME.to_string()),
        );
        self.song_ext = Some(
            metadata
                .get(KEY_SONG_EXTENSION)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SONG_EXT.to_string()),
        );
        self.preview_time = Some(
            metadata
                .get(KEY_PREVIEW_TIME)
                .cloned()
                .unwrap_or_else(default_preview_time),
        );
        self.artist = Some(
            metadata
                .get(KEY_ARTIST)
                .cloned()
                .unwrap_or_else(|| DEFAULT_ARTIST.to_string()),
        );
    }

    /// Song file base name, or the documented default when unset.
    pub fn song_name(&self) -> &str {
        self.song_name.as_deref().unwrap_or(DEFAULT_SONG_NAME)
    }

    /// Song file extension, or the documented default when unset.
    pub fn song_ext(&self) -> &str {
        self.song_ext.as_deref().unwrap_or(DEFAULT_SONG_EXT)
    }

    /// Artist name, or the documented default when unset.
    pub fn artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(DEFAULT_ARTIST)
    }

    /// Set-level preview time in seconds. Unparseable values resolve to 0.
    pub fn preview_seconds(&self) -> f64 {
        self.preview_time
            .as_deref()
            .unwrap_or(DEFAULT_PREVIEW_TIME)
            .parse()
            .unwrap_or(0.0)
    }
}
