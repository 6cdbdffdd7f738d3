//! Parse the `[METADATA]` section of a difficulty description file
//!
//! Description files are line-oriented text. A line equal to `[METADATA]`
//! opens the recognized section, a line equal to `[OBJECTS]` closes it, and
//! everything in between is read as `KEY: value` pairs. Lines outside the
//! section, and lines without a colon, carry no metadata.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Section marker that opens the metadata block.
pub const METADATA_SECTION: &str = "[METADATA]";
/// Section marker that ends the metadata block; remaining lines are ignored.
pub const OBJECTS_SECTION: &str = "[OBJECTS]";

/// Recognized metadata keys (case-sensitive).
pub const KEY_BG_NAME: &str = "BG_NAME";
pub const KEY_BG_EXTENSION: &str = "BG_EXTENSION";
pub const KEY_PREVIEW_TIME: &str = "PREVIEW_TIME";
pub const KEY_CREATOR: &str = "CREATOR";
pub const KEY_SONG_NAME: &str = "SONG_NAME";
pub const KEY_SONG_EXTENSION: &str = "SONG_EXTENSION";
pub const KEY_ARTIST: &str = "ARTIST";

/// Flat key/value record extracted from a description file.
pub type MetadataRecord = HashMap<String, String>;

/// Parse description file contents into a metadata record.
///
/// Keys and values are trimmed; a line is split at its first colon.
/// Duplicate keys: the last occurrence wins.
pub fn parse_metadata(content: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    let mut in_metadata_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line == METADATA_SECTION {
            in_metadata_section = true;
        } else if line == OBJECTS_SECTION {
            break;
        } else if in_metadata_section {
            if let Some((key, value)) = line.split_once(':') {
                record.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    record
}

/// Read a description file from disk and parse its metadata.
///
/// An unreadable or undecodable file yields an empty record and a warning;
/// it must never abort a library scan, so no error is surfaced here.
pub fn read_metadata(path: &Path) -> MetadataRecord {
    match fs::read_to_string(path) {
        Ok(content) => parse_metadata(&content),
        Err(e) => {
            warn!("Error reading metadata from '{}': {}", path.display(), e);
            MetadataRecord::new()
        }
    }
}
