//! # beatshelf-core
//!
//! Core library for indexing and navigating a beatmap library stored as
//! folders on disk.
//!
//! This crate provides the foundational functionality for:
//! - Parsing difficulty description files (`[METADATA]` section format)
//! - Incrementally synchronizing a persisted JSON catalog with the library
//! - Flattening the catalog into an ordered sequence of playable entries
//! - Filtering that sequence with a free-text search query
//! - Smooth-scroll selection and navigation over the filtered view
//!
//! ## Modules
//!
//! - [`catalog`] - Persisted records, store, scanner, and derived index
//! - [`error`] - Error types and Result alias
//! - [`filter`] - Search query filtering
//! - [`navigator`] - Selection, smooth scrolling, and virtualization
//! - [`parser`] - Description file metadata parsing
//!
//! ## Example
//!
//! ```no_run
//! use beatshelf_core::{CatalogIndex, CatalogScanner, CatalogStore, SearchFilter};
//!
//! # fn main() -> beatshelf_core::Result<()> {
//! let store = CatalogStore::new("database.json");
//! let scanner = CatalogScanner::new("beatmaps");
//! let catalog = scanner.sync(&store)?;
//!
//! let index = CatalogIndex::build(&catalog, scanner.root());
//! let mut filter = SearchFilter::new();
//! filter.set_query("hard");
//! for entry in filter.apply(index.entries()) {
//!     println!("{} [{}]", entry.beatmap_name, entry.difficulty_name);
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod catalog;
pub mod error;
pub mod filter;
pub mod navigator;
pub mod parser;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Catalog types
pub use catalog::{
    BeatmapSetRecord, Catalog, CatalogEntry, CatalogIndex, CatalogScanner, CatalogStore,
    DifficultyRecord, EntryKey,
};

// Parsing
pub use parser::{parse_metadata, read_metadata, MetadataRecord};

// Filtering
pub use filter::SearchFilter;

// Navigation
pub use navigator::SelectionNavigator;
