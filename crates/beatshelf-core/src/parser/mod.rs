//! Difficulty description file parsing

mod metadata;

pub use metadata::*;
