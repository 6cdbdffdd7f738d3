//! Persisted beatmap catalog: records, store, scanner, and derived index

mod index;
mod record;
mod scanner;
mod store;

pub use index::*;
pub use record::*;
pub use scanner::*;
pub use store::*;
