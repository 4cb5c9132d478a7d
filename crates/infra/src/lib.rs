//! Infrastructure layer: file loading and configuration.

pub mod config;
pub mod loader;

pub use config::{DEFAULT_DATA_PATH, InventoryConfig};
pub use loader::{LoadError, LoadResult, load_from, load_from_reader, parse_line};
