//! Configuration loading and representation.

use std::path::PathBuf;

use stockroom_core::CaseSensitivity;
use stockroom_inventory::ProductStore;

use crate::loader::{self, LoadResult};

/// Data file read when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Runtime configuration for one inventory session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Path of the product file to load (default: `data.csv`).
    pub data_path: PathBuf,

    /// Case policy for exact name lookup (default: sensitive).
    pub name_case: CaseSensitivity,

    /// Case policy for supplier filtering (default: insensitive).
    pub supplier_case: CaseSensitivity,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            name_case: CaseSensitivity::Sensitive,
            supplier_case: CaseSensitivity::Insensitive,
        }
    }
}

impl InventoryConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Load the configured data file into a fresh store.
    pub fn load_store(&self) -> LoadResult<ProductStore> {
        loader::load_from(&self.data_path)
    }
}
