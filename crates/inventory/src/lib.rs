//! Inventory module: the in-memory record store and its query engine.
//!
//! Everything here operates on records already in memory (no IO). Loading
//! from files lives in `stockroom-infra`.

pub mod query;
pub mod store;

pub use query::{
    QuantityStats, RecordIndex, count_by_supplier, filter_by_supplier, find_by_name,
    quantity_stats, search_by_name_substring, sort_by_price_descending,
};
pub use store::ProductStore;
