//! `stockroom-core` — shared building blocks for the inventory tool.
//!
//! This crate contains **pure** primitives (no IO, no console, no files).

pub mod case;
pub mod entity;
pub mod error;
pub mod id;

pub use case::CaseSensitivity;
pub use entity::Entity;
pub use error::{QueryError, QueryResult};
pub use id::ProductId;
