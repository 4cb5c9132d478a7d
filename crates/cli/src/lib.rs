//! Interactive front end: argument parsing, table output and the menu loop.

pub mod args;
pub mod display;
pub mod menu;

pub use args::Args;
pub use menu::{Menu, MenuChoice};
