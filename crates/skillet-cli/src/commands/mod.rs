//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Settings loading, store opening, init
//! - `recipes` - Read-only output (list, show, ingredients)
//! - `sync` - Upstream sync commands (sync, search, favorites)
//! - `serve` - Web server command

pub mod core;
pub mod recipes;
pub mod serve;
pub mod sync;

// Re-export command functions for main.rs
pub use core::*;
pub use recipes::*;
pub use serve::*;
pub use sync::*;
