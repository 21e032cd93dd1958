//! HTTP request handlers organized by domain

pub mod ingredients;
pub mod recipes;
pub mod sync;

// Re-export all handlers for use in router
pub use ingredients::*;
pub use recipes::*;
pub use sync::*;
