//! Utility functions and data structures.
//!
//! - [`app_data`] - Configuration file in the app data directory (XDG-compliant)
//! - [`text`] - Case folding and per-temple searchable text

pub mod app_data;
pub mod text;

pub use app_data::*;
pub use text::*;
