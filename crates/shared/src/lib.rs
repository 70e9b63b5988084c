//! # Launchpad Shared
//!
//! Error and configuration types used by the application crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
