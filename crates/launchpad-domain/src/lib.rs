//! # Launchpad Domain Layer
//!
//! Pure rocket-registry vocabulary with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Rocket, RocketId, LaunchCode                  ││
//! │  │  repository/- RocketRepository port (no implementations)    ││
//! │  │  service/   - LaunchCodeGenerator port                      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Where the bytes are stored and where the entropy comes from are
//! adapter decisions. Nothing here changes when they do.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    launch_code::{InvalidLaunchCode, LaunchCode},
    rocket::{Rocket, RocketId},
};

pub use repository::rocket_repository::{RepositoryError, RocketRepository};

pub use service::launch_code_generator::LaunchCodeGenerator;
