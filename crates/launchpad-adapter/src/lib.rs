//! # Launchpad Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (rocket endpoints, uncaught-error translation)
//! - `generator/` - Outbound adapters for entropy (launch codes)
//! - `repository/` - Persistence implementations

pub mod controller;
pub mod generator;
pub mod repository;
