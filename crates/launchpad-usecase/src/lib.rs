//! # Launchpad Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters.

pub use launchpad_domain;

pub mod rocket_service;

pub use rocket_service::{RocketService, RocketUseCase};
