//! Rocket Repository - Abstract persistence for Rockets
//!
//! The domain needs exactly two things from storage: keep a rocket and
//! hand it back by id. How that happens is not our concern here.

use std::sync::Arc;

use crate::model::rocket::{Rocket, RocketId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Storage could not complete the operation
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Rocket Repository Trait
///
/// This is a PORT in hexagonal architecture.
///
/// Methods take `&self`: rockets are created from many threads at once,
/// so implementations synchronise internally.
pub trait RocketRepository: Send + Sync {
    /// Store a rocket and return the stored form.
    ///
    /// Implementations assign an id to rockets that have none and may
    /// otherwise transform the record; callers must use the return value.
    fn save(&self, rocket: Rocket) -> Result<Rocket, RepositoryError>;

    /// Find a rocket by ID
    fn find_one(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError>;
}

impl<R: RocketRepository + ?Sized> RocketRepository for Arc<R> {
    fn save(&self, rocket: Rocket) -> Result<Rocket, RepositoryError> {
        (**self).save(rocket)
    }

    fn find_one(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
        (**self).find_one(id)
    }
}
