//! In-Memory Repository Implementation
//!
//! Simple in-memory implementation of the rocket repository.
//! Useful for testing, development and the CLI.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use launchpad_domain::model::rocket::{Rocket, RocketId};
use launchpad_domain::repository::rocket_repository::{RepositoryError, RocketRepository};
use uuid::Uuid;

/// In-memory Rocket Repository
///
/// Thread-safe implementation using RwLock. Clones share the same store.
/// Rockets saved without an id get a fresh UUID v4.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRocketRepository {
    rockets: Arc<RwLock<HashMap<String, Rocket>>>,
}

impl InMemoryRocketRepository {
    pub fn new() -> Self {
        Self {
            rockets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Count stored rockets
    pub fn count(&self) -> Result<usize, RepositoryError> {
        let rockets = self.rockets.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(rockets.len())
    }
}

impl RocketRepository for InMemoryRocketRepository {
    fn save(&self, rocket: Rocket) -> Result<Rocket, RepositoryError> {
        let stored = match rocket.id() {
            Some(_) => rocket,
            None => rocket.with_id(RocketId::new(Uuid::new_v4().to_string())),
        };

        let mut rockets = self.rockets.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;

        if let Some(id) = stored.id() {
            rockets.insert(id.as_str().to_string(), stored.clone());
        }
        Ok(stored)
    }

    fn find_one(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
        let rockets = self.rockets.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(rockets.get(id.as_str()).cloned())
    }
}
