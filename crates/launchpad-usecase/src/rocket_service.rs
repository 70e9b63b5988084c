//! Rocket Service - Create rockets and look them up
//!
//! 1. Ask the generator for a launch code
//! 2. Build an unsaved rocket with the caller's name
//! 3. Hand it to the repository and return what the repository returns
//!
//! Repository failures are not interpreted here. They travel back to the
//! caller as-is and are dealt with at the boundary.

use launchpad_domain::model::rocket::{Rocket, RocketId};
use launchpad_domain::repository::rocket_repository::{RepositoryError, RocketRepository};
use launchpad_domain::service::launch_code_generator::LaunchCodeGenerator;
use tracing::{debug, warn};

/// Object-safe view of the rocket operations for inbound adapters
pub trait RocketUseCase: Send + Sync {
    /// Create and persist a rocket named `name`
    fn create(&self, name: &str) -> Result<Rocket, RepositoryError>;

    /// Look up a rocket by id
    fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError>;
}

/// Rocket creation service
///
/// Both collaborators are passed in explicitly; there is no container.
/// The service holds no mutable state of its own, so one instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RocketService<R, G> {
    repository: R,
    generator: G,
}

impl<R, G> RocketService<R, G>
where
    R: RocketRepository,
    G: LaunchCodeGenerator,
{
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Create a rocket with a fresh launch code and persist it.
    ///
    /// Returns the repository's stored form, not the pre-save value.
    pub fn create(&self, name: impl Into<String>) -> Result<Rocket, RepositoryError> {
        let launch_code = self.generator.generate();
        let rocket = Rocket::new(name, launch_code);

        debug!(name = rocket.name(), launch_code = %rocket.launch_code(), "creating rocket");

        self.repository.save(rocket).inspect_err(|err| {
            warn!(error = %err, "failed to save rocket");
        })
    }

    /// Look up a rocket. Whatever the repository answers is returned unchanged.
    pub fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
        debug!(%id, "looking up rocket");
        self.repository.find_one(id)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R, G> RocketUseCase for RocketService<R, G>
where
    R: RocketRepository,
    G: LaunchCodeGenerator,
{
    fn create(&self, name: &str) -> Result<Rocket, RepositoryError> {
        RocketService::create(self, name)
    }

    fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
        RocketService::get(self, id)
    }
}
