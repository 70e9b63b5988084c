//! Rocket endpoints: create by name, fetch by id

use std::sync::Arc;

use anyhow::Context;
use launchpad_domain::model::rocket::RocketId;
use launchpad_usecase::RocketUseCase;
use tracing::info;

use super::dto::{status, ApiResponse, ErrorDto, RocketDto};
use super::error_handler::ApiErrorHandler;

/// Inbound adapter over a `RocketUseCase`
#[derive(Clone)]
pub struct RocketController {
    use_case: Arc<dyn RocketUseCase>,
    errors: ApiErrorHandler,
}

impl RocketController {
    pub fn new(use_case: Arc<dyn RocketUseCase>) -> Self {
        Self {
            use_case,
            errors: ApiErrorHandler::new(),
        }
    }

    /// Create a rocket. 200 with the stored rocket, 500 on any failure.
    pub fn create(&self, name: &str) -> ApiResponse {
        let result = self
            .use_case
            .create(name)
            .with_context(|| format!("Failed to create rocket '{name}'"))
            .and_then(|rocket| {
                info!(id = ?rocket.id(), launch_code = %rocket.launch_code(), "rocket created");
                Self::rocket_body(&RocketDto::from(&rocket))
            });

        match result {
            Ok(body) => ApiResponse::new(status::OK, body),
            Err(err) => self.errors.handle(&err),
        }
    }

    /// Fetch a rocket. 200 when found, 404 when absent, 500 on failure.
    pub fn get(&self, id: &str) -> ApiResponse {
        let rocket_id = RocketId::new(id);

        let result = self
            .use_case
            .get(&rocket_id)
            .with_context(|| format!("Failed to load rocket '{id}'"));

        match result {
            Ok(Some(rocket)) => match Self::rocket_body(&RocketDto::from(&rocket)) {
                Ok(body) => ApiResponse::new(status::OK, body),
                Err(err) => self.errors.handle(&err),
            },
            Ok(None) => ApiResponse::new(
                status::NOT_FOUND,
                ErrorDto::new(format!("Rocket not found: {rocket_id}"), "").to_value(),
            ),
            Err(err) => self.errors.handle(&err),
        }
    }

    fn rocket_body(dto: &RocketDto) -> anyhow::Result<serde_json::Value> {
        serde_json::to_value(dto).context("Failed to serialize rocket")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomLaunchCodeGenerator;
    use crate::repository::InMemoryRocketRepository;
    use launchpad_domain::model::launch_code::LaunchCode;
    use launchpad_domain::model::rocket::Rocket;
    use launchpad_domain::repository::rocket_repository::RepositoryError;
    use launchpad_usecase::RocketService;

    fn controller() -> RocketController {
        let service = RocketService::new(
            InMemoryRocketRepository::new(),
            RandomLaunchCodeGenerator::new(),
        );
        RocketController::new(Arc::new(service))
    }

    /// Use case whose storage is always down
    struct Broken;

    impl RocketUseCase for Broken {
        fn create(&self, _name: &str) -> Result<Rocket, RepositoryError> {
            Err(RepositoryError::PersistenceError {
                message: "storage offline".to_string(),
            })
        }

        fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
            Err(RepositoryError::PersistenceError {
                message: format!("index for {id} unavailable"),
            })
        }
    }

    #[test]
    fn test_create_then_get() {
        let controller = controller();

        let created = controller.create("Starship");
        assert_eq!(created.status, status::OK);
        let dto: RocketDto = created.body_as().unwrap();
        assert_eq!(dto.name, "Starship");
        assert!(LaunchCode::parse(&dto.launch_code).is_ok());

        let id = dto.id.clone().expect("stored rocket has an id");
        let fetched = controller.get(&id);
        assert_eq!(fetched.status, status::OK);
        assert_eq!(fetched.body_as::<RocketDto>().unwrap(), dto);
    }

    #[test]
    fn test_get_missing_is_404() {
        let response = controller().get("does-not-exist");

        assert_eq!(response.status, status::NOT_FOUND);
        let dto: ErrorDto = response.body_as().unwrap();
        assert_eq!(dto.code, 0);
        assert_eq!(dto.message, "Rocket not found: does-not-exist");
    }

    #[test]
    fn test_create_failure_goes_through_error_handler() {
        let controller = RocketController::new(Arc::new(Broken));

        let response = controller.create("boom");
        assert_eq!(response.status, status::INTERNAL_SERVER_ERROR);

        let dto: ErrorDto = response.body_as().unwrap();
        assert_eq!(dto.code, 0);
        assert_eq!(dto.message, "Failed to create rocket 'boom'");
        assert!(dto.stack_trace.contains("Persistence error: storage offline"));
    }

    #[test]
    fn test_get_failure_goes_through_error_handler() {
        let response = RocketController::new(Arc::new(Broken)).get("r-9");

        assert_eq!(response.status, status::INTERNAL_SERVER_ERROR);
        let dto: ErrorDto = response.body_as().unwrap();
        assert_eq!(dto.message, "Failed to load rocket 'r-9'");
        assert!(dto.stack_trace.contains("Persistence error: index for r-9 unavailable"));
    }
}
