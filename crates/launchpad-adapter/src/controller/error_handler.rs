//! Last-resort translation of unhandled errors into an error payload
//!
//! Every error that reaches this point is treated the same way: status
//! 500, code 0, the error message, and the full diagnostic trace.

use std::backtrace::{Backtrace, BacktraceStatus};

use tracing::error;

use super::dto::{status, ApiResponse, ErrorDto};

/// Translator for errors nothing else handled
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiErrorHandler;

impl ApiErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Build the payload for `err` without deciding a status
    pub fn to_error_dto(&self, err: &anyhow::Error) -> ErrorDto {
        ErrorDto::new(err.to_string(), Self::stack_trace(err))
    }

    /// Translate `err` into a 500 response
    pub fn handle(&self, err: &anyhow::Error) -> ApiResponse {
        error!(error = %err, "unhandled error at request boundary");
        ApiResponse::new(status::INTERNAL_SERVER_ERROR, self.to_error_dto(err).to_value())
    }

    /// Message, `Caused by:` chain and stack frames.
    ///
    /// anyhow only records a backtrace when RUST_BACKTRACE or
    /// RUST_LIB_BACKTRACE is set; otherwise frames are captured here.
    fn stack_trace(err: &anyhow::Error) -> String {
        let mut trace = format!("{err:?}");
        if err.backtrace().status() != BacktraceStatus::Captured {
            trace.push_str("\n\nStack backtrace:\n");
            trace.push_str(&Backtrace::force_capture().to_string());
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use launchpad_domain::repository::rocket_repository::RepositoryError;

    #[test]
    fn test_always_500_with_code_zero() {
        let handler = ApiErrorHandler::new();

        for err in [
            anyhow::anyhow!("plain failure"),
            anyhow::Error::new(RepositoryError::PersistenceError {
                message: "table locked".to_string(),
            }),
            anyhow::Error::new(std::io::Error::other("socket closed")),
        ] {
            let response = handler.handle(&err);
            assert_eq!(response.status, status::INTERNAL_SERVER_ERROR);
            assert!(!response.is_success());

            let dto: ErrorDto = response.body_as().unwrap();
            assert_eq!(dto.code, 0);
            assert_eq!(dto.message, err.to_string());
        }
    }

    #[test]
    fn test_trace_contains_every_cause() {
        let handler = ApiErrorHandler::new();
        let root = RepositoryError::PersistenceError {
            message: "write lock poisoned".to_string(),
        };
        let err = Err::<(), _>(root)
            .context("saving rocket")
            .context("creating rocket 'boom'")
            .unwrap_err();

        let dto = handler.to_error_dto(&err);

        assert_eq!(dto.message, "creating rocket 'boom'");
        assert!(dto.stack_trace.contains("creating rocket 'boom'"));
        assert!(dto.stack_trace.contains("saving rocket"));
        assert!(dto.stack_trace.contains("Persistence error: write lock poisoned"));
        assert!(dto.stack_trace.contains("Stack backtrace:"));
    }

    #[test]
    fn test_trace_has_frames_without_backtrace_env() {
        std::env::remove_var("RUST_BACKTRACE");
        std::env::remove_var("RUST_LIB_BACKTRACE");

        let err = anyhow::Error::new(std::io::Error::other("disk gone"));
        let dto = ApiErrorHandler::new().to_error_dto(&err);

        assert_eq!(dto.message, "disk gone");
        assert!(dto.stack_trace.starts_with("disk gone"));
        assert!(dto.stack_trace.contains("Stack backtrace:"));
        assert!(dto.stack_trace.lines().count() > 2, "{}", dto.stack_trace);
    }
}
