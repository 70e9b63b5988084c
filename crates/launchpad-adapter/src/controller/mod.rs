//! Inbound Adapters - Turn use-case results into JSON responses
//!
//! There is no router here. Whatever transport sits in front (CLI today)
//! calls the controller and writes out the `ApiResponse` it gets back.

pub mod dto;
pub mod error_handler;
pub mod rocket_controller;

pub use dto::{ApiResponse, ErrorDto, RocketDto};
pub use error_handler::ApiErrorHandler;
pub use rocket_controller::RocketController;
