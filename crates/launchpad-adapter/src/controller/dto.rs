//! Wire shapes for the request boundary

use launchpad_domain::model::rocket::Rocket;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP-style status codes used by the controller
pub mod status {
    pub const OK: u16 = 200;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Rocket as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RocketDto {
    pub id: Option<String>,
    pub name: String,
    pub launch_code: String,
}

impl From<&Rocket> for RocketDto {
    fn from(rocket: &Rocket) -> Self {
        Self {
            id: rocket.id().map(|id| id.as_str().to_string()),
            name: rocket.name().to_string(),
            launch_code: rocket.launch_code().as_str().to_string(),
        }
    }
}

/// Error payload returned for failed requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Always 0: errors are not classified
    pub code: i32,
    pub message: String,
    /// Error, cause chain and stack backtrace, one frame per line
    pub stack_trace: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>, stack_trace: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
            stack_trace: stack_trace.into(),
        }
    }

    /// JSON body for this payload.
    ///
    /// Two strings and an integer always serialize; `Null` is unreachable.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Status plus JSON body, ready for whatever transport is in front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body, e.g. back into a `RocketDto` or `ErrorDto`
    pub fn body_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}
