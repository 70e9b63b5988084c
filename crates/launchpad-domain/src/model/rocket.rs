//! Rocket - A named record with a launch code
//!
//! Rocket is an Entity. Its identity is assigned by whatever stores it;
//! until the first save a rocket has no id.

use super::launch_code::LaunchCode;

/// Unique identifier for a Rocket
///
/// Opaque to the domain. The persistence adapter decides the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RocketId(String);

impl RocketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RocketId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rocket - What the registry creates and stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rocket {
    /// Storage identity, `None` until saved
    id: Option<RocketId>,
    /// Caller-supplied name, kept verbatim
    name: String,
    /// Code generated at creation time
    launch_code: LaunchCode,
}

impl Rocket {
    /// Create an unsaved Rocket
    pub fn new(name: impl Into<String>, launch_code: LaunchCode) -> Self {
        Self {
            id: None,
            name: name.into(),
            launch_code,
        }
    }

    /// Builder: attach a storage identity
    pub fn with_id(mut self, id: RocketId) -> Self {
        self.id = Some(id);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<&RocketId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn launch_code(&self) -> &LaunchCode {
        &self.launch_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocket_creation() {
        let rocket = Rocket::new("Falcon", LaunchCode::from_bits(0x1f2e3));

        assert_eq!(rocket.name(), "Falcon");
        assert_eq!(rocket.launch_code().as_str(), "1f2e3");
        assert!(rocket.id().is_none());
    }

    #[test]
    fn test_with_id_keeps_name_and_code() {
        let rocket = Rocket::new("Vostok", LaunchCode::from_bits(7))
            .with_id(RocketId::new("r-001"));

        assert_eq!(rocket.id().map(RocketId::as_str), Some("r-001"));
        assert_eq!(rocket.name(), "Vostok");
        assert_eq!(rocket.launch_code().as_str(), "00007");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let rocket = Rocket::new("", LaunchCode::from_bits(0));
        assert_eq!(rocket.name(), "");
    }
}
