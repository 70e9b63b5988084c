//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from launchpad-domain.

pub mod in_memory;

pub use in_memory::InMemoryRocketRepository;
