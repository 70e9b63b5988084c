//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RocketRepository│  InMemoryRocketRepository
//!   fn save()           │
//!   fn find_one()       │
//! ```

pub mod rocket_repository;
