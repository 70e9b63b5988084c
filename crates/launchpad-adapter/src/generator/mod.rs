//! Entropy Adapters - LaunchCodeGenerator implementations

pub mod random;

pub use random::RandomLaunchCodeGenerator;
