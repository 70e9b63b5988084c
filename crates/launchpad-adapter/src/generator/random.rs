//! Random launch codes from the calling thread's CSPRNG

use launchpad_domain::model::launch_code::LaunchCode;
use launchpad_domain::service::launch_code_generator::LaunchCodeGenerator;
use rand::Rng;

/// Draws 20 random bits per call and renders them as a launch code.
///
/// Stateless: each call uses `rand::thread_rng()`, a per-thread
/// ChaCha-based generator seeded from the OS, so concurrent callers never
/// contend on or share a random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLaunchCodeGenerator;

impl RandomLaunchCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchCodeGenerator for RandomLaunchCodeGenerator {
    fn generate(&self) -> LaunchCode {
        LaunchCode::from_bits(rand::thread_rng().gen_range(0..=LaunchCode::MASK))
    }
}
