//! Launch Code Generator - Where new launch codes come from
//!
//! The domain only states the contract. Entropy is an adapter concern.

use std::sync::Arc;

use crate::model::launch_code::LaunchCode;

/// Produces a fresh launch code on every call.
///
/// Implementations must be callable from many threads at once without
/// sharing an unsynchronised random source between them. Repeated calls
/// should yield distinct codes with overwhelming probability; strict
/// uniqueness is not part of the contract.
pub trait LaunchCodeGenerator: Send + Sync {
    fn generate(&self) -> LaunchCode;
}

impl<G: LaunchCodeGenerator + ?Sized> LaunchCodeGenerator for Arc<G> {
    fn generate(&self) -> LaunchCode {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Counter(AtomicU32);

    impl LaunchCodeGenerator for Counter {
        fn generate(&self) -> LaunchCode {
            LaunchCode::from_bits(self.0.fetch_add(1, Ordering::Relaxed))
        }
    }

    #[test]
    fn test_generator_behind_arc() {
        let generator: Arc<dyn LaunchCodeGenerator> = Arc::new(Counter(AtomicU32::new(0xa)));

        assert_eq!(generator.generate().as_str(), "0000a");
        assert_eq!(generator.generate().as_str(), "0000b");
    }
}
