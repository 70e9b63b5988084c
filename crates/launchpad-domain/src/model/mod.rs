//! Domain Models - The vocabulary of Launchpad
//!
//! A rocket is a named record carrying a launch code.

pub mod launch_code;
pub mod rocket;
