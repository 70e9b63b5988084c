//! Domain Services - Capabilities the domain needs but does not implement

pub mod launch_code_generator;
