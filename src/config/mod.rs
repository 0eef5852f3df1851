//! Configuration and path management for RelocateCLI

pub mod paths;
pub mod settings;

pub use paths::RelocatePaths;
pub use settings::Settings;
