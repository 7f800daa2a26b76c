//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FinflowPaths;
pub use settings::Settings;
