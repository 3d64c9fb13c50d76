//! Static configuration for the cloud storage front end
//!
//! Branding, connectivity, form validation rules and feature toggles for
//! the web UI, plus the mapping that reshapes backend storage objects into
//! the record the UI components consume. Configuration is read once at
//! startup from config.toml (with CLOUD_UI environment overrides) and is
//! immutable afterwards.

pub mod config;
pub mod error;
pub mod mapping;
pub mod paths;
pub mod render;

pub use config::{AppConfig, ValidationRule};
pub use error::ConfigError;
pub use mapping::{BackendObject, FrontObject, ObjectType, map_object_to_front_format};
