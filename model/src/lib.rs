pub mod base_types;
pub mod config;
pub mod error;
pub mod json_serialisation;
pub mod layout;

pub use error::ConfigurationError;
