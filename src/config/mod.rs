//! Configuration management module
//!
//! Settings loading, structure definitions and validation

pub mod settings;
pub mod validation;

pub use settings::{
    AdminConfig, ApiConfig, FeaturesConfig, LoggingConfig, ProbeConfig, Settings,
};
