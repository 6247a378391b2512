//! Configuration module — API endpoint settings.

pub mod settings;

pub use settings::Settings;
