//! Demo collaborator for `chain-error`: a configurable nested call sequence
//! whose innermost operation fails, plus the configuration and reporting
//! around it.

pub mod config;
pub mod error;
pub mod layers;
pub mod report;
pub mod tracing_setup;

pub use config::{DemoConfig, LayerConfig, LayerMode, Overrides, RenderConfig};
pub use error::DemoError;
pub use layers::{CallStack, provoke};
