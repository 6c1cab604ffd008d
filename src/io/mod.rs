//! Input/output around the composition engine

/// Command-line interface
pub mod cli;
/// Defaults and configuration value parsing
pub mod configuration;
/// Error types
pub mod error;
/// Textual layout expressions
pub mod expression;
/// Image decoding and encoding
pub mod image;
/// Progress display
pub mod progress;
