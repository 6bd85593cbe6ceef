pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod nlp;

// Serving surfaces
pub mod api;
pub mod web;

// CLI
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
