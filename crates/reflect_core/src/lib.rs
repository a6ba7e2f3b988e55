//! Reflect
//!
//! Generates C++ type registration code from documented engine headers:
//! - AST production (Doxygen XML) and ingestion
//! - Type linking and role classification
//! - Template-driven emission of the `registerTypes` translation unit
//! - Incremental rebuilds keyed on header modification times

pub mod build;
pub mod classify;
pub mod config;
pub mod emit;
pub mod ingest;
pub mod model;
pub mod paths;
pub mod template;

pub use build::{Generator, GenerateError, Outcome};
pub use config::GeneratorConfig;

/// Generator version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
