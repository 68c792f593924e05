//! Infrastructure adapters for initgen.
//!
//! This crate implements the ports defined in
//! `initgen_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_resources;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod resource_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use resource_store::InMemoryResourceStore;
