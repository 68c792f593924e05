//! Core domain layer for initgen.
//!
//! Pure request/model/version logic with no I/O. All filesystem, resource
//! and rendering concerns are behind the ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: requests and models are `Clone + PartialEq`

pub mod error;
pub mod model;
pub mod paths;
pub mod request;
pub mod version;

// Re-exports for convenience
pub use error::DomainError;
pub use model::{BillOfMaterials, TemplateModel, VersionProperty};
pub use request::{BuildTool, Dependency, Language, Packaging, ProjectRequest, ProjectRequestBuilder};
pub use version::{GradleWrapperBundle, Version};
