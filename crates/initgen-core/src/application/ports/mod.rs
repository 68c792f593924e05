//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation core needs from external systems.
//! The `initgen-adapters` crate provides the production implementations.

use std::path::Path;

use crate::application::GenerationError;
use crate::domain::{ProjectRequest, TemplateModel};

/// Port for the read-only keyed resource store (wrapper scripts, wrapper
/// jars).
///
/// Locations are logical paths under the fixed `project/` namespace, e.g.
/// `project/gradle4/gradlew` or `project/maven/wrapper/maven-wrapper.jar`.
///
/// Implemented by:
/// - `initgen_adapters::resource_store::InMemoryResourceStore`
pub trait ResourceStore: Send + Sync {
    /// Fetch a text resource.
    fn get_text_resource(&self, location: &str) -> Result<String, GenerationError>;

    /// Fetch a binary resource.
    fn get_binary_resource(&self, location: &str) -> Result<Vec<u8>, GenerationError>;
}

/// Port for template rendering.
///
/// Failure is opaque and always fatal to the run.
///
/// Implemented by:
/// - `initgen_adapters::renderer::SimpleRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render a named template against the model.
    fn render(&self, template_name: &str, model: &TemplateModel)
    -> Result<String, GenerationError>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `initgen_adapters::filesystem::LocalFilesystem` (production)
/// - `initgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError>;

    /// Write text content to a file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), GenerationError>;

    /// Write binary content to a file.
    fn write_binary(&self, path: &Path, content: &[u8]) -> Result<(), GenerationError>;

    /// Mark a file executable (no-op on platforms without the concept).
    fn set_executable(&self, path: &Path) -> Result<(), GenerationError>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> Result<(), GenerationError>;
}

/// Hook that extends the model with test-specific values before the
/// test-class templates render.
///
/// Test model derivation belongs to the resolution collaborator; the core
/// only guarantees the hook runs on a copy of the main model and that only
/// test-class templates see the result.
pub trait TestModelContributor: Send + Sync {
    fn contribute(&self, request: &ProjectRequest, model: &mut TemplateModel);
}

/// Default contributor: leaves the model untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTestModelContributor;

impl TestModelContributor for NoopTestModelContributor {
    fn contribute(&self, _request: &ProjectRequest, _model: &mut TemplateModel) {}
}
