//! initgen core - project generation engine.
//!
//! This crate provides the domain and application layers for a project
//! initializer service, following hexagonal (ports and adapters)
//! architecture. Given a resolved [`domain::ProjectRequest`] and an opaque
//! [`domain::TemplateModel`], the [`application::ProjectGenerator`]
//! materializes a complete buildable source tree under a per-run temporary
//! root:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        outer service (HTTP, queue)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           ProjectGenerator              │
//! │  workspace → descriptor → source tree   │
//! │            → augmenter                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Ports (Traits)                   │
//! │  ResourceStore, TemplateRenderer,       │
//! │  Filesystem, TestModelContributor      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    initgen-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use initgen_core::application::ProjectGenerator;
//! use initgen_core::domain::{BuildTool, ProjectRequest, TemplateModel, Version};
//! # fn adapters() -> (Box<dyn initgen_core::application::ports::ResourceStore>,
//! #     Box<dyn initgen_core::application::ports::TemplateRenderer>,
//! #     Box<dyn initgen_core::application::ports::Filesystem>) { unimplemented!() }
//!
//! let request = ProjectRequest::builder()
//!     .build_tool(BuildTool::Gradle)
//!     .language("java")
//!     .application_name("Demo")
//!     .package_name("com.example.demo")
//!     .platform_version(Version::parse("2.1.0")?)
//!     .build()?;
//!
//! let (store, renderer, filesystem) = adapters();
//! let generator = ProjectGenerator::new("/tmp/initgen", store, renderer, filesystem);
//! let project = generator.generate_project(&request, &TemplateModel::new())?;
//! println!("generated at {}", project.root.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Domain layer (pure logic, no I/O)
pub mod domain;

// Application layer (orchestration and ports)
pub mod application;

// Root error surface
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AugmentRule, DependencyAugmenter, GeneratedProject, GenerationError, ProjectGenerator,
        TemporaryWorkspace,
        ports::{Filesystem, ResourceStore, TemplateRenderer, TestModelContributor},
    };
    pub use crate::domain::{
        BillOfMaterials, BuildTool, Dependency, GradleWrapperBundle, Language, Packaging,
        ProjectRequest, TemplateModel, Version, VersionProperty,
    };
    pub use crate::error::{GenerationFailure, GenerationResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
