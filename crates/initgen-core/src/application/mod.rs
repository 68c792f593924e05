//! Application layer: generation services and the ports they drive.

pub mod augment;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod ports;
pub mod source_tree;
pub mod workspace;

pub use augment::{AugmentRule, DependencyAugmenter};
pub use descriptor::BuildDescriptorGenerator;
pub use error::GenerationError;
pub use generator::{GeneratedProject, ProjectGenerator};
pub use source_tree::SourceTreeBuilder;
pub use workspace::{TemporaryFileRegistry, TemporaryWorkspace};
