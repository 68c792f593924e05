//! Generation orchestrator.
//!
//! Strict pipeline: allocate root -> recreate it fresh -> build descriptor
//! -> .gitignore -> source tree -> dependency augmentation. First failure
//! wins and is reported as a single [`GenerationFailure`] carrying the
//! allocated root, whose contents are then indeterminate.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::augment::DependencyAugmenter;
use crate::application::descriptor::BuildDescriptorGenerator;
use crate::application::ports::{
    Filesystem, NoopTestModelContributor, ResourceStore, TemplateRenderer, TestModelContributor,
};
use crate::application::source_tree::SourceTreeBuilder;
use crate::application::workspace::TemporaryWorkspace;
use crate::application::GenerationError;
use crate::domain::{paths, ProjectRequest, TemplateModel};
use crate::error::{GenerationFailure, GenerationResult};

/// A successfully generated project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// The allocated run root (cleanup handle).
    pub root: PathBuf,
    /// The effective project directory: `root` itself, or `root/<base_dir>`.
    pub project_dir: PathBuf,
}

/// Main generation service.
pub struct ProjectGenerator {
    workspace: TemporaryWorkspace,
    store: Box<dyn ResourceStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    test_model: Box<dyn TestModelContributor>,
    augmenter: DependencyAugmenter,
}

impl ProjectGenerator {
    /// Create a generator with the given adapters, writing run roots under
    /// `scratch_root`.
    pub fn new(
        scratch_root: impl Into<PathBuf>,
        store: Box<dyn ResourceStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            workspace: TemporaryWorkspace::new(scratch_root),
            store,
            renderer,
            filesystem,
            test_model: Box::new(NoopTestModelContributor),
            augmenter: DependencyAugmenter::default(),
        }
    }

    /// Replace the test-model hook.
    pub fn with_test_model_contributor(mut self, hook: Box<dyn TestModelContributor>) -> Self {
        self.test_model = hook;
        self
    }

    /// Replace the dependency-trigger rule table.
    pub fn with_augmenter(mut self, augmenter: DependencyAugmenter) -> Self {
        self.augmenter = augmenter;
        self
    }

    pub fn workspace(&self) -> &TemporaryWorkspace {
        &self.workspace
    }

    /// Remove everything a run produced. Explicit operation; never invoked
    /// by generation itself.
    pub fn cleanup(&self, root: &Path) -> Result<(), GenerationError> {
        let group = root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GenerationError::workspace("root has no directory name"))?;
        self.workspace.cleanup(&*self.filesystem, group)
    }

    /// Generate a complete project tree for the request.
    #[instrument(
        skip_all,
        fields(
            application = %request.application_name,
            build_tool = %request.build_tool,
            language = %request.language,
        )
    )]
    pub fn generate_project(
        &self,
        request: &ProjectRequest,
        model: &TemplateModel,
    ) -> GenerationResult<GeneratedProject> {
        info!("starting generation run");

        let root = self
            .workspace
            .allocate_root(&*self.filesystem)
            .map_err(GenerationFailure::unallocated)?;

        match self.run(request, model, &root) {
            Ok(project_dir) => {
                info!(root = %root.display(), "generation run completed");
                Ok(GeneratedProject { root, project_dir })
            }
            Err(cause) => Err(GenerationFailure::under_root(root, cause)),
        }
    }

    fn run(
        &self,
        request: &ProjectRequest,
        model: &TemplateModel,
        root: &Path,
    ) -> Result<PathBuf, GenerationError> {
        // The allocator leaves a placeholder directory; recreate it so the
        // run always starts from a guaranteed-fresh root.
        self.filesystem.remove_dir_all(root)?;
        self.filesystem.create_dir_all(root)?;

        let project_dir = self.project_dir(request, root)?;

        let descriptor =
            BuildDescriptorGenerator::new(&*self.store, &*self.renderer, &*self.filesystem);
        descriptor.generate(request, model, &project_dir)?;

        self.write_gitignore(model, &project_dir)?;

        let mut test_model = model.clone();
        self.test_model.contribute(request, &mut test_model);

        let source_tree = SourceTreeBuilder::new(&*self.renderer, &*self.filesystem);
        let test_dir = source_tree.build(request, model, &test_model, &project_dir)?;

        self.augmenter.augment(
            request,
            &test_model,
            &*self.renderer,
            &*self.filesystem,
            &test_dir,
        )?;

        Ok(project_dir)
    }

    /// Effective project directory: `root`, or `root/<base_dir>` (created)
    /// when the request nests the project.
    fn project_dir(&self, request: &ProjectRequest, root: &Path) -> Result<PathBuf, GenerationError> {
        match &request.base_dir {
            Some(base_dir) => {
                let dir = root.join(paths::base_dir_path(base_dir)?);
                self.filesystem.create_dir_all(&dir)?;
                Ok(dir)
            }
            None => Ok(root.to_path_buf()),
        }
    }

    /// Toolchain-independent, rendered from a fixed template.
    fn write_gitignore(
        &self,
        model: &TemplateModel,
        project_dir: &Path,
    ) -> Result<(), GenerationError> {
        let content = self.renderer.render("gitignore.tmpl", model)?;
        self.filesystem
            .write_file(&project_dir.join(".gitignore"), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildTool, Version};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Store {}
        impl ResourceStore for Store {
            fn get_text_resource(&self, location: &str) -> Result<String, GenerationError>;
            fn get_binary_resource(&self, location: &str) -> Result<Vec<u8>, GenerationError>;
        }
    }

    mock! {
        Renderer {}
        impl TemplateRenderer for Renderer {
            fn render(&self, template_name: &str, model: &TemplateModel) -> Result<String, GenerationError>;
        }
    }

    mock! {
        Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError>;
            fn write_file(&self, path: &Path, content: &str) -> Result<(), GenerationError>;
            fn write_binary(&self, path: &Path, content: &[u8]) -> Result<(), GenerationError>;
            fn set_executable(&self, path: &Path) -> Result<(), GenerationError>;
            fn exists(&self, path: &Path) -> bool;
            fn remove_dir_all(&self, path: &Path) -> Result<(), GenerationError>;
        }
    }

    fn maven_request() -> ProjectRequest {
        ProjectRequest::builder()
            .build_tool(BuildTool::Maven)
            .language("java")
            .application_name("Demo")
            .package_name("com.example.demo")
            .platform_version(Version::new(2, 1, 0))
            .build()
            .unwrap()
    }

    fn permissive_fs() -> MockFs {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_write_binary().returning(|_, _| Ok(()));
        fs.expect_set_executable().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_remove_dir_all().returning(|_| Ok(()));
        fs
    }

    #[test]
    fn render_failure_aborts_with_allocated_root() {
        let mut store = MockStore::new();
        store
            .expect_get_text_resource()
            .returning(|_| Ok(String::new()));
        store
            .expect_get_binary_resource()
            .returning(|_| Ok(Vec::new()));

        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .with(eq("starter-pom.xml"), mockall::predicate::always())
            .returning(|name, _| Err(GenerationError::render(name, "boom")));

        let generator = ProjectGenerator::new(
            "/scratch",
            Box::new(store),
            Box::new(renderer),
            Box::new(permissive_fs()),
        );

        let failure = generator
            .generate_project(&maven_request(), &TemplateModel::new())
            .unwrap_err();

        assert!(failure.root.is_some());
        assert!(matches!(failure.cause, GenerationError::Render { .. }));
    }

    #[test]
    fn workspace_failure_reports_no_root() {
        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .returning(|path| Err(GenerationError::filesystem(path, "read-only")));

        let generator = ProjectGenerator::new(
            "/scratch",
            Box::new(MockStore::new()),
            Box::new(MockRenderer::new()),
            Box::new(fs),
        );

        let failure = generator
            .generate_project(&maven_request(), &TemplateModel::new())
            .unwrap_err();

        assert!(failure.root.is_none());
        assert!(matches!(failure.cause, GenerationError::Workspace { .. }));
    }

    #[test]
    fn resource_failure_stops_the_pipeline() {
        let mut store = MockStore::new();
        store
            .expect_get_text_resource()
            .returning(|location| Err(GenerationError::resource(location, "missing")));
        store.expect_get_binary_resource().never();

        // Only the pom render happens before the wrapper install fails; the
        // source-tree templates must never render.
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .with(eq("starter-pom.xml"), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(String::new()));

        let generator = ProjectGenerator::new(
            "/scratch",
            Box::new(store),
            Box::new(renderer),
            Box::new(permissive_fs()),
        );

        let failure = generator
            .generate_project(&maven_request(), &TemplateModel::new())
            .unwrap_err();

        assert!(matches!(failure.cause, GenerationError::Resource { .. }));
    }
}
