//! Canonical source-tree layout.
//!
//! Lays out `src/main` and `src/test` with the language-specific package
//! path, renders the bootstrap/test classes, and creates the resource
//! directories. Every step is idempotent against an already-created parent;
//! none attempts rollback, the workspace registry covers cleanup.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::GenerationError;
use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::domain::{Packaging, ProjectRequest, TemplateModel, paths};

pub struct SourceTreeBuilder<'a> {
    renderer: &'a dyn TemplateRenderer,
    fs: &'a dyn Filesystem,
}

impl<'a> SourceTreeBuilder<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, fs: &'a dyn Filesystem) -> Self {
        Self { renderer, fs }
    }

    /// Build the skeleton and sources under `project_dir`.
    ///
    /// `test_model` must already carry the test-specific values (the
    /// orchestrator sets the test model up before calling this). Returns the
    /// test source directory so the augmenter can write into it.
    #[instrument(skip_all, fields(language = %request.language, packaging = %request.packaging))]
    pub fn build(
        &self,
        request: &ProjectRequest,
        model: &TemplateModel,
        test_model: &TemplateModel,
        project_dir: &Path,
    ) -> Result<PathBuf, GenerationError> {
        let package_path = paths::package_path(&request.package_name)?;
        let extension = request.source_extension();
        let application_name = &request.application_name;

        // Main sources.
        let main_dir = project_dir
            .join("src/main")
            .join(request.language.as_str())
            .join(&package_path);
        self.fs.create_dir_all(&main_dir)?;
        self.render_source(
            &main_dir,
            &format!("{application_name}.{extension}"),
            &format!("Application.{extension}"),
            model,
        )?;

        if request.packaging == Packaging::War {
            let file_name = format!("ServletInitializer.{extension}");
            self.render_source(&main_dir, &file_name, &file_name, model)?;
        }

        // Test sources.
        let test_dir = project_dir
            .join("src/test")
            .join(request.language.as_str())
            .join(&package_path);
        self.fs.create_dir_all(&test_dir)?;
        self.render_source(
            &test_dir,
            &format!("{application_name}Tests.{extension}"),
            &format!("ApplicationTests.{extension}"),
            test_model,
        )?;

        // Resources.
        let resources = project_dir.join("src/main/resources");
        self.fs.create_dir_all(&resources)?;
        self.fs
            .write_file(&resources.join("application.properties"), "")?;

        if request.has_web_facet {
            self.fs.create_dir_all(&resources.join("templates"))?;
            self.fs.create_dir_all(&resources.join("static"))?;
        }

        Ok(test_dir)
    }

    fn render_source(
        &self,
        dir: &Path,
        file_name: &str,
        template: &str,
        model: &TemplateModel,
    ) -> Result<(), GenerationError> {
        let content = self.renderer.render(template, model)?;
        let target = dir.join(file_name);
        self.fs.write_file(&target, &content)?;
        debug!(file = %target.display(), template, "wrote source file");
        Ok(())
    }
}
