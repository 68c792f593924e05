//! Build descriptor and wrapper-bundle generation.
//!
//! Branches on [`BuildTool`] exactly once. The Maven arm writes a single
//! `pom.xml` plus the Maven wrapper under the hidden `.mvn` directory; the
//! Gradle arm writes `build.gradle` + `settings.gradle` plus the wrapper
//! bundle selected by the platform version.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::GenerationError;
use crate::application::ports::{Filesystem, ResourceStore, TemplateRenderer};
use crate::domain::{BuildTool, GradleWrapperBundle, ProjectRequest, TemplateModel};

/// Logical namespace all project resources live under in the store.
const RESOURCE_NAMESPACE: &str = "project";

pub struct BuildDescriptorGenerator<'a> {
    store: &'a dyn ResourceStore,
    renderer: &'a dyn TemplateRenderer,
    fs: &'a dyn Filesystem,
}

impl<'a> BuildDescriptorGenerator<'a> {
    pub fn new(
        store: &'a dyn ResourceStore,
        renderer: &'a dyn TemplateRenderer,
        fs: &'a dyn Filesystem,
    ) -> Self {
        Self {
            store,
            renderer,
            fs,
        }
    }

    /// Write the toolchain-specific build files into `project_dir`.
    #[instrument(skip_all, fields(build_tool = %request.build_tool))]
    pub fn generate(
        &self,
        request: &ProjectRequest,
        model: &TemplateModel,
        project_dir: &Path,
    ) -> Result<(), GenerationError> {
        match request.build_tool {
            BuildTool::Maven => {
                self.render_to(project_dir, "starter-pom.xml", "pom.xml", model)?;
                self.install_maven_wrapper(project_dir)?;
            }
            BuildTool::Gradle => {
                self.render_to(project_dir, "starter-build.gradle", "build.gradle", model)?;
                self.render_to(
                    project_dir,
                    "starter-settings.gradle",
                    "settings.gradle",
                    model,
                )?;
                let bundle = GradleWrapperBundle::select(&request.platform_version);
                self.install_gradle_wrapper(project_dir, bundle)?;
            }
        }
        Ok(())
    }

    fn render_to(
        &self,
        dir: &Path,
        template: &str,
        file_name: &str,
        model: &TemplateModel,
    ) -> Result<(), GenerationError> {
        let content = self.renderer.render(template, model)?;
        let target = dir.join(file_name);
        self.fs.write_file(&target, &content)?;
        debug!(file = %target.display(), template, "wrote build descriptor");
        Ok(())
    }

    fn install_gradle_wrapper(
        &self,
        dir: &Path,
        bundle: GradleWrapperBundle,
    ) -> Result<(), GenerationError> {
        let prefix = bundle.resource_prefix();
        debug!(bundle = prefix, "installing gradle wrapper");

        self.write_text_resource(dir, "gradlew.bat", &format!("{prefix}/gradlew.bat"), false)?;
        self.write_text_resource(dir, "gradlew", &format!("{prefix}/gradlew"), true)?;

        let wrapper_dir = dir.join("gradle/wrapper");
        self.fs.create_dir_all(&wrapper_dir)?;
        self.write_text_resource(
            &wrapper_dir,
            "gradle-wrapper.properties",
            &format!("{prefix}/gradle/wrapper/gradle-wrapper.properties"),
            false,
        )?;
        self.write_binary_resource(
            &wrapper_dir,
            "gradle-wrapper.jar",
            &format!("{prefix}/gradle/wrapper/gradle-wrapper.jar"),
        )
    }

    fn install_maven_wrapper(&self, dir: &Path) -> Result<(), GenerationError> {
        debug!("installing maven wrapper");

        self.write_text_resource(dir, "mvnw.cmd", "maven/mvnw.cmd", false)?;
        self.write_text_resource(dir, "mvnw", "maven/mvnw", true)?;

        let wrapper_dir = dir.join(".mvn/wrapper");
        self.fs.create_dir_all(&wrapper_dir)?;
        self.write_text_resource(
            &wrapper_dir,
            "maven-wrapper.properties",
            "maven/wrapper/maven-wrapper.properties",
            false,
        )?;
        self.write_binary_resource(
            &wrapper_dir,
            "maven-wrapper.jar",
            "maven/wrapper/maven-wrapper.jar",
        )
    }

    fn write_text_resource(
        &self,
        dir: &Path,
        name: &str,
        location: &str,
        executable: bool,
    ) -> Result<(), GenerationError> {
        let location = format!("{RESOURCE_NAMESPACE}/{location}");
        let body = self.store.get_text_resource(&location)?;
        let target = dir.join(name);
        self.fs.write_file(&target, &body)?;
        if executable {
            self.fs.set_executable(&target)?;
        }
        Ok(())
    }

    fn write_binary_resource(
        &self,
        dir: &Path,
        name: &str,
        location: &str,
    ) -> Result<(), GenerationError> {
        let location = format!("{RESOURCE_NAMESPACE}/{location}");
        let body = self.store.get_binary_resource(&location)?;
        self.fs.write_binary(&dir.join(name), &body)
    }
}
