//! Dependency-conditional augmentation.
//!
//! After the source tree is built, the resolved dependency set is matched
//! against an ordered rule table; each matching rule renders one extra test
//! file. The table currently holds a single rule, but matching is a lookup
//! so new triggers are data, not control flow.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::GenerationError;
use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::domain::{ProjectRequest, TemplateModel};

/// One trigger rule: when `artifact_id` appears among the resolved
/// dependencies, render `template_base.<ext>` into the test directory as
/// `<ApplicationName><file_suffix>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentRule {
    pub artifact_id: String,
    pub file_suffix: String,
    pub template_base: String,
}

impl AugmentRule {
    pub fn new(
        artifact_id: impl Into<String>,
        file_suffix: impl Into<String>,
        template_base: impl Into<String>,
    ) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            file_suffix: file_suffix.into(),
            template_base: template_base.into(),
        }
    }
}

/// Ordered rule table applied against the resolved dependency set.
#[derive(Debug, Clone)]
pub struct DependencyAugmenter {
    rules: Vec<AugmentRule>,
}

impl Default for DependencyAugmenter {
    /// The built-in table: web-starter projects get an extra smoke-test
    /// class rendered from the standard test template.
    fn default() -> Self {
        Self {
            rules: vec![AugmentRule::new(
                "spring-boot-starter-web",
                "MyTests",
                "ApplicationTests",
            )],
        }
    }
}

impl DependencyAugmenter {
    pub fn new(rules: Vec<AugmentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AugmentRule] {
        &self.rules
    }

    /// Render the extra artifacts for every matching rule.
    #[instrument(skip_all, fields(dependencies = request.resolved_dependencies.len()))]
    pub fn augment(
        &self,
        request: &ProjectRequest,
        test_model: &TemplateModel,
        renderer: &dyn TemplateRenderer,
        fs: &dyn Filesystem,
        test_dir: &Path,
    ) -> Result<(), GenerationError> {
        let extension = request.source_extension();

        for dependency in &request.resolved_dependencies {
            // Ordered scan: rules fire in table order per dependency.
            for rule in self
                .rules
                .iter()
                .filter(|rule| rule.artifact_id == dependency.artifact_id)
            {
                let template = format!("{}.{}", rule.template_base, extension);
                let file_name =
                    format!("{}{}.{}", request.application_name, rule.file_suffix, extension);
                let content = renderer.render(&template, test_model)?;
                let target = test_dir.join(&file_name);
                fs.write_file(&target, &content)?;
                debug!(
                    artifact = %dependency.artifact_id,
                    file = %target.display(),
                    "wrote dependency-triggered artifact"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildTool, Dependency, Version};
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(
            &self,
            template_name: &str,
            _model: &TemplateModel,
        ) -> Result<String, GenerationError> {
            Ok(template_name.to_string())
        }
    }

    #[derive(Default)]
    struct RecordingFs {
        written: Mutex<Vec<PathBuf>>,
    }

    impl Filesystem for RecordingFs {
        fn create_dir_all(&self, _: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
        fn write_file(&self, path: &Path, _: &str) -> Result<(), GenerationError> {
            self.written.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
        fn write_binary(&self, _: &Path, _: &[u8]) -> Result<(), GenerationError> {
            Ok(())
        }
        fn set_executable(&self, _: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
        fn exists(&self, _: &Path) -> bool {
            false
        }
        fn remove_dir_all(&self, _: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
    }

    fn request(artifacts: &[&str]) -> ProjectRequest {
        let mut builder = ProjectRequest::builder()
            .build_tool(BuildTool::Gradle)
            .language("java")
            .application_name("Demo")
            .package_name("com.example.demo")
            .platform_version(Version::new(2, 1, 0));
        for artifact in artifacts {
            builder = builder.dependency(Dependency::new("org.example", *artifact));
        }
        builder.build().unwrap()
    }

    fn written(fs: &RecordingFs) -> Vec<PathBuf> {
        fs.written.lock().unwrap().clone()
    }

    #[test]
    fn default_table_fires_on_the_web_starter() {
        let fs = RecordingFs::default();
        DependencyAugmenter::default()
            .augment(
                &request(&["spring-boot-starter-web"]),
                &TemplateModel::new(),
                &EchoRenderer,
                &fs,
                Path::new("/test"),
            )
            .unwrap();

        assert_eq!(written(&fs), vec![PathBuf::from("/test/DemoMyTests.java")]);
    }

    #[test]
    fn no_matching_dependency_writes_nothing() {
        let fs = RecordingFs::default();
        DependencyAugmenter::default()
            .augment(
                &request(&["spring-boot-starter-data-jpa"]),
                &TemplateModel::new(),
                &EchoRenderer,
                &fs,
                Path::new("/test"),
            )
            .unwrap();

        assert!(written(&fs).is_empty());
    }

    #[test]
    fn multiple_rules_fire_in_table_order() {
        let augmenter = DependencyAugmenter::new(vec![
            AugmentRule::new("widget-starter", "SmokeTests", "ApplicationTests"),
            AugmentRule::new("widget-starter", "SliceTests", "ApplicationTests"),
        ]);

        let fs = RecordingFs::default();
        augmenter
            .augment(
                &request(&["widget-starter"]),
                &TemplateModel::new(),
                &EchoRenderer,
                &fs,
                Path::new("/test"),
            )
            .unwrap();

        assert_eq!(
            written(&fs),
            vec![
                PathBuf::from("/test/DemoSmokeTests.java"),
                PathBuf::from("/test/DemoSliceTests.java"),
            ]
        );
    }
}
