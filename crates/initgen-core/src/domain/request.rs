//! The resolved project request.
//!
//! A [`ProjectRequest`] is produced by the resolution collaborator and is
//! read-only to the generation core: every field is already validated for
//! business rules (dependency compatibility, platform ranges). The builder
//! still enforces the structural invariants this core relies on, in
//! particular path safety of `package_name` and `base_dir`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DomainError, Version, paths};

/// The build-tool ecosystem targeted by the generated project.
///
/// Closed variant: the descriptor generator dispatches on it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maven => write!(f, "maven"),
            Self::Gradle => write!(f, "gradle"),
        }
    }
}

impl FromStr for BuildTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maven" => Ok(Self::Maven),
            "gradle" => Ok(Self::Gradle),
            _ => Err(DomainError::UnknownBuildTool {
                value: s.to_string(),
            }),
        }
    }
}

/// Packaging of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    Jar,
    War,
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jar => write!(f, "jar"),
            Self::War => write!(f, "war"),
        }
    }
}

/// Extension synonyms: languages whose source-file extension differs from
/// the language identifier itself. Everything else passes through.
const EXTENSION_SYNONYMS: &[(&str, &str)] = &[("kotlin", "kt")];

/// Source language of the generated project.
///
/// Open-ended identifier (the metadata catalog owns the valid set); only the
/// file-extension mapping is fixed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source-file extension for this language.
    pub fn extension(&self) -> &str {
        EXTENSION_SYNONYMS
            .iter()
            .find(|(lang, _)| *lang == self.0)
            .map(|(_, ext)| *ext)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One resolved dependency, identified by group + artifact id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

/// Immutable description of the desired project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub build_tool: BuildTool,
    pub language: Language,
    pub packaging: Packaging,
    pub application_name: String,
    pub package_name: String,
    pub base_dir: Option<String>,
    pub platform_version: Version,
    pub resolved_dependencies: Vec<Dependency>,
    pub has_web_facet: bool,
}

impl ProjectRequest {
    pub fn builder() -> ProjectRequestBuilder {
        ProjectRequestBuilder::default()
    }

    /// Extension of every generated source file for this request.
    pub fn source_extension(&self) -> &str {
        self.language.extension()
    }
}

/// Builder for [`ProjectRequest`]; validates on `build()`.
#[derive(Debug, Default)]
pub struct ProjectRequestBuilder {
    build_tool: Option<BuildTool>,
    language: Option<Language>,
    packaging: Option<Packaging>,
    application_name: Option<String>,
    package_name: Option<String>,
    base_dir: Option<String>,
    platform_version: Option<Version>,
    resolved_dependencies: Vec<Dependency>,
    has_web_facet: bool,
}

impl ProjectRequestBuilder {
    pub fn build_tool(mut self, tool: BuildTool) -> Self {
        self.build_tool = Some(tool);
        self
    }

    pub fn language(mut self, language: impl Into<Language>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn platform_version(mut self, version: Version) -> Self {
        self.platform_version = Some(version);
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.resolved_dependencies.push(dependency);
        self
    }

    pub fn dependencies(mut self, deps: impl IntoIterator<Item = Dependency>) -> Self {
        self.resolved_dependencies.extend(deps);
        self
    }

    pub fn web_facet(mut self, has_web_facet: bool) -> Self {
        self.has_web_facet = has_web_facet;
        self
    }

    pub fn build(self) -> Result<ProjectRequest, DomainError> {
        let build_tool = self
            .build_tool
            .ok_or(DomainError::MissingField { field: "build_tool" })?;
        let language = self
            .language
            .ok_or(DomainError::MissingField { field: "language" })?;
        let application_name = self
            .application_name
            .ok_or(DomainError::MissingField {
                field: "application_name",
            })?;
        let package_name = self
            .package_name
            .ok_or(DomainError::MissingField {
                field: "package_name",
            })?;
        let platform_version = self
            .platform_version
            .ok_or(DomainError::MissingField {
                field: "platform_version",
            })?;

        if application_name.is_empty() {
            return Err(DomainError::EmptyApplicationName);
        }

        // Hardening: both values become on-disk paths later.
        paths::package_path(&package_name)?;
        if let Some(dir) = &self.base_dir {
            paths::base_dir_path(dir)?;
        }

        Ok(ProjectRequest {
            build_tool,
            language,
            packaging: self.packaging.unwrap_or(Packaging::Jar),
            application_name,
            package_name,
            base_dir: self.base_dir,
            platform_version,
            resolved_dependencies: self.resolved_dependencies,
            has_web_facet: self.has_web_facet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ProjectRequestBuilder {
        ProjectRequest::builder()
            .build_tool(BuildTool::Gradle)
            .language("java")
            .application_name("Demo")
            .package_name("com.example.demo")
            .platform_version(Version::new(2, 1, 0))
    }

    #[test]
    fn builder_applies_defaults() {
        let request = minimal().build().unwrap();
        assert_eq!(request.packaging, Packaging::Jar);
        assert_eq!(request.base_dir, None);
        assert!(request.resolved_dependencies.is_empty());
        assert!(!request.has_web_facet);
    }

    #[test]
    fn builder_rejects_missing_fields() {
        let result = ProjectRequest::builder().language("java").build();
        assert!(matches!(
            result,
            Err(DomainError::MissingField { field: "build_tool" })
        ));
    }

    #[test]
    fn builder_rejects_traversal_package() {
        let result = minimal().package_name("com.example.demo").build();
        assert!(result.is_ok());

        let result = minimal().package_name("com...demo").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_unsafe_base_dir() {
        assert!(minimal().base_dir("demo").build().is_ok());
        assert!(minimal().base_dir("../demo").build().is_err());
    }

    #[test]
    fn kotlin_maps_to_kt_extension() {
        assert_eq!(Language::new("kotlin").extension(), "kt");
        assert_eq!(Language::new("java").extension(), "java");
        assert_eq!(Language::new("groovy").extension(), "groovy");
    }

    #[test]
    fn build_tool_parses() {
        assert_eq!(BuildTool::from_str("gradle").unwrap(), BuildTool::Gradle);
        assert_eq!(BuildTool::from_str("maven").unwrap(), BuildTool::Maven);
        assert!(BuildTool::from_str("ant").is_err());
    }
}
