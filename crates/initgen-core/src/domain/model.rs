//! The template model and the bill-of-materials sub-model.
//!
//! The model is assembled by the resolution collaborator before generation
//! begins; the core treats it as opaque renderer input. The only values the
//! core itself derives are the BOM sub-model entries, whose version token
//! formatting depends on the requested build tool.

use std::collections::BTreeMap;

use serde_json::Value;

use super::request::{BuildTool, ProjectRequest};

/// Opaque key -> value mapping handed to the template renderer.
///
/// Keys are ordered so that identical inputs always render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateModel {
    entries: BTreeMap<String, Value>,
}

impl TemplateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TemplateModel {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut model = Self::new();
        for (k, v) in iter {
            model.insert(k, v);
        }
        model
    }
}

/// A version property reference (`spring-boot.version` style), optionally
/// internal to the generated build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProperty {
    property: String,
    internal: bool,
}

impl VersionProperty {
    pub fn new(property: impl Into<String>, internal: bool) -> Self {
        Self {
            property: property.into(),
            internal,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// Standard dotted/dashed form, as written in a Maven `<properties>`
    /// block.
    pub fn to_standard_format(&self) -> String {
        self.property.clone()
    }

    /// Camel-case form, as referenced from a Gradle build script
    /// (`spring-boot.version` -> `springBootVersion`).
    pub fn to_camel_case_format(&self) -> String {
        let mut out = String::with_capacity(self.property.len());
        let mut upper_next = false;
        for c in self.property.chars() {
            if c == '.' || c == '-' {
                upper_next = true;
            } else if upper_next {
                out.extend(c.to_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// One bill-of-materials entry from the metadata catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillOfMaterials {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub version_property: Option<VersionProperty>,
}

impl BillOfMaterials {
    /// Sub-model for rendering this BOM inside a build descriptor.
    ///
    /// When the BOM version is managed through a property, the token is a
    /// `${...}` reference whose format follows the build tool; otherwise it
    /// is the literal version.
    pub fn to_model(&self, request: &ProjectRequest) -> TemplateModel {
        let version_token = match &self.version_property {
            Some(property) => format!("${{{}}}", compute_version_property(request, property)),
            None => self.version.clone(),
        };

        let mut model = TemplateModel::new();
        model
            .insert("groupId", self.group_id.as_str())
            .insert("artifactId", self.artifact_id.as_str())
            .insert("versionToken", version_token);
        model
    }
}

fn compute_version_property(request: &ProjectRequest, property: &VersionProperty) -> String {
    if request.build_tool == BuildTool::Gradle && property.is_internal() {
        property.to_camel_case_format()
    } else {
        property.to_standard_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Version, request::Packaging};

    fn request(tool: BuildTool) -> ProjectRequest {
        ProjectRequest::builder()
            .build_tool(tool)
            .language("java")
            .packaging(Packaging::Jar)
            .application_name("Demo")
            .package_name("com.example.demo")
            .platform_version(Version::new(2, 1, 0))
            .build()
            .unwrap()
    }

    #[test]
    fn model_keys_are_ordered() {
        let mut model = TemplateModel::new();
        model.insert("zeta", "z").insert("alpha", "a");
        let keys: Vec<_> = model.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn version_property_camel_case() {
        let p = VersionProperty::new("spring-boot.version", true);
        assert_eq!(p.to_camel_case_format(), "springBootVersion");
        assert_eq!(p.to_standard_format(), "spring-boot.version");
    }

    #[test]
    fn bom_literal_version_token() {
        let bom = BillOfMaterials {
            group_id: "org.example".into(),
            artifact_id: "example-bom".into(),
            version: "1.2.3".into(),
            version_property: None,
        };
        let model = bom.to_model(&request(BuildTool::Maven));
        assert_eq!(model.get("versionToken").unwrap(), "1.2.3");
        assert_eq!(model.get("groupId").unwrap(), "org.example");
    }

    #[test]
    fn bom_property_token_follows_build_tool() {
        let bom = BillOfMaterials {
            group_id: "org.example".into(),
            artifact_id: "example-bom".into(),
            version: "1.2.3".into(),
            version_property: Some(VersionProperty::new("example.version", true)),
        };

        let gradle = bom.to_model(&request(BuildTool::Gradle));
        assert_eq!(gradle.get("versionToken").unwrap(), "${exampleVersion}");

        let maven = bom.to_model(&request(BuildTool::Maven));
        assert_eq!(maven.get("versionToken").unwrap(), "${example.version}");
    }
}
