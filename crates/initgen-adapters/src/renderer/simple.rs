//! Simple variable substitution renderer.

use std::collections::HashMap;

use initgen_core::application::{GenerationError, ports::TemplateRenderer};
use initgen_core::domain::TemplateModel;
use serde_json::Value;
use tracing::instrument;

use crate::builtin_templates;

/// Renderer using `{{key}}` variable substitution over a named template
/// set.
///
/// An unknown template name is a hard error; an unknown placeholder renders
/// as the empty string (lenient Mustache semantics).
pub struct SimpleRenderer {
    templates: HashMap<String, String>,
}

impl SimpleRenderer {
    /// Create a renderer with no templates registered.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create a renderer with the built-in template set loaded.
    pub fn with_builtin() -> Self {
        let mut renderer = Self::new();
        for (name, source) in builtin_templates::all() {
            renderer.register(name, source);
        }
        renderer
    }

    /// Register or replace a template.
    pub fn register(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = template_name))]
    fn render(
        &self,
        template_name: &str,
        model: &TemplateModel,
    ) -> Result<String, GenerationError> {
        let source = self.templates.get(template_name).ok_or_else(|| {
            GenerationError::render(template_name, "no such template")
        })?;
        Ok(substitute(source, model))
    }
}

fn substitute(source: &str, model: &TemplateModel) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                if let Some(value) = model.get(key.trim()) {
                    out.push_str(&value_to_string(value));
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated placeholder: emit verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
