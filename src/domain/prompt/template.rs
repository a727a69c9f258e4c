use std::collections::BTreeMap;

use super::error::PromptError;
use super::kind::PromptKind;
use super::request::PromptRequest;

/// Trait for rendering template overrides.
///
/// This abstraction allows swapping out the template engine (e.g. minijinja)
/// and keeping infrastructure details out of the domain layer.
pub trait TemplateRenderer {
    /// Compile a template without rendering it.
    fn check(&self, template: &str, kind: PromptKind) -> Result<(), PromptError>;

    /// Render a template string with the request fields as context.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `request` - The field values to use for rendering.
    /// * `kind` - The prompt kind being overridden (for error reporting).
    fn render(
        &self,
        template: &str,
        request: &PromptRequest,
        kind: PromptKind,
    ) -> Result<String, PromptError>;
}

/// User-supplied templates that replace built-in prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOverrides {
    templates: BTreeMap<PromptKind, String>,
}

impl TemplateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, kind: PromptKind, template: impl Into<String>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    pub fn get(&self, kind: PromptKind) -> Option<&str> {
        self.templates.get(&kind).map(|s| s.as_str())
    }

    pub fn kinds(&self) -> impl Iterator<Item = PromptKind> + '_ {
        self.templates.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
