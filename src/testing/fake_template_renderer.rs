use crate::domain::prompt::{PromptError, PromptKind, PromptRequest, TemplateRenderer};

/// Template renderer that substitutes `{{ name }}` placeholders.
///
/// Templates with unbalanced braces fail to compile; placeholders without a
/// matching field fail to render.
#[derive(Default)]
pub struct FakeTemplateRenderer;

impl FakeTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for FakeTemplateRenderer {
    fn check(&self, template: &str, kind: PromptKind) -> Result<(), PromptError> {
        if template.matches("{{").count() != template.matches("}}").count() {
            return Err(PromptError::TemplateSyntax {
                kind: kind.name().to_string(),
                reason: "unbalanced braces".to_string(),
            });
        }
        Ok(())
    }

    fn render(
        &self,
        template: &str,
        request: &PromptRequest,
        kind: PromptKind,
    ) -> Result<String, PromptError> {
        self.check(template, kind)?;
        let mut rendered = template.to_string();
        for (name, value) in request.fields() {
            rendered = rendered.replace(&format!("{{{{ {name} }}}}"), value);
        }
        if rendered.contains("{{") {
            return Err(PromptError::TemplateRender {
                kind: kind.name().to_string(),
                reason: "undefined value".to_string(),
            });
        }
        Ok(rendered)
    }
}
