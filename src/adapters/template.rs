use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::prompt::{PromptError, PromptKind, PromptRequest, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Undefined variables are errors. Templates may call
/// `optional_line(label, value)`, which renders `label: value` plus a newline
/// only for non-empty values.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn check(&self, template: &str, kind: PromptKind) -> Result<(), PromptError> {
        // Compiling only needs syntax, so a scratch environment can borrow the source.
        Environment::new()
            .template_from_str(template)
            .map(|_| ())
            .map_err(|err| PromptError::TemplateSyntax {
                kind: kind.name().to_string(),
                reason: err.to_string(),
            })
    }

    fn render(
        &self,
        template: &str,
        request: &PromptRequest,
        kind: PromptKind,
    ) -> Result<String, PromptError> {
        env().render_str(template, request.fields()).map_err(|err| template_render_error(kind, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn env() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_function("optional_line", |label: String, value: String| -> String {
            if value.is_empty() {
                return String::new();
            }
            format!("{}: {}\n", label, value)
        });
        env
    })
}

fn template_render_error(kind: PromptKind, err: impl std::fmt::Display) -> PromptError {
    PromptError::TemplateRender { kind: kind.name().to_string(), reason: err.to_string() }
}
