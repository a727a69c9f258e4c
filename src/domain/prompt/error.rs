use thiserror::Error;

/// Error raised by the generic prompt rendering layer.
///
/// The typed `build_*` functions never fail; these errors come from
/// name-based lookup, field maps and template overrides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// No prompt kind matches the given name.
    #[error("Unknown prompt kind '{0}'. Run 'phiprompt list' to see available kinds")]
    UnknownKind(String),

    /// A required request field was not supplied.
    #[error("Prompt '{kind}' requires field '{field}'")]
    MissingField { kind: String, field: String },

    /// The request carries no fields but the prompt needs at least one.
    #[error("Prompt '{kind}' requires at least one field")]
    EmptyRequest { kind: String },

    /// A template override failed to compile.
    #[error("Invalid template for '{kind}': {reason}")]
    TemplateSyntax { kind: String, reason: String },

    /// A template override failed to render with the request fields.
    #[error("Failed to render template for '{kind}': {reason}")]
    TemplateRender { kind: String, reason: String },
}
