//! Render command - builds one prompt from request fields.

use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::prompt::{TemplateRenderer, render_request};
use crate::domain::{AppError, Prompt, PromptKind, PromptRequest};

/// Result of rendering a prompt.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    pub kind: PromptKind,
    pub prompt: Prompt,
}

/// Execute the render command.
pub fn execute<R: TemplateRenderer>(
    ctx: &AppContext<R>,
    kind: PromptKind,
    request: &PromptRequest,
) -> Result<RenderOutcome, AppError> {
    let config = ctx.config();
    let prompt =
        render_request(kind, request, &config.defaults, &config.overrides, ctx.renderer())?;

    info!(kind = %kind, bytes = prompt.len(), "prompt rendered");
    Ok(RenderOutcome { kind, prompt })
}
