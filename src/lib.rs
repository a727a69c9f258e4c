//! phiprompt: Build HIPAA-aware clinical summary and LLM validation prompts.
//!
//! Every `build_*` function is pure and total: it interpolates its inputs
//! verbatim into a fixed instruction text and never fails. Callers must pass
//! pseudonymized identifiers; nothing here scrubs PHI, it only asks a model
//! to review for it.

pub mod adapters;
pub mod app;
pub mod domain;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::MinijinjaTemplateRenderer;
use app::{
    AppContext,
    commands::{demo, list, render},
};

pub use app::commands::list::PromptSummary;
pub use app::commands::render::RenderOutcome;
pub use domain::prompt::{
    DEFAULT_DRIFT_WINDOW, OutputFormat, Prompt, PromptDefaults, PromptError, PromptKind,
    PromptRequest, TemplateOverrides, VitalsSummaryOptions, build_access_control_prompt,
    build_audit_log_prompt, build_basic_vitals_prompt, build_bias_safety_prompt,
    build_compliance_review_prompt, build_drift_detection_prompt, build_fact_check_prompt,
    build_input_sanitization_prompt, build_output_redaction_prompt, build_peer_review_prompt,
    build_phi_scrub_check_prompt, build_regression_prompt, build_test_case_prompt,
    build_vitals_summary_prompt,
};
pub use domain::{AppError, PromptConfig};

// =============================================================================
// Catalog API
// =============================================================================

/// Describe every prompt kind and the fields it takes.
pub fn list_prompts() -> Vec<PromptSummary> {
    list::execute(&[])
}

/// Build every prompt from the bundled sample data.
pub fn demo_prompts() -> Vec<RenderOutcome> {
    demo::execute()
}

// =============================================================================
// Render API
// =============================================================================

/// Render a prompt by kind with built-in templates and no defaults.
pub fn render_prompt(kind: PromptKind, request: &PromptRequest) -> Result<Prompt, AppError> {
    render_prompt_with_config(kind, request, &PromptConfig::default())
}

/// Render a prompt by kind using config defaults and template overrides.
pub fn render_prompt_with_config(
    kind: PromptKind,
    request: &PromptRequest,
    config: &PromptConfig,
) -> Result<Prompt, AppError> {
    let ctx = AppContext::new(config.clone(), MinijinjaTemplateRenderer::new());
    render::execute(&ctx, kind, request).map(|outcome| outcome.prompt)
}

// =============================================================================
// Config API
// =============================================================================

/// Load a `phiprompt.toml` file, compiling any template overrides.
pub fn load_config_at(path: &Path) -> Result<PromptConfig, AppError> {
    app::config::load_config_file(path, &MinijinjaTemplateRenderer::new())
}

/// Parse prompt configuration from TOML text.
pub fn parse_config(content: &str) -> Result<PromptConfig, AppError> {
    domain::config::parse_config_content(content, &MinijinjaTemplateRenderer::new())
}
