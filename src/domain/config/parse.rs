//! Pure parse/validate for prompt configuration (`phiprompt.toml`).

use tracing::warn;

use super::PromptConfig;
use super::dto::PromptConfigDto;
use crate::domain::AppError;
use crate::domain::prompt::{
    OutputFormat, PromptDefaults, PromptKind, TemplateOverrides, TemplateRenderer,
};

/// Parse and validate prompt configuration from TOML content.
///
/// Template keys must name a prompt kind and every template must compile.
pub fn parse_config_content<R: TemplateRenderer>(
    content: &str,
    renderer: &R,
) -> Result<PromptConfig, AppError> {
    let dto: PromptConfigDto = toml::from_str(content)?;

    let defaults = dto
        .defaults
        .map(|d| PromptDefaults {
            output_format: d.output_format,
            drift_window: d.drift_window,
            guidelines: d.guidelines,
        })
        .unwrap_or_default();

    if let Some(format) = &defaults.output_format
        && OutputFormat::from_name(format).is_none()
    {
        warn!(output_format = %format, "unrecognized default output format, using bullet");
    }

    let mut overrides = TemplateOverrides::new();
    for (name, template) in dto.templates.unwrap_or_default() {
        let kind = PromptKind::from_name(&name).ok_or_else(|| {
            AppError::config_error(format!("Unknown prompt kind '{}' in [templates]", name))
        })?;
        renderer.check(&template, kind)?;
        overrides = overrides.with_template(kind, template);
    }

    Ok(PromptConfig { defaults, overrides })
}
