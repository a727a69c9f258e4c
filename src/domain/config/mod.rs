pub mod dto;
pub mod parse;
pub mod paths;

pub use parse::parse_config_content;

use crate::domain::prompt::{PromptDefaults, TemplateOverrides};

/// Prompt configuration loaded from `phiprompt.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptConfig {
    /// Fallbacks for optional request fields.
    pub defaults: PromptDefaults,
    /// Templates replacing built-in prompts.
    pub overrides: TemplateOverrides,
}
