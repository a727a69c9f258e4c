//! List command - describes every catalogued prompt.

use serde::Serialize;

use crate::domain::PromptKind;

/// Summary information for a prompt kind.
#[derive(Debug, Clone, Serialize)]
pub struct PromptSummary {
    pub kind: PromptKind,
    pub description: String,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    /// Whether the loaded config replaces the built-in template.
    pub overridden: bool,
}

/// Execute the list command.
///
/// `overridden` names the kinds replaced by template overrides.
pub fn execute(overridden: &[PromptKind]) -> Vec<PromptSummary> {
    PromptKind::ALL
        .into_iter()
        .map(|kind| PromptSummary {
            kind,
            description: kind.description().to_string(),
            required_fields: kind.required_fields().iter().map(|f| f.to_string()).collect(),
            optional_fields: kind.optional_fields().iter().map(|f| f.to_string()).collect(),
            overridden: overridden.contains(&kind),
        })
        .collect()
}
