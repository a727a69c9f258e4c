use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfigDto {
    pub defaults: Option<PromptDefaultsDto>,
    pub templates: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptDefaultsDto {
    pub output_format: Option<String>,
    pub drift_window: Option<String>,
    pub guidelines: Option<String>,
}
