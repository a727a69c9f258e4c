use std::fmt;

use serde::Serialize;

/// A fully rendered prompt, ready to hand to an LLM inference call.
///
/// Prompts carry no identity beyond their content: two prompts built from the
/// same inputs compare equal byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub(crate) fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the prompt and return the owned text.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.0
    }
}

/// Returns the value unless it is absent or the empty string.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Render `label: value\n`, or nothing when the value is absent or empty.
pub(crate) fn optional_line(label: &str, value: Option<&str>) -> String {
    match non_empty(value) {
        Some(value) => format!("{}: {}\n", label, value),
        None => String::new(),
    }
}
