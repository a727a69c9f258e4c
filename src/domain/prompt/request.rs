use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::PromptError;
use super::kind::PromptKind;

/// Named field values for rendering a prompt by kind.
///
/// Values are interpolated as-is; callers are responsible for supplying
/// pseudonymized identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptRequest {
    fields: BTreeMap<String, String>,
}

impl PromptRequest {
    /// Create a new empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the request.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field the prompt cannot be built without.
    pub fn require(&self, kind: PromptKind, name: &str) -> Result<&str, PromptError> {
        self.get(name).ok_or_else(|| PromptError::MissingField {
            kind: kind.name().to_string(),
            field: name.to_string(),
        })
    }

    /// Copy in every field from `other` that this request does not set.
    pub fn fill_missing(&mut self, other: &PromptRequest) {
        for (name, value) in &other.fields {
            self.fields.entry(name.clone()).or_insert_with(|| value.clone());
        }
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PromptRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = PromptRequest::new();
        for (name, value) in iter {
            request.insert(name, value);
        }
        request
    }
}
