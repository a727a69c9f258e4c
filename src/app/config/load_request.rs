//! Request field loading from files and `key=value` arguments.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, PromptRequest};

/// Read a flat map of string fields from a `.json`, `.yml`/`.yaml` or
/// `.toml` file.
pub fn load_request_file(path: &Path) -> Result<PromptRequest, AppError> {
    let content = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    let what = format!("request file {}", path.display());

    let parse_error = |details: String| AppError::ParseError { what: what.clone(), details };

    match extension.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content).map_err(|err| parse_error(err.to_string())),
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|err| parse_error(err.to_string())),
        "toml" => toml::from_str(&content).map_err(|err| parse_error(err.to_string())),
        other => Err(parse_error(format!(
            "unsupported extension '{}' (expected json, yml, yaml or toml)",
            other
        ))),
    }
}

/// Parse repeated `key=value` arguments. The value may contain `=`.
pub fn parse_field_args<S: AsRef<str>>(args: &[S]) -> Result<PromptRequest, AppError> {
    let mut request = PromptRequest::new();
    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| AppError::InvalidFieldArgument(arg.to_string()))?;
        request.insert(key.trim(), value);
    }
    Ok(request)
}
