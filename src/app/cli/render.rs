//! Render command implementation.

use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::render;
use crate::app::config::{load_request_file, parse_field_args};
use crate::domain::prompt::TemplateRenderer;
use crate::domain::{AppError, PromptKind, PromptRequest};

pub fn run_render<R: TemplateRenderer>(
    ctx: &AppContext<R>,
    kind: &str,
    fields: &[String],
    request_file: Option<&Path>,
    json: bool,
) -> Result<(), AppError> {
    let kind: PromptKind = kind.parse()?;
    let request = resolve_request(fields, request_file)?;

    let outcome = render::execute(ctx, kind, &request)?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|err| {
            AppError::ParseError { what: "rendered prompt".to_string(), details: err.to_string() }
        })?;
        println!("{}", rendered);
    } else {
        println!("{}", outcome.prompt);
    }
    Ok(())
}

/// Merge file fields with `--field` arguments; arguments win.
fn resolve_request(
    fields: &[String],
    request_file: Option<&Path>,
) -> Result<PromptRequest, AppError> {
    let mut request = parse_field_args(fields)?;
    if let Some(path) = request_file {
        request.fill_missing(&load_request_file(path)?);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn field_arguments_override_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("request.yml");
        fs::write(&path, "user_role: nurse\nnote: from file\n").unwrap();

        let request =
            resolve_request(&["user_role=pharmacist".to_string()], Some(&path)).unwrap();

        assert_eq!(request.get("user_role"), Some("pharmacist"));
        assert_eq!(request.get("note"), Some("from file"));
    }

    #[test]
    fn no_file_uses_arguments_only() {
        let request = resolve_request(&["text=hello".to_string()], None).unwrap();

        assert_eq!(request.len(), 1);
    }
}
