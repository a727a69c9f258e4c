//! Prompt configuration loading from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, parse_config_content};
use crate::domain::prompt::TemplateRenderer;
use crate::domain::{AppError, PromptConfig};

/// Load the prompt configuration.
///
/// An explicit path must exist. Without one, `phiprompt.toml` in `dir` is used
/// when present and built-in defaults otherwise.
pub fn load_config<R: TemplateRenderer>(
    explicit: Option<&Path>,
    dir: &Path,
    renderer: &R,
) -> Result<PromptConfig, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::ConfigFileNotFound(path.display().to_string()));
        }
        return load_config_file(path, renderer);
    }

    let path = config::paths::config(dir);
    if path.is_file() {
        load_config_file(&path, renderer)
    } else {
        debug!(dir = %dir.display(), "no prompt config found, using built-in defaults");
        Ok(PromptConfig::default())
    }
}

/// Read and parse a prompt configuration file.
pub fn load_config_file<R: TemplateRenderer>(
    path: &Path,
    renderer: &R,
) -> Result<PromptConfig, AppError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config_content(&content, renderer)?;
    debug!(
        path = %path.display(),
        overrides = ?config.overrides.kinds().map(|k| k.name()).collect::<Vec<_>>(),
        "loaded prompt config"
    );
    Ok(config)
}
