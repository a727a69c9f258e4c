use std::path::{Path, PathBuf};

/// File name of the prompt configuration.
pub const CONFIG_FILE: &str = "phiprompt.toml";

/// `phiprompt.toml` in `dir`.
pub fn config(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
