use crate::domain::PromptConfig;
use crate::domain::prompt::TemplateRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: TemplateRenderer> {
    config: PromptConfig,
    renderer: R,
}

impl<R: TemplateRenderer> AppContext<R> {
    /// Create a new application context.
    pub fn new(config: PromptConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Get a reference to the loaded prompt configuration.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
