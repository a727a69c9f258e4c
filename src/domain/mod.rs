pub mod config;
pub mod error;
pub mod prompt;

pub use config::PromptConfig;
pub use error::AppError;
pub use prompt::{Prompt, PromptError, PromptKind, PromptRequest};
