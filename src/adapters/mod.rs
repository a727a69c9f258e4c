pub mod template;

pub use template::MinijinjaTemplateRenderer;
