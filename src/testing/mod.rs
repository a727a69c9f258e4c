mod fake_template_renderer;

pub use fake_template_renderer::FakeTemplateRenderer;
