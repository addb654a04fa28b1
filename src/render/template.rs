//! Template evaluation.
//!
//! A thin adapter over a [`minijinja`] environment configured for inline
//! templates. Templates arrive as plain strings, never from a loader, so
//! everything goes through [`render_str`](minijinja::Environment::render_str).

use minijinja::{Environment, UndefinedBehavior, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template error: {0}")]
    Eval(#[from] minijinja::Error),
}

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Missing fields render as empty strings and `{{ missing or "x" }}`
        // falls through to the fallback instead of failing the render.
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    /// Evaluate `template` against `namespace`, returning the expanded text.
    pub fn render(&self, template: &str, namespace: &Value) -> Result<String, TemplateError> {
        Ok(self.env.render_str(template, namespace)?)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
