//! The HTML page wrapped around rendered output.

use minijinja::{Environment, context};
use thiserror::Error;

const PAGE_TEMPLATE: &str = include_str!("page.html");

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page template error: {0}")]
    Render(#[from] minijinja::Error),
}

/// Wrap rendered `content` in a standalone page. With `live_reload` the
/// page subscribes to the preview server's event stream and reloads itself
/// whenever a new render is published.
pub fn render_page(title: &str, content: &str, live_reload: bool) -> Result<String, PageError> {
    let env = Environment::new();
    Ok(env.render_str(PAGE_TEMPLATE, context! { title, content, live_reload })?)
}
