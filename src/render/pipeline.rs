//! The record-to-HTML render pipeline.
//!
//! One record plus one template text become one HTML document. When the
//! record holds a repeat collection under the reserved key the template is
//! expanded once per element, otherwise exactly once. Every expansion is
//! rendered to HTML on its own and wrapped in a unit container, and the
//! containers are concatenated in element order.

use serde_yaml::Mapping;
use thiserror::Error;

use crate::config::MarkdownConfig;

use super::data::repeat_collection;
use super::loop_ctx::LoopContext;
use super::markdown::{MarkdownError, render_markdown};
use super::merge::merge_namespace;
use super::template::{TemplateError, TemplateRenderer};

const UNIT_OPEN: &str = "<div class=\"unit\">";
const UNIT_CLOSE: &str = "</div>";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("{0}")]
    Markdown(#[from] MarkdownError),
}

pub struct Pipeline {
    renderer: TemplateRenderer,
    markdown: MarkdownConfig,
}

impl Pipeline {
    pub fn new(markdown: MarkdownConfig) -> Self {
        Self {
            renderer: TemplateRenderer::new(),
            markdown,
        }
    }

    /// Render `template` against `record`, producing the complete HTML
    /// output. A failure in any fragment fails the whole render; there is
    /// no partial output.
    pub fn render(
        &self,
        record: Option<&Mapping>,
        template: &str,
    ) -> Result<String, PipelineError> {
        let empty = Mapping::new();
        let record = record.unwrap_or(&empty);

        let mut output = String::new();
        match repeat_collection(record) {
            Some(elements) => {
                let total = elements.len();
                for (position, element) in elements.iter().enumerate() {
                    let overrides = element.as_mapping();
                    let fragment =
                        self.render_fragment(template, record, overrides, position, total)?;
                    push_unit(&mut output, &fragment);
                }
            }
            None => {
                let fragment = self.render_fragment(template, record, None, 0, 1)?;
                push_unit(&mut output, &fragment);
            }
        }

        Ok(output)
    }

    fn render_fragment(
        &self,
        template: &str,
        record: &Mapping,
        overrides: Option<&Mapping>,
        position: usize,
        total: usize,
    ) -> Result<String, PipelineError> {
        let loop_ctx = LoopContext::build(position, total);
        let namespace = merge_namespace(record, overrides, loop_ctx.value());
        let expanded = self.renderer.render(template, &namespace)?;
        Ok(render_markdown(&expanded, &self.markdown)?)
    }
}

fn push_unit(output: &mut String, fragment: &str) {
    output.push_str(UNIT_OPEN);
    output.push_str(fragment);
    output.push_str(UNIT_CLOSE);
}
