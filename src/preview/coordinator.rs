//! Change detection between file snapshots and published output.

use crate::render::{Pipeline, parse_record};

/// Decides, once per sampling tick, whether the preview needs a new page.
///
/// The coordinator is fed the latest template and data text each tick and
/// compares them against the previous tick. Unchanged input skips the
/// render entirely; changed input re-renders, and the result is published
/// only when the produced HTML actually differs. A render failure is
/// reported and the last published output stays in place.
pub struct Coordinator {
    pipeline: Pipeline,
    last_input: Option<(String, String)>,
    html: String,
}

impl Coordinator {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            last_input: None,
            html: String::new(),
        }
    }

    /// Process one sample of the two source texts. Returns the new HTML
    /// when it should be published, `None` otherwise.
    pub fn tick(&mut self, template: &str, data: &str) -> Option<String> {
        if self
            .last_input
            .as_ref()
            .is_some_and(|(t, d)| t == template && d == data)
        {
            return None;
        }
        self.last_input = Some((template.to_string(), data.to_string()));

        // A malformed record still renders, as if no data file existed.
        let record = match parse_record(data) {
            Ok(record) => Some(record),
            Err(e) => {
                eprintln!("Data error: {e}");
                None
            }
        };

        let html = match self.pipeline.render(record.as_ref(), template) {
            Ok(html) => html,
            Err(e) => {
                eprintln!("Render error: {e}");
                return None;
            }
        };

        if html == self.html {
            return None;
        }
        self.html = html.clone();
        Some(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkdownConfig;

    fn coordinator() -> Coordinator {
        Coordinator::new(Pipeline::new(MarkdownConfig::default()))
    }

    #[test]
    fn test_first_tick_publishes() {
        let mut coordinator = coordinator();

        let html = coordinator.tick("# Hi", "").unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_unchanged_input_is_skipped() {
        let mut coordinator = coordinator();

        assert!(coordinator.tick("# Hi", "name: x").is_some());
        assert!(coordinator.tick("# Hi", "name: x").is_none());
        assert!(coordinator.tick("# Hi", "name: x").is_none());
    }

    #[test]
    fn test_equivalent_output_is_not_republished() {
        let mut coordinator = coordinator();

        assert!(coordinator.tick("{{ a }}", "a: 1\nunused: x").is_some());
        // The data changed but nothing the template reads did.
        assert!(coordinator.tick("{{ a }}", "a: 1\nunused: y").is_none());
    }

    #[test]
    fn test_malformed_data_renders_with_empty_record() {
        let mut coordinator = coordinator();

        let html = coordinator
            .tick("{{ name or \"anon\" }}", "key: [unclosed")
            .unwrap();
        assert!(html.contains("anon"));
    }

    #[test]
    fn test_render_error_retains_last_output() {
        let mut coordinator = coordinator();

        assert!(coordinator.tick("# Good", "").is_some());
        assert!(coordinator.tick("{% if", "").is_none());

        let html = coordinator.tick("# Fixed", "").unwrap();
        assert!(html.contains("Fixed"));
    }
}
