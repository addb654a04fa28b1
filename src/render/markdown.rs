//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Render markdown to HTML using pulldown-cmark.
///
/// Raw HTML embedded in the markdown passes through untouched, so templates
/// may mix markup into their output. Bare URLs are left as plain text.
pub fn render_markdown(
    markdown: &str,
    markdown_config: &MarkdownConfig,
) -> Result<String, MarkdownError> {
    let mut options = Options::empty();
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "smart_punctuation" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    Ok(html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let config = MarkdownConfig::default();

        let output = render_markdown("# Receipt\n\nThank you!", &config).unwrap();

        assert!(output.contains("<h1>Receipt</h1>"));
        assert!(output.contains("<p>Thank you!</p>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let config = MarkdownConfig::default();

        let output = render_markdown("before <span class=\"tag\">mid</span> after", &config).unwrap();

        assert!(output.contains("<span class=\"tag\">mid</span>"));
    }

    #[test]
    fn test_smart_punctuation() {
        let config = MarkdownConfig::default();

        let output = render_markdown("\"Hello\" -- world", &config).unwrap();

        assert!(output.contains("\u{201c}Hello\u{201d}"));
        assert!(output.contains("\u{2013}"));
    }

    #[test]
    fn test_bare_urls_are_not_linkified() {
        let config = MarkdownConfig::default();

        let output = render_markdown("Visit https://example.com today", &config).unwrap();

        assert!(!output.contains("<a "));
        assert!(output.contains("https://example.com"));
    }

    #[test]
    fn test_tables_extension() {
        let config = MarkdownConfig::default();

        let output = render_markdown("| a | b |\n| - | - |\n| 1 | 2 |", &config).unwrap();

        assert!(output.contains("<table>"));
    }

    #[test]
    fn test_invalid_extension() {
        let config = MarkdownConfig {
            extensions: vec!["not_a_real_extension".to_string()],
        };

        let result = render_markdown("# Test", &config);
        assert!(result.is_err());
    }
}
