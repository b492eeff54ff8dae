//! Markdown rendering for post bodies and excerpts

use pulldown_cmark::{html, Options, Parser};

/// Marker separating the excerpt from the rest of a post
pub const EXCERPT_SEPARATOR: &str = "<!-- more -->";

/// Markdown renderer
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is stripped before rendering, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Split content at `<!-- more -->`.
    /// Returns (excerpt, full_content) where excerpt is None if no separator
    pub fn split_excerpt(content: &str) -> (Option<&str>, &str) {
        match content.find(EXCERPT_SEPARATOR) {
            Some(pos) => (Some(content[..pos].trim()), content),
            None => (None, content),
        }
    }

    /// Render the excerpt of a post, if it has one
    pub fn render_excerpt(&self, content: &str) -> Option<String> {
        let (excerpt, _) = Self::split_excerpt(content);
        excerpt.map(|e| self.render(e))
    }
}
