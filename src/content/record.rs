//! Post records (loader output) and post views (listing input)

use chrono::{DateTime, Local};
use serde::Serialize;

use super::FrontMatter;

/// A blog post as found on disk, before any visibility or display rules
#[derive(Debug, Clone)]
pub struct PostRecord {
    /// Parsed front-matter
    pub frontmatter: FrontMatter,

    /// Output URL, still rooted at the source directory (e.g. `/src/blog/post`)
    pub url: String,

    /// Source file path relative to the project root
    pub src: String,

    /// Rendered body, when rendering is enabled
    pub html: Option<String>,

    /// Rendered excerpt, when excerpts are enabled and the post has one
    pub excerpt: Option<String>,

    /// File modification time (production builds only)
    pub last_updated: Option<DateTime<Local>>,
}

impl PostRecord {
    /// Create a record with only the required fields
    pub fn new(frontmatter: FrontMatter, url: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            frontmatter,
            url: url.into(),
            src: src.into(),
            html: None,
            excerpt: None,
            last_updated: None,
        }
    }

    /// Source file name without extension
    pub fn stem(&self) -> &str {
        let name = self.src.rsplit(['/', '\\']).next().unwrap_or(&self.src);
        match name.rfind('.') {
            Some(pos) if pos > 0 => &name[..pos],
            _ => name,
        }
    }
}

/// A post ready for a listing page: display title and public URL
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub title: String,
    pub url: String,
    pub frontmatter: FrontMatter,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Local>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem() {
        let record = PostRecord::new(FrontMatter::default(), "/src/blog/a", "src/blog/my-post.md");
        assert_eq!(record.stem(), "my-post");

        let record = PostRecord::new(FrontMatter::default(), "/x", "notes.v2.md");
        assert_eq!(record.stem(), "notes.v2");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = PostView {
            title: "Post A".to_string(),
            url: "/blog/post-a".to_string(),
            frontmatter: FrontMatter {
                title: Some("Post A".to_string()),
                ..Default::default()
            },
            src: "src/blog/post-a.md".to_string(),
            html: None,
            excerpt: None,
            last_updated: Some(Local::now()),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "Post A");
        assert_eq!(json["frontmatter"]["wip"], false);
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("html").is_none());
    }
}
