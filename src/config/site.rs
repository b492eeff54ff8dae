//! Site configuration (blogdata.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub lang: String,

    // Directory
    pub src_dir: String,
    pub posts_glob: String,
    pub out_dir: String,
    pub data_file: String,

    // URL
    pub clean_urls: bool,

    // Content
    pub render: bool,
    pub excerpt: bool,
    pub missing_title: MissingTitle,

    // Dev server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            lang: "en-US".to_string(),

            src_dir: "src".to_string(),
            posts_glob: "blog/*.md".to_string(),
            out_dir: ".blogdata".to_string(),
            data_file: "blog.data.json".to_string(),

            clean_urls: true,

            render: false,
            excerpt: false,
            missing_title: MissingTitle::default(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// URL prefix produced by the source directory, e.g. `/src`
    pub fn source_prefix(&self) -> String {
        let dir = self.src_dir.trim_matches('/');
        if dir.is_empty() || dir == "." {
            String::new()
        } else {
            format!("/{}", dir)
        }
    }

    /// Final URL segment that marks a collection index page.
    ///
    /// Clean URLs drop the extension, so `blog/index.md` becomes `.../index`;
    /// otherwise it becomes `.../index.html`.
    pub fn index_marker(&self) -> &'static str {
        if self.clean_urls {
            "index"
        } else {
            "index.html"
        }
    }
}

/// What to do with a post whose front-matter has no `title`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTitle {
    /// Fall back to the source file name
    #[default]
    Stem,
    /// Fail the load
    Reject,
}

/// Dev server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 7777,
        }
    }
}
