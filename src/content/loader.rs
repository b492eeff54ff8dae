//! Content loader - collects post records from the source directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer, PostRecord};
use crate::config::BuildMode;
use crate::helpers::source_url;
use crate::Site;

/// Loads post records matching the configured glob
pub struct ContentLoader<'a> {
    site: &'a Site,
    mode: BuildMode,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site, mode: BuildMode) -> Self {
        Self {
            site,
            mode,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Glob pattern the loader scans, e.g. `<base>/src/blog/*.md`
    pub fn pattern(&self) -> String {
        self.site
            .src_dir
            .join(&self.site.config.posts_glob)
            .to_string_lossy()
            .to_string()
    }

    /// Find all post files, sorted by path
    pub fn find_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.pattern();
        let mut files = Vec::new();

        for entry in glob::glob(&pattern).with_context(|| format!("Bad glob {:?}", pattern))? {
            let path = entry?;
            if path.is_file() && is_markdown_file(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Load every matching post.
    ///
    /// Any unreadable file or broken front-matter fails the whole load.
    pub fn load_records(&self) -> Result<Vec<PostRecord>> {
        let files = self.find_files()?;
        let mut records = Vec::with_capacity(files.len());

        for path in &files {
            let record = self
                .load_record(path)
                .with_context(|| format!("Failed to load post {:?}", path))?;
            records.push(record);
        }

        tracing::debug!("Loaded {} records from {}", records.len(), self.pattern());
        Ok(records)
    }

    /// Load a single post from a file
    fn load_record(&self, path: &Path) -> Result<PostRecord> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let relative = path.strip_prefix(&self.site.base_dir).unwrap_or(path);
        let src = relative.to_string_lossy().replace('\\', "/");
        let url = source_url(relative, self.site.config.clean_urls);

        let mut record = PostRecord::new(fm, url, src);

        if self.site.config.render {
            record.html = Some(self.renderer.render(body));
        }
        if self.site.config.excerpt {
            record.excerpt = self.renderer.render_excerpt(body);
        }

        // Last-updated stamps are only meaningful for published builds
        if self.mode == BuildMode::Production {
            record.last_updated = fs::metadata(path)?
                .modified()
                .ok()
                .map(DateTime::<Local>::from);
        }

        Ok(record)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(dir: &TempDir, config: SiteConfig) -> Site {
        Site::with_config(dir.path().to_path_buf(), config)
    }

    #[test]
    fn test_load_records_sorted_with_urls() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/blog/b-post.md", "---\ntitle: B\n---\nBody B");
        write(dir.path(), "src/blog/a-post.md", "---\ntitle: A\nwip: true\n---\nBody A");
        write(dir.path(), "src/blog/index.md", "---\ntitle: Blog\n---\n");
        write(dir.path(), "src/blog/notes.txt", "not markdown");
        write(dir.path(), "src/tips/other.md", "---\ntitle: Other\n---\n");

        let site = site(&dir, SiteConfig::default());
        let records = ContentLoader::new(&site, BuildMode::Development)
            .load_records()
            .unwrap();

        let urls: Vec<_> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/src/blog/a-post", "/src/blog/b-post", "/src/blog/index"]
        );
        assert_eq!(records[0].src, "src/blog/a-post.md");
        assert!(records[0].frontmatter.wip);
        assert!(records[0].html.is_none());
        assert!(records[0].last_updated.is_none());
    }

    #[test]
    fn test_html_urls_without_clean_urls() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/blog/post.md", "---\ntitle: Post\n---\n");

        let config = SiteConfig {
            clean_urls: false,
            ..Default::default()
        };
        let site = site(&dir, config);
        let records = ContentLoader::new(&site, BuildMode::Development)
            .load_records()
            .unwrap();
        assert_eq!(records[0].url, "/src/blog/post.html");
    }

    #[test]
    fn test_render_and_excerpt() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "src/blog/post.md",
            "---\ntitle: Post\n---\nIntro\n\n<!-- more -->\n\n# Rest\n",
        );

        let config = SiteConfig {
            render: true,
            excerpt: true,
            ..Default::default()
        };
        let site = site(&dir, config);
        let records = ContentLoader::new(&site, BuildMode::Production)
            .load_records()
            .unwrap();

        let record = &records[0];
        assert!(record.html.as_deref().unwrap().contains("<h1>Rest</h1>"));
        assert_eq!(record.excerpt.as_deref(), Some("<p>Intro</p>\n"));
        assert!(record.last_updated.is_some());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let site = site(&dir, SiteConfig::default());
        let records = ContentLoader::new(&site, BuildMode::Production)
            .load_records()
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_broken_frontmatter_fails_load() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/blog/bad.md", "---\ntitle: [oops\n---\n");

        let site = site(&dir, SiteConfig::default());
        let err = ContentLoader::new(&site, BuildMode::Production)
            .load_records()
            .unwrap_err();
        assert!(format!("{:#}", err).contains("front-matter"));
    }
}
