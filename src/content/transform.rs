//! Listing transform: drops drafts and index pages, decorates titles, and
//! rewrites URLs into the public URL space.
//!
//! The transform is pure. The build mode is passed in rather than read from
//! the environment, so the same records always produce the same views.

use super::{ContentError, PostRecord, PostView};
use crate::config::{BuildMode, MissingTitle, SiteConfig};
use crate::helpers::{is_index_url, strip_source_prefix};

/// Suffix appended to the title of a work-in-progress post in development
pub const WIP_MARKER: &str = " 🚧";

/// Settings the transform needs from the site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Leading URL segment to strip, e.g. `/src`
    pub source_prefix: String,
    /// Last URL segment of index pages (`index` or `index.html`)
    pub index_marker: String,
    pub missing_title: MissingTitle,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl TransformOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            source_prefix: config.source_prefix(),
            index_marker: config.index_marker().to_string(),
            missing_title: config.missing_title,
        }
    }
}

/// Whether a record shows up in the listing for the given mode
pub fn is_visible(record: &PostRecord, mode: BuildMode, options: &TransformOptions) -> bool {
    (mode.is_development() || !record.frontmatter.wip)
        && !is_index_url(&record.url, &options.index_marker)
}

/// Display title for a visible record
pub fn display_title(
    record: &PostRecord,
    mode: BuildMode,
    options: &TransformOptions,
) -> Result<String, ContentError> {
    let mut title = match (&record.frontmatter.title, options.missing_title) {
        (Some(title), _) => title.clone(),
        (None, MissingTitle::Stem) => record.stem().to_string(),
        (None, MissingTitle::Reject) => {
            return Err(ContentError::MissingTitle {
                src: record.src.clone(),
            })
        }
    };

    if record.frontmatter.wip && mode.is_development() {
        title.push_str(WIP_MARKER);
    }

    Ok(title)
}

/// Turn loaded records into listing views, keeping their input order
pub fn transform(
    records: Vec<PostRecord>,
    mode: BuildMode,
    options: &TransformOptions,
) -> Result<Vec<PostView>, ContentError> {
    let total = records.len();

    let views = records
        .into_iter()
        .filter(|record| is_visible(record, mode, options))
        .map(|record| {
            let title = display_title(&record, mode, options)?;
            let url = strip_source_prefix(&record.url, &options.source_prefix);
            Ok(PostView {
                title,
                url,
                frontmatter: record.frontmatter,
                src: record.src,
                html: record.html,
                excerpt: record.excerpt,
                last_updated: record.last_updated,
            })
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    tracing::debug!(
        "Kept {} of {} posts ({} mode)",
        views.len(),
        total,
        mode
    );

    Ok(views)
}
