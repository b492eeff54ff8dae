//! Content module - loads blog post records and turns them into listing views

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod record;
pub mod transform;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use record::{PostRecord, PostView};
pub use transform::{transform, TransformOptions};
