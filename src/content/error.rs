//! Content errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse {format} front-matter: {message}")]
    FrontMatter {
        format: &'static str,
        message: String,
    },

    #[error("Post {src} has no title in its front-matter")]
    MissingTitle { src: String },
}
