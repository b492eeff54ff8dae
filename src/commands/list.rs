//! List blog posts

use anyhow::Result;

use crate::config::BuildMode;
use crate::Site;

/// Print the posts a listing page would show
pub fn run(site: &Site, mode: BuildMode) -> Result<()> {
    let posts = site.posts(mode)?;

    println!("Posts ({}, {}):", posts.len(), mode);
    for post in posts {
        println!("  {} [{}]", post.title, post.url);
    }

    Ok(())
}
