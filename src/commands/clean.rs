//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the output directory and everything exported into it
pub fn run(site: &Site) -> Result<()> {
    if site.out_dir.exists() {
        fs::remove_dir_all(&site.out_dir)?;
        tracing::info!("Deleted: {:?}", site.out_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", site.out_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_out_dir() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path().to_path_buf(), SiteConfig::default());
        fs::create_dir_all(&site.out_dir).unwrap();
        fs::write(site.data_path(), "[]").unwrap();

        run(&site).unwrap();
        assert!(!site.out_dir.exists());

        // Cleaning twice is fine
        run(&site).unwrap();
    }
}
