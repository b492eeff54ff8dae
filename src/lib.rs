//! blogdata: the content layer of a personal blog
//!
//! Loads blog post metadata from markdown front-matter, hides work in progress
//! outside development builds, and produces the ordered post list a listing
//! page renders.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use config::BuildMode;

/// Name of the configuration file at the project root
pub const CONFIG_FILE: &str = "blogdata.yml";

/// A blog project on disk
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory
    pub src_dir: PathBuf,
    /// Output directory
    pub out_dir: PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let src_dir = base_dir.join(&config.src_dir);
        let out_dir = base_dir.join(&config.out_dir);

        Self {
            config,
            base_dir,
            src_dir,
            out_dir,
        }
    }

    /// Path of the exported post list
    pub fn data_path(&self) -> PathBuf {
        self.out_dir.join(&self.config.data_file)
    }

    /// Load and transform all posts for the given mode
    pub fn posts(&self, mode: BuildMode) -> Result<Vec<content::PostView>> {
        let records = content::loader::ContentLoader::new(self, mode).load_records()?;
        let options = content::TransformOptions::from_config(&self.config);
        Ok(content::transform(records, mode, &options)?)
    }

    /// Write the post list to the output directory
    pub fn export(&self, mode: BuildMode) -> Result<PathBuf> {
        commands::export::run(self, mode)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
