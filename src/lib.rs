//! postview: render markdown blog posts into styled HTML pages
//!
//! A post is `posts/<key>.md`: YAML front-matter (`title`, `published_at`,
//! `cover`, anything else) followed by markdown. Loading a post rewrites
//! `/public` image paths, renders the body with fixed presentation classes,
//! and the page module turns the result into host page state and markup.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod page;

use anyhow::Result;
use std::path::Path;

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the posts
    pub posts_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Load a single post by key
    pub fn load(&self, key: &str) -> Result<content::Lookup> {
        Ok(content::PostLoader::new(self).load(key)?)
    }
}
