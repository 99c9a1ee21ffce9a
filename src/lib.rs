//! duolog: content indexer for a bilingual (Korean/English) markdown blog
//!
//! Posts live under `<content_dir>/<lang>/[<category>/]<slug>.md` with YAML
//! front-matter. This crate builds an in-memory index of posts, categories
//! and tags per language, answers queries over it and writes the
//! `llms-full.txt` export.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod i18n;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentIndex, ContentScanner};

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory (language roots live here)
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
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

    /// Create a Blog with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Scanner over this blog's content directory
    pub fn scanner(&self) -> ContentScanner {
        ContentScanner::new(&self.content_dir, &self.config)
    }

    /// Scan and index all content
    pub fn build_index(&self) -> ContentIndex {
        ContentIndex::build(self.scanner(), self.config.preview_length)
    }

    /// Generate the content export
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove generated files
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_blog_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("_posts"));
        assert_eq!(blog.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_blog_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: posts\npublic_dir: out\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("posts"));
        assert_eq!(blog.public_dir, dir.path().join("out"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "preview_length: [1, 2]\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
