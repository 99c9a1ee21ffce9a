//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::i18n::Language;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Tagline per language code
    pub description: BTreeMap<Language, String>,
    pub author: String,
    pub github: String,

    // URL
    /// Public base URL, without trailing slash
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Content
    pub default_language: Language,
    /// Reserved metadata file that marks a directory as a category
    pub category_info_file: String,
    /// Glob patterns of markdown files that are never posts
    pub exclude_files: Vec<String>,
    /// Number of body characters kept as a post preview
    pub preview_length: usize,

    // Export
    pub llms_full_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut description = BTreeMap::new();
        description.insert(
            Language::Ko,
            "AI를 위한 블로그 (사람도 환영합니다)".to_string(),
        );
        description.insert(Language::En, "Built for AI. Humans welcome.".to_string());

        Self {
            title: "JustAnotherBlog".to_string(),
            description,
            author: "Sanha Ko".to_string(),
            github: "https://github.com/headF1rst".to_string(),

            url: "https://headf1rst.github.io/log".to_string(),

            content_dir: "_posts".to_string(),
            public_dir: "public".to_string(),

            default_language: Language::Ko,
            category_info_file: "_info.md".to_string(),
            exclude_files: vec!["_info.md".to_string()],
            preview_length: 140,

            llms_full_file: "llms-full.txt".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Tagline for a language, empty when not configured
    pub fn description_for(&self, lang: Language) -> &str {
        self.description.get(&lang).map(String::as_str).unwrap_or("")
    }
}
