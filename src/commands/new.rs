//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::i18n::Language;
use crate::Blog;

/// Where and how to create a post
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub lang: Language,
    pub category: Option<&'a str>,
    /// File name stem; derived from the title when absent
    pub slug: Option<&'a str>,
    /// Id of the counterpart post in the other language
    pub translation: Option<&'a str>,
}

/// Write a post file with a front-matter scaffold and return its path
pub fn create_post(blog: &Blog, post: &NewPost<'_>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match post.slug {
        Some(slug) => slug.to_string(),
        None => slug::slugify(post.title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from {:?}, pass --slug", post.title);
    }

    let scanner = blog.scanner();
    let target_dir = match post.category {
        Some(category) => {
            if !scanner.category_info_path(post.lang, category).exists() {
                tracing::warn!(
                    "Category {:?} has no {} and will not be listed as a category",
                    category,
                    blog.config.category_info_file
                );
            }
            scanner.category_dir(post.lang, category)
        }
        None => scanner.lang_dir(post.lang),
    };
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let fm = FrontMatter {
        title: Some(post.title.to_string()),
        date: Some(now.format("%Y-%m-%d").to_string()),
        tags: Some(String::new()),
        thumbnail: Some(String::new()),
        description: Some(String::new()),
        search_keywords: Some(String::new()),
        translation_slug: post.translation.map(str::to_string),
        ..Default::default()
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&fm)?);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
