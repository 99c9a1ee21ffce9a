//! Generator module - writes the `llms-full.txt` content export
//!
//! The export is a single markdown document with every post of every
//! language, meant for language models and other automated readers.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{loader, ContentIndex, Post};
use crate::helpers::{full_url_for, post_url};
use crate::i18n::Language;
use crate::Blog;

/// Builds generated artifacts from a content index
pub struct Generator {
    blog: Blog,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Self {
        Self { blog: blog.clone() }
    }

    /// Path of the generated `llms-full.txt`
    pub fn llms_full_path(&self) -> PathBuf {
        self.blog.public_dir.join(&self.blog.config.llms_full_file)
    }

    /// Write `llms-full.txt` into the public directory
    pub fn generate(&self, index: &ContentIndex) -> Result<PathBuf> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let content = render_llms_full(&self.blog.config, index, Utc::now());
        let output_path = self.llms_full_path();
        fs::write(&output_path, &content)?;

        tracing::info!(
            "Generated {} ({:.2} KB)",
            self.blog.config.llms_full_file,
            content.len() as f64 / 1024.0
        );
        Ok(output_path)
    }
}

/// Render the full export
pub fn render_llms_full(
    config: &SiteConfig,
    index: &ContentIndex,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "# {} - Complete Content\n\n\
         > This file contains all blog posts in full markdown format.\n\
         > Optimized for AI systems and language models.\n\
         > Generated: {}\n\n---\n\n",
        config.title,
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );

    for lang in Language::ALL {
        let _ = write!(out, "\n# {} Posts\n\n", lang.display_name());
        let tagline = config.description_for(lang);
        if !tagline.is_empty() {
            let _ = write!(out, "> {}\n\n", tagline);
        }
        for post in index.sorted_posts(lang) {
            let body = loader::load_body_at(&post.source).unwrap_or_default();
            render_post(&mut out, config, post, &body);
        }
    }

    render_footer(&mut out, config);
    out
}

fn render_post(out: &mut String, config: &SiteConfig, post: &Post, body: &str) {
    let _ = writeln!(out, "## {}\n", post.title);
    let _ = writeln!(out, "- **URL**: {}", post_url(config, post.lang, &post.id));
    let _ = writeln!(out, "- **Date**: {}", post.date);
    if let Some(category) = &post.category {
        let _ = writeln!(out, "- **Category**: {}", category);
    }

    let tags = post
        .tag_list()
        .iter()
        .map(|t| format!("`{}`", t))
        .collect::<Vec<_>>()
        .join(" ");
    if !tags.is_empty() {
        let _ = writeln!(out, "- **Tags**: {}", tags);
    }
    if let Some(description) = post.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "- **Summary**: {}", description);
    }

    out.push_str("\n### Content\n\n");
    out.push_str(body);
    out.push_str("\n\n---\n\n");
}

fn render_footer(out: &mut String, config: &SiteConfig) {
    let _ = write!(
        out,
        "\n# About This File\n\n\
         This is `{file}`, part of the llms.txt convention for AI-friendly websites.\n\n\
         - **Blog**: {blog}\n\
         - **Author**: {author}\n\
         - **llms.txt**: {llms}\n",
        file = config.llms_full_file,
        blog = config.base_url(),
        author = config.author,
        llms = full_url_for(config, "llms.txt"),
    );
    if !config.github.is_empty() {
        let _ = writeln!(out, "- **GitHub**: {}", config.github);
    }
    out.push_str("\nFor more information about llms.txt, visit: https://llmstxt.org/\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentScanner;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn write(root: &std::path::Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> (TempDir, Blog) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("_posts");
        write(
            &content,
            "ko/tech/tx.md",
            "---\ntitle: 트랜잭션\ndate: \"2024-02-01\"\ntags: spring, db\ndescription: 요약\n---\n본문입니다.",
        );
        write(
            &content,
            "en/hello.md",
            "---\ntitle: Hello\ndate: \"2024-01-01\"\n---\nHello world",
        );
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_render_contains_every_post() {
        let (_dir, blog) = site();
        let index = ContentIndex::build(
            ContentScanner::new(&blog.content_dir, &blog.config),
            blog.config.preview_length,
        );
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let text = render_llms_full(&blog.config, &index, at);

        assert!(text.starts_with("# JustAnotherBlog - Complete Content"));
        assert!(text.contains("> Generated: 2024-05-01T12:00:00.000Z"));
        assert!(text.contains("# Korean (한국어) Posts"));
        assert!(text.contains("# English Posts\n\n> Built for AI. Humans welcome.\n\n"));

        assert!(text.contains("## 트랜잭션\n\n- **URL**: https://headf1rst.github.io/log/ko/tx\n"));
        assert!(text.contains("- **Category**: tech\n"));
        assert!(text.contains("- **Tags**: `spring` `db`\n"));
        assert!(text.contains("- **Summary**: 요약\n"));
        assert!(text.contains("### Content\n\n본문입니다.\n\n---"));

        let hello = &text[text.find("## Hello").unwrap()..];
        assert!(hello.contains("- **URL**: https://headf1rst.github.io/log/en/hello\n"));
        let hello_meta = &hello[..hello.find("### Content").unwrap()];
        assert!(!hello_meta.contains("Category"));
        assert!(!hello_meta.contains("Tags"));

        assert!(text.contains("- **llms.txt**: https://headf1rst.github.io/log/llms.txt"));
        // Korean section comes first
        assert!(text.find("## 트랜잭션").unwrap() < text.find("## Hello").unwrap());
    }

    #[test]
    fn test_same_id_in_two_categories_keeps_both_bodies() {
        let (dir, blog) = site();
        let content = dir.path().join("_posts");
        write(
            &content,
            "ko/tech/intro.md",
            "---\ntitle: 기술 소개\ndate: \"2024-03-01\"\n---\nTECH BODY",
        );
        write(
            &content,
            "ko/life/intro.md",
            "---\ntitle: 일상 소개\ndate: \"2024-03-02\"\n---\nLIFE BODY",
        );
        let index = ContentIndex::build(
            ContentScanner::new(&blog.content_dir, &blog.config),
            blog.config.preview_length,
        );
        let text = render_llms_full(&blog.config, &index, Utc::now());

        assert_eq!(text.matches("TECH BODY").count(), 1);
        assert_eq!(text.matches("LIFE BODY").count(), 1);
        let life = &text[text.find("## 일상 소개").unwrap()..];
        let life = &life[..life.find("\n---\n").unwrap()];
        assert!(life.contains("LIFE BODY"));
    }

    #[test]
    fn test_generate_writes_file() {
        let (_dir, blog) = site();
        let index = ContentIndex::build(
            ContentScanner::new(&blog.content_dir, &blog.config),
            blog.config.preview_length,
        );
        let generator = Generator::new(&blog);
        let path = generator.generate(&index).unwrap();
        assert_eq!(path, blog.public_dir.join("llms-full.txt"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("Hello world"));
    }
}
