//! List site content

use anyhow::Result;
use std::fmt::Write as _;

use crate::content::{to_plain_text, ContentIndex, Post};
use crate::i18n::Language;
use crate::Blog;

/// Optional filters for post listings
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub tag: Option<String>,
    pub section: Option<String>,
    pub category: Option<String>,
}

impl PostFilter {
    fn apply<'a>(&self, index: &'a ContentIndex, lang: Language) -> Vec<&'a Post> {
        index
            .posts_by_tag(lang, self.tag.as_deref())
            .into_iter()
            .filter(|p| self.section.is_none() || p.section == self.section)
            .filter(|p| self.category.is_none() || p.category == self.category)
            .collect()
    }
}

/// List site content by type
pub fn run(
    blog: &Blog,
    content_type: &str,
    lang: Language,
    filter: &PostFilter,
    json: bool,
) -> Result<()> {
    let index = blog.build_index();
    let output = render(&index, content_type, lang, filter, json)?;
    print!("{}", output);
    Ok(())
}

/// Render a listing as text or JSON
pub fn render(
    index: &ContentIndex,
    content_type: &str,
    lang: Language,
    filter: &PostFilter,
    json: bool,
) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = filter.apply(index, lang);
            if json {
                out = serde_json::to_string_pretty(&posts)?;
                out.push('\n');
            } else {
                writeln!(out, "Posts ({}):", posts.len())?;
                for post in posts {
                    let location = match &post.category {
                        Some(category) => format!("{}/{}", category, post.id),
                        None => post.id.clone(),
                    };
                    write!(out, "  {} - {} [{}]", post.date, post.title, location)?;
                    if let Some(translation) = index.translation_of(post) {
                        write!(out, " <-> {}:{}", translation.lang, translation.id)?;
                    }
                    out.push('\n');
                    let preview = to_plain_text(&post.preview).replace('\n', " ");
                    if !preview.is_empty() {
                        writeln!(out, "      {}", preview)?;
                    }
                }
            }
        }
        "tag" | "tags" => {
            let tags = if filter.section.is_some() || filter.category.is_some() {
                ContentIndex::tags_by_posts(filter.apply(index, lang))
            } else {
                index.all_tags(lang)
            };
            if json {
                out = serde_json::to_string_pretty(&tags)?;
                out.push('\n');
            } else {
                writeln!(out, "Tags ({}):", tags.len().saturating_sub(1))?;
                for tag in tags {
                    writeln!(out, "  {} ({})", tag.name, tag.count)?;
                }
            }
        }
        "category" | "categories" => {
            let categories = index.category_infos(lang);
            if json {
                out = serde_json::to_string_pretty(categories)?;
                out.push('\n');
            } else {
                writeln!(out, "Categories ({}):", categories.len())?;
                for category in categories {
                    writeln!(
                        out,
                        "  {} - {} ({})",
                        category.id,
                        category.name,
                        lang.posts_count(category.number_of_posts)
                    )?;
                }
            }
        }
        "section" | "sections" => {
            let sections = index.all_sections(lang);
            if json {
                out = serde_json::to_string_pretty(&sections)?;
                out.push('\n');
            } else {
                writeln!(out, "Sections ({}):", sections.len())?;
                for section in sections {
                    let count = index.posts_by_section(lang, Some(&section)).len();
                    writeln!(out, "  {} ({})", section, count)?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category, section",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentScanner;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn index() -> (TempDir, ContentIndex) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/tech/_info.md", "---\nname: Tech\n---\n");
        write(
            dir.path(),
            "en/tech/a.md",
            "---\ntitle: A\ndate: \"2024-02-01\"\ntags: rust, cli\nsection: tools\n---\nSome **bold** text",
        );
        write(
            dir.path(),
            "en/b.md",
            "---\ntitle: B\ndate: \"2024-01-01\"\ntags: rust\n---\nPlain",
        );
        let index = ContentIndex::build(
            ContentScanner::new(dir.path(), &SiteConfig::default()),
            140,
        );
        (dir, index)
    }

    #[test]
    fn test_list_posts() {
        let (_dir, index) = index();
        let out = render(&index, "post", Language::En, &PostFilter::default(), false).unwrap();
        assert!(out.starts_with("Posts (2):\n"));
        assert!(out.contains("  2024-02-01 - A [tech/a]\n      Some bold text\n"));
        assert!(out.contains("  2024-01-01 - B [b]\n"));
    }

    #[test]
    fn test_list_posts_filtered() {
        let (_dir, index) = index();
        let filter = PostFilter {
            tag: Some("cli".to_string()),
            ..Default::default()
        };
        let out = render(&index, "posts", Language::En, &filter, false).unwrap();
        assert!(out.starts_with("Posts (1):\n"));

        let filter = PostFilter {
            category: Some("tech".to_string()),
            ..Default::default()
        };
        let out = render(&index, "posts", Language::En, &filter, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "a");
    }

    #[test]
    fn test_list_tags_and_sections() {
        let (_dir, index) = index();
        let out = render(&index, "tag", Language::En, &PostFilter::default(), false).unwrap();
        assert_eq!(out, "Tags (2):\n  All (2)\n  rust (2)\n  cli (1)\n");

        let out = render(&index, "section", Language::En, &PostFilter::default(), false).unwrap();
        assert_eq!(out, "Sections (1):\n  tools (1)\n");
    }

    #[test]
    fn test_list_categories() {
        let (_dir, index) = index();
        let out = render(&index, "category", Language::En, &PostFilter::default(), false).unwrap();
        assert_eq!(out, "Categories (1):\n  tech - Tech (1 post)\n");
    }

    #[test]
    fn test_unknown_type() {
        let (_dir, index) = index();
        assert!(render(&index, "page", Language::En, &PostFilter::default(), false).is_err());
    }
}
