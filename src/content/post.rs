//! Post, category and tag models

use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;
use crate::i18n::Language;

/// Separator between tags in the `tags` front-matter field
pub const TAG_SEPARATOR: &str = ", ";

/// A blog post as indexed at build time. The body is not kept here; it is
/// read on demand by [`ContentIndex::post_detail_by_id`](super::ContentIndex::post_detail_by_id).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Filename stem, unique within (lang, category)
    pub id: String,

    pub lang: Language,

    /// Category directory, `None` for loose files under the language root
    pub category: Option<String>,

    /// Post title (falls back to the id)
    pub title: String,

    /// Whether the front-matter had no usable title
    #[serde(skip)]
    pub untitled: bool,

    /// Publication date as written in the front-matter, empty when missing
    pub date: String,

    /// Raw `", "`-delimited tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,

    /// Id of the same post in the other language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_slug: Option<String>,

    /// Leading characters of the raw markdown body
    pub preview: String,

    /// Full source file path
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Build a post from its parsed front-matter and body
    pub fn from_parts(
        id: String,
        lang: Language,
        category: Option<String>,
        fm: FrontMatter,
        body: &str,
        preview_length: usize,
        source: PathBuf,
    ) -> Self {
        let title = fm.title.filter(|t| !t.trim().is_empty());
        Self {
            untitled: title.is_none(),
            title: title.unwrap_or_else(|| id.clone()),
            id,
            lang,
            category,
            date: fm.date.unwrap_or_default(),
            tags: fm.tags,
            section: fm.section,
            thumbnail: fm.thumbnail,
            description: fm.description,
            search_keywords: fm.search_keywords,
            translation_slug: fm.translation_slug,
            preview: preview(body, preview_length),
            source,
        }
    }

    /// Individual tags, in the order they were written
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(self.tags.as_deref())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list().contains(&tag)
    }
}

/// Split a raw tag string, skipping empty fragments
pub fn split_tags(tags: Option<&str>) -> Vec<&str> {
    tags.map(|t| {
        t.split(TAG_SEPARATOR)
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// First `length` characters of `body`
pub fn preview(body: &str, length: usize) -> String {
    body.chars().take(length).collect()
}

/// A category directory with its `_info.md` metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Directory name
    pub id: String,
    pub lang: Language,
    /// Display name (falls back to the id)
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub number_of_posts: usize,
}

impl Category {
    pub fn from_info(id: String, lang: Language, fm: FrontMatter, number_of_posts: usize) -> Self {
        Self {
            name: fm.name.or(fm.title).unwrap_or_else(|| id.clone()),
            id,
            lang,
            description: fm.description,
            thumbnail: fm.thumbnail,
            number_of_posts,
        }
    }
}

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// A question/answer pair found in a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("Hello world", 140), "Hello world");
        assert_eq!(preview("안녕하세요", 2), "안녕");
        let long = "x".repeat(200);
        assert_eq!(preview(&long, 140).len(), 140);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(Some("a, b, c")), vec!["a", "b", "c"]);
        assert_eq!(split_tags(Some("")), Vec::<&str>::new());
        assert_eq!(split_tags(None), Vec::<&str>::new());
        // Only ", " separates tags
        assert_eq!(split_tags(Some("a,b")), vec!["a,b"]);
    }

    #[test]
    fn test_post_from_parts_defaults() {
        let post = Post::from_parts(
            "hello".to_string(),
            Language::En,
            None,
            FrontMatter::default(),
            "body",
            140,
            PathBuf::from("en/hello.md"),
        );
        assert_eq!(post.title, "hello");
        assert!(post.untitled);
        assert_eq!(post.date, "");
        assert!(post.tag_list().is_empty());
        assert_eq!(post.preview, "body");
    }

    #[test]
    fn test_serialize_camel_case() {
        let fm = FrontMatter {
            title: Some("T".to_string()),
            translation_slug: Some("t-en".to_string()),
            ..Default::default()
        };
        let post = Post::from_parts(
            "t".to_string(),
            Language::Ko,
            Some("tech".to_string()),
            fm,
            "",
            140,
            PathBuf::new(),
        );
        assert!(!post.untitled);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["translationSlug"], "t-en");
        assert_eq!(json["lang"], "ko");
        assert!(json.get("source").is_none());
        assert!(json.get("untitled").is_none());
        assert!(json.get("section").is_none());
    }
}
