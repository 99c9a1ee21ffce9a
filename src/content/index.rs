//! In-memory content index and its read-only queries

use indexmap::IndexMap;
use std::collections::HashMap;

use super::loader::{self, load_category_infos, load_sorted_posts};
use super::scanner::ContentScanner;
use super::{Category, Post, Tag};
use crate::i18n::Language;

/// Name of the synthetic tag returned by [`ContentIndex::tags_by_posts`]
pub const ALL_TAG: &str = "All";

/// Posts and categories of both languages, built once and never mutated
#[derive(Debug, Clone)]
pub struct ContentIndex {
    scanner: ContentScanner,
    posts: HashMap<Language, Vec<Post>>,
    categories: HashMap<Language, Vec<Category>>,
}

impl ContentIndex {
    /// Scan and parse the content tree for every language
    pub fn build(scanner: ContentScanner, preview_length: usize) -> Self {
        let mut posts = HashMap::new();
        let mut categories = HashMap::new();

        for lang in Language::ALL {
            posts.insert(lang, load_sorted_posts(&scanner, lang, preview_length));
            categories.insert(lang, load_category_infos(&scanner, lang));
        }

        let index = Self {
            scanner,
            posts,
            categories,
        };
        tracing::info!(
            "Indexed {} ko / {} en posts from {:?}",
            index.sorted_posts(Language::Ko).len(),
            index.sorted_posts(Language::En).len(),
            index.scanner.root()
        );
        index
    }

    pub fn scanner(&self) -> &ContentScanner {
        &self.scanner
    }

    /// All posts of a language, newest first
    pub fn sorted_posts(&self, lang: Language) -> &[Post] {
        self.posts.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn post_by_id(&self, lang: Language, id: &str) -> Option<&Post> {
        self.sorted_posts(lang).iter().find(|p| p.id == id)
    }

    /// Markdown body of a post, read from disk on each call.
    ///
    /// Empty when no file with that id exists. When the id exists in more
    /// than one category, the first in scan order wins.
    pub fn post_detail_by_id(&self, lang: Language, id: &str) -> String {
        self.scanner
            .post_files(lang)
            .into_iter()
            .find(|file| file.id == id)
            .and_then(|file| loader::load_body(&file))
            .unwrap_or_default()
    }

    /// Tag cloud for a language, led by the language's "all" entry
    pub fn all_tags(&self, lang: Language) -> Vec<Tag> {
        count_tags(self.sorted_posts(lang), lang.all_tag_label())
    }

    /// Tag cloud for an already filtered list of posts
    pub fn tags_by_posts<'a, I>(posts: I) -> Vec<Tag>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        count_tags(posts, ALL_TAG)
    }

    /// Posts with exactly this section; `None` means no filter
    pub fn posts_by_section(&self, lang: Language, section: Option<&str>) -> Vec<&Post> {
        let posts = self.sorted_posts(lang).iter();
        match section {
            Some(section) => posts
                .filter(|p| p.section.as_deref() == Some(section))
                .collect(),
            None => posts.collect(),
        }
    }

    /// Distinct sections in order of first appearance
    pub fn all_sections(&self, lang: Language) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        for section in self.sorted_posts(lang).iter().filter_map(|p| p.section.as_ref()) {
            if !section.is_empty() && !sections.contains(section) {
                sections.push(section.clone());
            }
        }
        sections
    }

    /// Posts carrying a tag. `None` or an "all" label means no filter.
    pub fn posts_by_tag(&self, lang: Language, tag: Option<&str>) -> Vec<&Post> {
        let posts = self.sorted_posts(lang).iter();
        match tag {
            Some(tag) if tag != ALL_TAG && tag != lang.all_tag_label() => {
                posts.filter(|p| p.has_tag(tag)).collect()
            }
            _ => posts.collect(),
        }
    }

    pub fn category_infos(&self, lang: Language) -> &[Category] {
        self.categories.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn category_info_by_id(&self, lang: Language, id: &str) -> Option<&Category> {
        self.category_infos(lang).iter().find(|c| c.id == id)
    }

    /// Posts of one category directory, newest first
    pub fn posts_by_category_id(&self, lang: Language, id: &str) -> Vec<&Post> {
        self.sorted_posts(lang)
            .iter()
            .filter(|p| p.category.as_deref() == Some(id))
            .collect()
    }

    /// The post in the other language named by `translationSlug`, if any
    pub fn translation_of(&self, post: &Post) -> Option<&Post> {
        let slug = post.translation_slug.as_deref()?;
        self.post_by_id(post.lang.other(), slug)
    }
}

/// Tally tags per post, prepend the synthetic entry, sort by count desc.
///
/// A tag is counted once per post, so no tag can outnumber the synthetic
/// entry. Ties keep first-seen order.
fn count_tags<'a, I>(posts: I, all_label: &str) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut total = 0;
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for post in posts {
        total += 1;
        // Once per post, so the synthetic entry's total is an upper bound
        // for every count and it sorts first.
        let mut seen: Vec<&str> = Vec::new();
        for tag in post.tag_list() {
            if seen.contains(&tag) {
                continue;
            }
            seen.push(tag);
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut tags = Vec::with_capacity(counts.len() + 1);
    tags.push(Tag::new(all_label, total));
    tags.extend(counts.into_iter().map(|(name, count)| Tag::new(name, count)));
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}
