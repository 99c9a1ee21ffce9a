//! Content loader - parses post files and category metadata into models

use std::fs;
use std::path::Path;

use super::scanner::{ContentScanner, PostFile};
use super::{Category, FrontMatter, Post};
use crate::helpers::newest_first;
use crate::i18n::Language;

/// Load every post of a language, newest first.
///
/// Files that cannot be read are skipped with a warning. Posts with equal
/// dates keep the scanner's order.
pub fn load_sorted_posts(scanner: &ContentScanner, lang: Language, preview_length: usize) -> Vec<Post> {
    let mut posts: Vec<Post> = scanner
        .post_files(lang)
        .into_iter()
        .filter_map(|file| load_post(&file, lang, preview_length))
        .collect();

    sort_newest_first(&mut posts);

    tracing::debug!("Loaded {} {} posts", posts.len(), lang);
    posts
}

/// Stable sort by date, newest first
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| newest_first(&a.date, &b.date));
}

/// Load a single post file
pub fn load_post(file: &PostFile, lang: Language, preview_length: usize) -> Option<Post> {
    let content = match fs::read_to_string(&file.path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to load post {:?}: {}", file.path, e);
            return None;
        }
    };

    let (fm, body) = FrontMatter::parse(&content);
    tracing::debug!("Loaded post {:?}", file.path);

    Some(Post::from_parts(
        file.id.clone(),
        lang,
        file.category.clone(),
        fm,
        body,
        preview_length,
        file.path.clone(),
    ))
}

/// Read a post file and return only its markdown body
pub fn load_body(file: &PostFile) -> Option<String> {
    load_body_at(&file.path)
}

/// Markdown body of the file at `path`
pub fn load_body_at(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (_, body) = FrontMatter::parse(&content);
            Some(body.to_string())
        }
        Err(e) => {
            tracing::warn!("Failed to read post body {:?}: {}", path, e);
            None
        }
    }
}

/// Load the categories of a language.
///
/// A directory without the reserved info file is not a category and is
/// left out without any warning.
pub fn load_category_infos(scanner: &ContentScanner, lang: Language) -> Vec<Category> {
    scanner
        .category_names(lang)
        .into_iter()
        .filter_map(|id| {
            let info_path = scanner.category_info_path(lang, &id);
            if !info_path.is_file() {
                return None;
            }

            let fm = match fs::read_to_string(&info_path) {
                Ok(content) => FrontMatter::parse(&content).0,
                Err(e) => {
                    tracing::warn!("Failed to read category info {:?}: {}", info_path, e);
                    return None;
                }
            };

            let number_of_posts = scanner.category_post_files(lang, &id).len();
            Some(Category::from_info(id, lang, fm, number_of_posts))
        })
        .collect()
}
