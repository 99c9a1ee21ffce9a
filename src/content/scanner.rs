//! Content scanner - discovers categories and post files on disk
//!
//! Layout:
//!
//! ```text
//! <root>/<lang>/<category>/_info.md
//! <root>/<lang>/<category>/<slug>.md
//! <root>/<lang>/<slug>.md
//! ```

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::SiteConfig;
use crate::i18n::Language;

/// A markdown file that qualifies as a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    /// Filename without the `.md` extension
    pub id: String,
    /// Containing category, `None` for files directly under the language root
    pub category: Option<String>,
    pub path: PathBuf,
}

/// Walks the content directory. Missing directories yield empty results.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    root: PathBuf,
    info_file: String,
    exclude: Vec<Pattern>,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(root: P, config: &SiteConfig) -> Self {
        let exclude = config
            .exclude_files
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("Invalid exclude pattern {:?} ({}), matching literally", p, e);
                    Pattern::new(&Pattern::escape(p)).ok()
                }
            })
            .collect();

        Self {
            root: root.as_ref().to_path_buf(),
            info_file: config.category_info_file.clone(),
            exclude,
        }
    }

    /// Content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lang_dir(&self, lang: Language) -> PathBuf {
        self.root.join(lang.code())
    }

    pub fn category_dir(&self, lang: Language, category: &str) -> PathBuf {
        self.lang_dir(lang).join(category)
    }

    /// Path of a category's reserved metadata file
    pub fn category_info_path(&self, lang: Language, category: &str) -> PathBuf {
        self.category_dir(lang, category).join(&self.info_file)
    }

    /// Category directory names of a language, sorted by name.
    ///
    /// Entries starting with `.` or `_` and plain files are skipped.
    pub fn category_names(&self, lang: Language) -> Vec<String> {
        list_dir(&self.lang_dir(lang))
            .into_iter()
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| !name.starts_with('.') && !name.starts_with('_'))
            .collect()
    }

    /// All post files of a language: categories first, then loose files
    pub fn post_files(&self, lang: Language) -> Vec<PostFile> {
        let mut files = Vec::new();
        for category in self.category_names(lang) {
            files.extend(self.category_post_files(lang, &category));
        }
        files.extend(self.markdown_files(&self.lang_dir(lang), None));
        files
    }

    /// Post files inside one category directory
    pub fn category_post_files(&self, lang: Language, category: &str) -> Vec<PostFile> {
        self.markdown_files(
            &self.category_dir(lang, category),
            Some(category.to_string()),
        )
    }

    /// Whether a file name is on the exclusion list
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(file_name))
    }

    fn markdown_files(&self, dir: &Path, category: Option<String>) -> Vec<PostFile> {
        list_dir(dir)
            .into_iter()
            .filter(|entry| !entry.file_type().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                let id = name.strip_suffix(".md")?;
                if self.is_excluded(name) {
                    return None;
                }
                Some(PostFile {
                    id: id.to_string(),
                    category: category.clone(),
                    path: entry.path().to_path_buf(),
                })
            })
            .collect()
    }
}

/// Direct children of `dir`, sorted by file name. Missing dir → empty.
fn list_dir(dir: &Path) -> Vec<DirEntry> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                None
            }
        })
        .collect()
}
