//! Content consistency report
//!
//! The index itself never rejects content. This module reports the things it
//! silently degrades on, so authors can fix them before publishing.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::ContentIndex;
use crate::helpers::parse_date;
use crate::i18n::Language;

/// What is wrong with a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IssueKind {
    /// Post has no `title`; its id is shown instead
    MissingTitle,
    /// Post has no `date`; it sorts after every dated post
    MissingDate,
    /// `date` is not in a recognised format
    UnparseableDate { date: String },
    /// `translationSlug` names no post in the other language
    DanglingTranslation { slug: String },
    /// Same id in more than one place of one language
    DuplicateId { categories: Vec<String> },
    /// Directory looks like a category but has no info file
    CategoryWithoutInfo,
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub lang: Language,
    /// Post id, or category id for category issues
    pub id: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.lang, self.id)?;
        match &self.kind {
            IssueKind::MissingTitle => write!(f, "missing title"),
            IssueKind::MissingDate => write!(f, "missing date"),
            IssueKind::UnparseableDate { date } => write!(f, "unrecognised date {:?}", date),
            IssueKind::DanglingTranslation { slug } => write!(
                f,
                "translationSlug {:?} not found in {}",
                slug,
                self.lang.other()
            ),
            IssueKind::DuplicateId { categories } => {
                write!(f, "id used more than once ({})", categories.join(", "))
            }
            IssueKind::CategoryWithoutInfo => write!(f, "category directory without info file"),
        }
    }
}

/// Check every language of the index
pub fn audit(index: &ContentIndex) -> Vec<Issue> {
    let mut issues = Vec::new();
    for lang in Language::ALL {
        audit_posts(index, lang, &mut issues);
        audit_categories(index, lang, &mut issues);
    }
    issues
}

fn audit_posts(index: &ContentIndex, lang: Language, issues: &mut Vec<Issue>) {
    let mut locations: HashMap<&str, Vec<String>> = HashMap::new();

    for post in index.sorted_posts(lang) {
        let mut report = |kind| {
            issues.push(Issue {
                lang,
                id: post.id.clone(),
                kind,
            })
        };

        if post.untitled {
            report(IssueKind::MissingTitle);
        }

        if post.date.trim().is_empty() {
            report(IssueKind::MissingDate);
        } else if parse_date(&post.date).is_none() {
            report(IssueKind::UnparseableDate {
                date: post.date.clone(),
            });
        }

        if let Some(slug) = &post.translation_slug {
            if index.translation_of(post).is_none() {
                report(IssueKind::DanglingTranslation { slug: slug.clone() });
            }
        }

        locations
            .entry(post.id.as_str())
            .or_default()
            .push(post.category.clone().unwrap_or_else(|| "/".to_string()));
    }

    let mut duplicates: Vec<_> = locations
        .into_iter()
        .filter(|(_, categories)| categories.len() > 1)
        .collect();
    duplicates.sort();
    for (id, mut categories) in duplicates {
        categories.sort();
        issues.push(Issue {
            lang,
            id: id.to_string(),
            kind: IssueKind::DuplicateId { categories },
        });
    }
}

fn audit_categories(index: &ContentIndex, lang: Language, issues: &mut Vec<Issue>) {
    for name in index.scanner().category_names(lang) {
        if index.category_info_by_id(lang, &name).is_none() {
            issues.push(Issue {
                lang,
                id: name,
                kind: IssueKind::CategoryWithoutInfo,
            });
        }
    }
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

    #[test]
    fn test_clean_site_has_no_issues() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ko/tech/_info.md", "---\nname: Tech\n---\n");
        write(
            dir.path(),
            "ko/tech/a.md",
            "---\ntitle: A\ndate: \"2024-01-01\"\ntranslationSlug: a\n---\n",
        );
        write(dir.path(), "en/a.md", "---\ntitle: A\ndate: \"2024-01-02\"\n---\n");

        let index = ContentIndex::build(
            ContentScanner::new(dir.path(), &SiteConfig::default()),
            140,
        );
        assert!(audit(&index).is_empty());
    }

    #[test]
    fn test_reports_problems() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ko/tech/a.md", "---\ntitle: A\ndate: \"sometime\"\n---\n");
        write(dir.path(), "ko/a.md", "---\ntitle: A\ntranslationSlug: gone\n---\n");

        let index = ContentIndex::build(
            ContentScanner::new(dir.path(), &SiteConfig::default()),
            140,
        );
        let issues = audit(&index);
        let kinds: Vec<_> = issues.iter().map(|i| &i.kind).collect();

        assert!(kinds.contains(&&IssueKind::UnparseableDate {
            date: "sometime".to_string()
        }));
        assert!(kinds.contains(&&IssueKind::MissingDate));
        assert!(kinds.contains(&&IssueKind::DanglingTranslation {
            slug: "gone".to_string()
        }));
        assert!(kinds.contains(&&IssueKind::DuplicateId {
            categories: vec!["/".to_string(), "tech".to_string()]
        }));
        assert!(kinds.contains(&&IssueKind::CategoryWithoutInfo));
        assert_eq!(issues.len(), 5);
    }

    #[test]
    fn test_reports_missing_title() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/untitled.md", "---\ndate: \"2024-01-01\"\n---\nbody");
        write(dir.path(), "en/blank.md", "---\ntitle: \"  \"\ndate: \"2024-01-02\"\n---\nbody");

        let index = ContentIndex::build(
            ContentScanner::new(dir.path(), &SiteConfig::default()),
            140,
        );
        let issues = audit(&index);
        let ids: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::MissingTitle)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["blank", "untitled"]);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].to_string(), "[en] blank: missing title");
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue {
            lang: Language::Ko,
            id: "a".to_string(),
            kind: IssueKind::DanglingTranslation {
                slug: "b".to_string(),
            },
        };
        assert_eq!(issue.to_string(), "[ko] a: translationSlug \"b\" not found in en");
    }
}
