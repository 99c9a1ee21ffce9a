//! Content module - scans, parses and indexes posts and categories

pub mod audit;
mod faq;
mod frontmatter;
mod index;
pub mod loader;
mod markdown;
mod post;
pub mod scanner;

pub use faq::extract_faqs;
pub use frontmatter::FrontMatter;
pub use index::{ContentIndex, ALL_TAG};
pub use markdown::to_plain_text;
pub use post::{preview, split_tags, Category, Faq, Post, Tag, TAG_SEPARATOR};
pub use scanner::{ContentScanner, PostFile};
