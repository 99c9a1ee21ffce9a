//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::i18n::Language;

/// Characters escaped inside a single path segment (RFC 3986 unreserved are kept)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Absolute URL of a language's home page
pub fn lang_url(config: &SiteConfig, lang: Language) -> String {
    format!("{}/{}", config.base_url(), lang.code())
}

/// Absolute URL of a post page
pub fn post_url(config: &SiteConfig, lang: Language, id: &str) -> String {
    format!("{}/{}", lang_url(config, lang), encode_segment(id))
}

/// Absolute URL of a site-level file such as `llms.txt`
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}/{}", config.base_url(), path.trim_start_matches('/'))
}
