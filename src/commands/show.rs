//! Show a single post with its translation link and FAQ

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use crate::content::{extract_faqs, ContentIndex, Faq, Post};
use crate::helpers::post_url;
use crate::i18n::Language;
use crate::Blog;

/// Everything a post page is rendered from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail<'a> {
    pub post: &'a Post,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<&'a Post>,
    pub faqs: Vec<Faq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Collect a post's detail; `None` when the id does not exist
pub fn detail<'a>(
    blog: &Blog,
    index: &'a ContentIndex,
    lang: Language,
    id: &str,
    with_body: bool,
) -> Option<PostDetail<'a>> {
    let post = index.post_by_id(lang, id)?;
    let body = index.post_detail_by_id(lang, id);

    Some(PostDetail {
        post,
        url: post_url(&blog.config, lang, &post.id),
        translation: index.translation_of(post),
        faqs: extract_faqs(&body),
        body: with_body.then_some(body),
    })
}

pub fn run(blog: &Blog, lang: Language, id: &str, with_body: bool, json: bool) -> Result<()> {
    let index = blog.build_index();
    let Some(detail) = detail(blog, &index, lang, id, with_body) else {
        anyhow::bail!("No {} post with id {:?}", lang, id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", render(&detail)?);
    }
    Ok(())
}

fn render(detail: &PostDetail<'_>) -> Result<String> {
    let post = detail.post;
    let mut out = String::new();

    writeln!(out, "{}", post.title)?;
    writeln!(out, "  url:      {}", detail.url)?;
    writeln!(out, "  date:     {}", post.date)?;
    if let Some(category) = &post.category {
        writeln!(out, "  category: {}", category)?;
    }
    let tags = post.tag_list();
    if !tags.is_empty() {
        writeln!(out, "  tags:     {}", tags.join(", "))?;
    }
    if let Some(section) = &post.section {
        writeln!(out, "  section:  {}", section)?;
    }
    match detail.translation {
        Some(translation) => writeln!(
            out,
            "  translation: {} ({}:{})",
            translation.title, translation.lang, translation.id
        )?,
        None => writeln!(out, "  translation: none")?,
    }

    if !detail.faqs.is_empty() {
        writeln!(out, "\nFAQ ({}):", detail.faqs.len())?;
        for faq in &detail.faqs {
            writeln!(out, "  Q: {}", faq.question)?;
            writeln!(out, "  A: {}", faq.answer)?;
        }
    }

    if let Some(body) = &detail.body {
        writeln!(out, "\n{}", body)?;
    }

    Ok(out)
}
