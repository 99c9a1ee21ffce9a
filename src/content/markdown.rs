//! Markdown to plain text conversion

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown syntax, keeping readable text.
///
/// Block elements are separated by newlines, inline code keeps its text,
/// images keep their alt text and raw HTML is dropped.
pub fn to_plain_text(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut text = String::new();
    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::Start(Tag::Item) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::CodeBlock)
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::TableRow)
            | Event::End(TagEnd::TableHead) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Event::End(TagEnd::TableCell) => text.push(' '),
            _ => {}
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_inline_markup() {
        assert_eq!(
            to_plain_text("Use **`@Transactional`** on [services](https://x.y)."),
            "Use @Transactional on services."
        );
    }

    #[test]
    fn test_blocks_become_lines() {
        let md = "# Title\n\nFirst paragraph\ncontinues.\n\n- one\n- two\n";
        assert_eq!(to_plain_text(md), "Title\nFirst paragraph continues.\none\ntwo");
    }

    #[test]
    fn test_drops_html() {
        assert_eq!(to_plain_text("<div>hi</div>\n\ntext"), "text");
    }
}
