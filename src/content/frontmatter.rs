//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts any YAML scalar and keeps it as a string
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| scalar_to_string(&v)))
}

/// Accepts a `", "`-delimited string or a list of scalars
fn tag_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::Sequence(items)) => {
            let tags: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
            if tags.is_empty() {
                None
            } else {
                Some(tags.join(", "))
            }
        }
        Some(other) => scalar_to_string(&other),
        None => None,
    })
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

/// Front-matter of a post or of a category `_info.md` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "tag_string", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub translation_slug: Option<String>,
    /// Display name, only meaningful for category info files
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FrontMatter {
    /// Split content into front-matter and body.
    ///
    /// Never fails: content without a complete, valid `---` block comes back
    /// as default front-matter plus the whole input as body.
    pub fn parse(content: &str) -> (Self, &str) {
        match Self::split(content) {
            Some((yaml, body)) => {
                if yaml.trim().is_empty() {
                    return (FrontMatter::default(), body);
                }
                match serde_yaml::from_str::<FrontMatter>(yaml) {
                    Ok(fm) => (fm, body),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to parse YAML front-matter, treating as content: {}",
                            e
                        );
                        (FrontMatter::default(), content)
                    }
                }
            }
            None => (FrontMatter::default(), content),
        }
    }

    /// Locate the `---` delimited block; returns (yaml, body)
    fn split(content: &str) -> Option<(&str, &str)> {
        let text = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut lines = LineSpans::new(text);
        let (first, _, after_first) = lines.next()?;
        if first.trim_end() != "---" {
            return None;
        }

        for (line, start, end) in lines {
            if line.trim_end() == "---" {
                return Some((&text[after_first..start], &text[end..]));
            }
        }

        None
    }

    /// Whether no field was set
    pub fn is_empty(&self) -> bool {
        *self == FrontMatter::default()
    }
}

/// Iterator over (line without terminator, start offset, offset past the terminator)
struct LineSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineSpans<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (&'a str, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.text[start..];
        let (line, consumed) = match rest.find('\n') {
            Some(i) => (rest[..i].trim_end_matches('\r'), i + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some((line, start, self.pos))
    }
}
