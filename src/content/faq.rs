//! FAQ extraction from post bodies
//!
//! Two layouts are recognised:
//!
//! ```markdown
//! ## FAQ
//! ### What is a transaction?
//! A unit of work.
//!
//! **Q: Is it thread-safe?**
//! A: Only within one thread.
//! ```
//!
//! Headings nested under a heading that mentions `FAQ` (or `자주 묻는 질문`)
//! are questions, the text below them is the answer. Anywhere in the body, a
//! `Q:` line followed by an `A:` line is a pair as well.

use lazy_static::lazy_static;
use regex::Regex;

use super::markdown::to_plain_text;
use super::Faq;

lazy_static! {
    static ref HEADING: Regex =
        Regex::new(r"^\s{0,3}(#{1,6})\s+(.*?)(?:\s+#+)?\s*$").expect("valid heading regex");
    static ref FAQ_TITLE: Regex =
        Regex::new(r"(?i)\bfaqs?\b|자주\s*묻는\s*질문").expect("valid faq regex");
    static ref QUESTION: Regex = Regex::new(
        r"^\s*(?:\*\*|__)?Q\d*\s*[:.]\s*(?:\*\*|__)?\s*(.*?)\s*(?:\*\*|__)?\s*$"
    )
    .expect("valid question regex");
    static ref ANSWER: Regex =
        Regex::new(r"^\s*(?:\*\*|__)?A\d*\s*[:.]\s*(?:\*\*|__)?\s*(.*)$").expect("valid answer regex");
    static ref FENCE: Regex = Regex::new(r"^\s{0,3}(```|~~~)").expect("valid fence regex");
}

enum Pending<'a> {
    Nothing,
    /// Question taken from a heading inside an FAQ section
    Heading { question: &'a str, answer: Vec<&'a str> },
    /// `Q:` line, answer starts at the first `A:` line
    Inline {
        question: &'a str,
        answer: Option<Vec<&'a str>>,
    },
}

struct Extractor<'a> {
    faqs: Vec<Faq>,
    pending: Pending<'a>,
    faq_level: Option<usize>,
}

impl<'a> Extractor<'a> {
    fn finish(&mut self) {
        let pending = std::mem::replace(&mut self.pending, Pending::Nothing);
        let (question, answer) = match pending {
            Pending::Nothing => return,
            Pending::Heading { question, answer } => (question, answer),
            Pending::Inline {
                question,
                answer: Some(answer),
            } => (question, answer),
            Pending::Inline { answer: None, .. } => return,
        };

        let question = to_plain_text(question);
        let answer = to_plain_text(&answer.join("\n"));
        if !question.is_empty() && !answer.is_empty() {
            self.faqs.push(Faq { question, answer });
        }
    }

    fn heading(&mut self, level: usize, text: &'a str) {
        self.finish();

        match self.faq_level {
            Some(faq_level) if level > faq_level => {
                self.pending = Pending::Heading {
                    question: text,
                    answer: Vec::new(),
                };
                return;
            }
            Some(_) => self.faq_level = None,
            None => {}
        }

        if FAQ_TITLE.is_match(text) {
            self.faq_level = Some(level);
        }
    }

    fn line(&mut self, line: &'a str) {
        if let Some(caps) = QUESTION.captures(line) {
            self.finish();
            self.pending = Pending::Inline {
                question: caps.get(1).map_or("", |m| m.as_str()),
                answer: None,
            };
            return;
        }

        let blank = line.trim().is_empty();
        match &mut self.pending {
            Pending::Nothing => {}
            Pending::Heading { answer, .. } => answer.push(line),
            Pending::Inline {
                answer: slot @ None,
                ..
            } => {
                if let Some(caps) = ANSWER.captures(line) {
                    *slot = Some(vec![caps.get(1).map_or("", |m| m.as_str())]);
                } else if !blank {
                    // Something other than an answer follows the question
                    self.pending = Pending::Nothing;
                }
            }
            Pending::Inline {
                answer: Some(answer),
                ..
            } => {
                if !blank {
                    answer.push(line);
                    return;
                }
                self.finish();
            }
        }
    }

    fn code_line(&mut self, line: &'a str) {
        match &mut self.pending {
            Pending::Heading { answer, .. }
            | Pending::Inline {
                answer: Some(answer),
                ..
            } => answer.push(line),
            _ => {}
        }
    }
}

/// Extract question/answer pairs from a markdown body, in document order
pub fn extract_faqs(body: &str) -> Vec<Faq> {
    let mut extractor = Extractor {
        faqs: Vec::new(),
        pending: Pending::Nothing,
        faq_level: None,
    };
    let mut in_fence = false;

    for line in body.lines() {
        if FENCE.is_match(line) {
            in_fence = !in_fence;
            extractor.code_line(line);
            continue;
        }
        if in_fence {
            extractor.code_line(line);
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len());
            let text = caps.get(2).map_or("", |m| m.as_str());
            extractor.heading(level, text);
        } else {
            extractor.line(line);
        }
    }

    extractor.finish();
    extractor.faqs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(faqs: &[Faq]) -> Vec<(&str, &str)> {
        faqs.iter()
            .map(|f| (f.question.as_str(), f.answer.as_str()))
            .collect()
    }

    #[test]
    fn test_no_faq() {
        assert!(extract_faqs("# Title\n\nJust a post about queues.").is_empty());
        assert!(extract_faqs("").is_empty());
    }

    #[test]
    fn test_heading_section() {
        let body = r#"# Transactions

Intro text.

## FAQ

### What is propagation?

How a transaction joins an **outer** one.

### Is rollback automatic?

Only for unchecked exceptions.
Checked ones commit.

## Conclusion

### Not a question
Done.
"#;
        let faqs = extract_faqs(body);
        assert_eq!(
            pairs(&faqs),
            vec![
                ("What is propagation?", "How a transaction joins an outer one."),
                (
                    "Is rollback automatic?",
                    "Only for unchecked exceptions. Checked ones commit."
                ),
            ]
        );
    }

    #[test]
    fn test_korean_section_title() {
        let body = "## 자주 묻는 질문\n\n### 격리 수준이란?\n\n동시성 제어 방식입니다.\n";
        let faqs = extract_faqs(body);
        assert_eq!(pairs(&faqs), vec![("격리 수준이란?", "동시성 제어 방식입니다.")]);
    }

    #[test]
    fn test_inline_markers() {
        let body = r#"Some text.

**Q: Does it work with Kotlin?**
A: Yes, with the `open` plugin.

Q. Second question?

A. Second answer
spanning two lines.

Q: Dangling question without answer
Just prose.
"#;
        let faqs = extract_faqs(body);
        assert_eq!(
            pairs(&faqs),
            vec![
                ("Does it work with Kotlin?", "Yes, with the open plugin."),
                ("Second question?", "Second answer spanning two lines."),
            ]
        );
    }

    #[test]
    fn test_bold_marker_only() {
        let faqs = extract_faqs("**Q:** Why?\n**A:** Because.\n");
        assert_eq!(pairs(&faqs), vec![("Why?", "Because.")]);
    }

    #[test]
    fn test_markers_inside_code_are_ignored() {
        let body = "```\nQ: not a question\nA: not an answer\n```\n";
        assert!(extract_faqs(body).is_empty());
    }

    #[test]
    fn test_heading_question_without_answer_is_dropped() {
        let body = "## FAQ\n### Empty?\n### Filled?\nYes.\n";
        let faqs = extract_faqs(body);
        assert_eq!(pairs(&faqs), vec![("Filled?", "Yes.")]);
    }
}
