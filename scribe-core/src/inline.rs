//! Inline tokenizer.
//!
//! Turns a run of text into typed [`TextSpan`]s in a fixed pipeline:
//! images, then links, then the `**`, `*` and `` ` `` delimiters. Every pass
//! only rescans spans that are still [`SpanKind::Plain`], so styles never nest.
//!
//! Image and link matching is literal and non-nested: `[` and `]` may not
//! appear inside the text part, `(` and `)` may not appear inside the URL,
//! and there is no escaping.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{MarkdownError, Result};
use crate::node::HtmlNode;

static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new<S: Into<String>>(content: S, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain<S: Into<String>>(content: S) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link<S: Into<String>, U: Into<String>>(content: S, url: U) -> Self {
        Self::new(content, SpanKind::Link { url: url.into() })
    }

    pub fn image<S: Into<String>, U: Into<String>>(alt: S, url: U) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// URL for links and images, `None` for everything else.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }
}

/// Split `text` into typed spans.
///
/// Fails with [`MarkdownError::MalformedMarkdown`] when a `**`, `*` or
/// `` ` `` delimiter is left unterminated.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_nodes_image(spans);
    let spans = split_nodes_link(spans);
    let spans = split_nodes_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_nodes_delimiter(spans, "*", SpanKind::Italic)?;
    split_nodes_delimiter(spans, "`", SpanKind::Code)
}

/// All `![alt](url)` occurrences, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` occurrences that are not part of an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn link_captures(text: &str) -> impl Iterator<Item = Captures<'_>> {
    LINK_PATTERN.captures_iter(text).filter(move |caps| {
        let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        !text[..start].ends_with('!')
    })
}

pub fn split_nodes_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_matching(spans, |text| IMAGE_PATTERN.captures_iter(text).collect(), |alt, url| {
        TextSpan::image(alt, url)
    })
}

pub fn split_nodes_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_matching(spans, |text| link_captures(text).collect(), |content, url| {
        TextSpan::link(content, url)
    })
}

fn split_nodes_matching<F, M>(spans: Vec<TextSpan>, find: F, make: M) -> Vec<TextSpan>
where
    F: for<'t> Fn(&'t str) -> Vec<Captures<'t>>,
    M: Fn(&str, &str) -> TextSpan,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found: Vec<(Range<usize>, TextSpan)> = find(&span.content)
            .iter()
            .filter_map(|caps| Some((caps.get(0)?.range(), make(&caps[1], &caps[2]))))
            .collect();
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut cursor = 0;
        for (range, matched) in found {
            if range.start > cursor {
                out.push(TextSpan::plain(&text[cursor..range.start]));
            }
            out.push(matched);
            cursor = range.end;
        }
        if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }

    out
}

/// Split every plain span on `delimiter`, turning odd-indexed fragments into
/// spans of `kind`. Empty plain fragments are dropped; empty styled ones stay.
pub fn split_nodes_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.content.contains(delimiter) {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::MalformedMarkdown {
                delimiter: delimiter.to_string(),
                text: span.content,
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(TextSpan::new(part, kind.clone()));
            } else if !part.is_empty() {
                out.push(TextSpan::plain(part));
            }
        }
    }

    Ok(out)
}

pub fn text_span_to_html_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.content),
        SpanKind::Bold => HtmlNode::leaf("b", span.content),
        SpanKind::Italic => HtmlNode::leaf("i", span.content),
        SpanKind::Code => HtmlNode::leaf("code", span.content),
        SpanKind::Link { url } => HtmlNode::leaf("a", span.content).with_attribute("href", url),
        SpanKind::Image { url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", span.content),
    }
}
