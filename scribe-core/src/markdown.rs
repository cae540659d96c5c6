use log::debug;

use crate::blocks::{BlockKind, classify, heading_level, segment};
use crate::error::Result;
use crate::inline::{text_span_to_html_node, tokenize};
use crate::node::HtmlNode;

/// Tag of the container every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// Build the element tree for a whole document.
///
/// A single malformed inline run aborts the conversion; nothing is returned
/// for the blocks that did parse.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = segment(markdown);
    debug!("Segmented document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::element(ROOT_TAG, children))
}

/// Convert and serialize in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Remove the root `<div>` wrapper from rendered output, if present.
pub fn strip_root(html: &str) -> &str {
    html.strip_prefix("<div>")
        .and_then(|inner| inner.strip_suffix("</div>"))
        .unwrap_or(html)
}

pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?
        .into_iter()
        .map(text_span_to_html_node)
        .collect())
}

/// Build the element for one already segmented block.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    let kind = classify(block);

    match kind {
        BlockKind::Heading => {
            let level = heading_level(block).unwrap_or(1);
            let text = block[level as usize + 1..].trim();
            Ok(HtmlNode::element(format!("h{}", level), text_to_children(text)?))
        }
        BlockKind::Code => {
            let lines: Vec<&str> = block.split('\n').collect();
            let body = lines[1..lines.len() - 1].join("\n") + "\n";
            Ok(HtmlNode::element(container(kind), vec![HtmlNode::leaf("code", body)]))
        }
        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(|line| line.strip_prefix("> ").unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(HtmlNode::element(container(kind), text_to_children(&text)?))
        }
        BlockKind::UnorderedList => {
            let items = list_items(block, |line| line.strip_prefix("- ").unwrap_or(line))?;
            Ok(HtmlNode::element(container(kind), items))
        }
        BlockKind::OrderedList => {
            let items = list_items(block, |line| match line.find(". ") {
                Some(pos) => &line[pos + 2..],
                None => line,
            })?;
            Ok(HtmlNode::element(container(kind), items))
        }
        BlockKind::Paragraph => Ok(HtmlNode::element(container(kind), text_to_children(block)?)),
    }
}

fn container(kind: BlockKind) -> &'static str {
    kind.container_tag().unwrap_or("p")
}

fn list_items<F>(block: &str, strip_marker: F) -> Result<Vec<HtmlNode>>
where
    F: Fn(&str) -> &str,
{
    block
        .split('\n')
        .map(|line| {
            let text = strip_marker(line).trim();
            Ok(HtmlNode::element("li", text_to_children(text)?))
        })
        .collect()
}
