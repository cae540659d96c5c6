//! Block segmentation and classification.

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    /// Tag of the element wrapping this kind of block. Headings depend on
    /// their level, so they have none here.
    pub fn container_tag(&self) -> Option<&'static str> {
        match self {
            BlockKind::Paragraph => Some("p"),
            BlockKind::Heading => None,
            BlockKind::Code => Some("pre"),
            BlockKind::Quote => Some("blockquote"),
            BlockKind::UnorderedList => Some("ul"),
            BlockKind::OrderedList => Some("ol"),
        }
    }
}

/// Level of an ATX heading line: 1 to 6 `#` followed by a space.
pub fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Split a document into trimmed blocks.
///
/// Blank lines end a block. A heading line also ends the block before it, so
/// headings never merge into a preceding paragraph.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
            continue;
        }

        if heading_level(line.trim_start()).is_some() {
            flush(&mut blocks, &mut current);
        }
        current.push(line.trim());
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }

    let block = current.join("\n").trim().to_string();
    if !block.is_empty() {
        blocks.push(block);
    }
    current.clear();
}

/// Classify a block by inspecting all of its lines. Quote and list blocks
/// with a single non-conforming line fall back to `Paragraph`.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    let kind = if heading_level(block).is_some() {
        BlockKind::Heading
    } else if is_code_fence(&lines) {
        BlockKind::Code
    } else if block.starts_with("> ") {
        every_line_or_paragraph(&lines, |_, line| line.starts_with("> "), BlockKind::Quote)
    } else if block.starts_with("- ") {
        every_line_or_paragraph(&lines, |_, line| line.starts_with("- "), BlockKind::UnorderedList)
    } else if block.starts_with("1. ") {
        every_line_or_paragraph(
            &lines,
            |i, line| line.starts_with(&format!("{}. ", i + 1)),
            BlockKind::OrderedList,
        )
    } else {
        BlockKind::Paragraph
    };

    trace!("Classified {:?} as {:?}", lines.first().unwrap_or(&""), kind);
    kind
}

fn is_code_fence(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.trim_start().starts_with("```") && last.trim_start().starts_with("```")
        }
        _ => false,
    }
}

fn every_line_or_paragraph<F>(lines: &[&str], conforms: F, kind: BlockKind) -> BlockKind
where
    F: Fn(usize, &str) -> bool,
{
    if lines.iter().copied().enumerate().all(|(i, line)| conforms(i, line)) {
        kind
    } else {
        BlockKind::Paragraph
    }
}
