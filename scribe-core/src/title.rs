use crate::error::{MarkdownError, Result};

/// Text of the first `# ` heading line in the document.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::TitleNotFound)
}
