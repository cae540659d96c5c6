use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// An inline delimiter was opened but never closed.
    #[error("Malformed markdown: unterminated `{delimiter}` in {text:?}")]
    MalformedMarkdown { delimiter: String, text: String },
    #[error("Element node has no tag")]
    MissingTag,
    #[error("Element <{tag}> has no children")]
    EmptyChildren { tag: String },
    #[error("No `# ` title heading found")]
    TitleNotFound,
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
