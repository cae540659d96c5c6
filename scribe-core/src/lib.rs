pub mod blocks;
pub mod error;
pub mod inline;
pub mod markdown;
pub mod node;
pub mod title;

// Re-export main types
pub use blocks::{BlockKind, classify, segment};
pub use error::MarkdownError;
pub use inline::{SpanKind, TextSpan, tokenize};
pub use markdown::{markdown_to_html, markdown_to_html_node, strip_root};
pub use node::HtmlNode;
pub use title::extract_title;
