use crate::error::{MarkdownError, Result};

/// Attributes in insertion order. Serialized exactly in that order.
pub type Attributes = Vec<(String, String)>;

/// Output tree node.
///
/// A `Leaf` holds literal text and renders as raw text when it has no tag.
/// An `Element` owns its children and always renders as `<tag>...</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    Element {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf, rendered verbatim.
    pub fn text<S: Into<String>>(value: S) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn leaf<T: Into<String>, S: Into<String>>(tag: T, value: S) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn element<T: Into<String>>(tag: T, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.into(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping earlier ones first.
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Element { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Element { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Element { attributes, .. } => attributes,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Element { children, .. } => children,
        }
    }

    /// ` key="value"` pairs, each space-prefixed. Empty when there are none.
    pub fn attributes_to_html(&self) -> String {
        self.attributes()
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, value))
            .collect()
    }

    pub fn to_html(&self) -> Result<String> {
        let mut html = String::new();
        self.render_into(&mut html)?;
        Ok(html)
    }

    fn render_into(&self, html: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf { tag: None, value, .. } => {
                html.push_str(value);
            }
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                ..
            } => {
                html.push_str(&format!("<{}{}>", tag, self.attributes_to_html()));
                html.push_str(value);
                html.push_str(&format!("</{}>", tag));
            }
            HtmlNode::Element { tag, children, .. } => {
                if tag.is_empty() {
                    return Err(MarkdownError::MissingTag);
                }
                if children.is_empty() {
                    return Err(MarkdownError::EmptyChildren { tag: tag.clone() });
                }

                html.push_str(&format!("<{}{}>", tag, self.attributes_to_html()));
                for child in children {
                    child.render_into(html)?;
                }
                html.push_str(&format!("</{}>", tag));
            }
        }

        Ok(())
    }
}
