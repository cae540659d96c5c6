use pretty_assertions::assert_eq;
use rstest::rstest;
use scribe_core::{
    BlockKind, MarkdownError, SpanKind, TextSpan, classify, extract_title, markdown_to_html,
    segment, strip_root, tokenize,
};

#[rstest]
#[case(
    "This is **bold** and *italic*.",
    "<div><p>This is <b>bold</b> and <i>italic</i>.</p></div>"
)]
#[case("# Title\n## Subtitle", "<div><h1>Title</h1><h2>Subtitle</h2></div>")]
#[case("```\ncode line\n```", "<div><pre><code>code line\n</code></pre></div>")]
#[case("- a\n- b", "<div><ul><li>a</li><li>b</li></ul></div>")]
#[case("1. a\n2. b", "<div><ol><li>a</li><li>b</li></ol></div>")]
#[case("2. a\n3. b", "<div><p>2. a\n3. b</p></div>")]
#[case(
    "> line one\n> line two",
    "<div><blockquote>line one line two</blockquote></div>"
)]
fn test_documents_render(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn test_full_page() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It's *very* good

1. Gandalf
2. Bilbo

```
func main() {}
```

Read [the wiki](https://lotr.fandom.com/) for `more`.
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        "<div>\
<h1>Tolkien Fan Club</h1>\
<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>\
<p>Here's the deal, <b>I like Tolkien</b>.</p>\
<p>> \"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien</p>\
<h2>Reasons I like Tolkien</h2>\
<ul><li>You can spend years studying the legendarium</li><li>It's <i>very</i> good</li></ul>\
<ol><li>Gandalf</li><li>Bilbo</li></ol>\
<pre><code>func main() {}\n</code></pre>\
<p>Read <a href=\"https://lotr.fandom.com/\">the wiki</a> for <code>more</code>.</p>\
</div>"
    );
    assert_eq!(extract_title(md).unwrap(), "Tolkien Fan Club");
    assert!(strip_root(&html).starts_with("<h1>"));
}

#[test]
fn test_segmentation_round_trip() {
    let md = "para one\nstill one\n\n# Head\n\n- x\n- y\n\n> q";
    let blocks = segment(md);
    assert_eq!(blocks.len(), 4);
    assert_eq!(segment(&blocks.join("\n\n")), blocks);
}

#[test]
fn test_classification_requires_every_line() {
    assert_eq!(classify("- a\n- b"), BlockKind::UnorderedList);
    assert_eq!(classify("- a\n+ b"), BlockKind::Paragraph);
    assert_eq!(classify("> a\n> b"), BlockKind::Quote);
    assert_eq!(classify("> a\nb"), BlockKind::Paragraph);
}

#[test]
fn test_plain_text_tokenizes_to_itself() {
    let text = "no markdown syntax here, just words.";
    assert_eq!(tokenize(text).unwrap(), vec![TextSpan::plain(text)]);
}

#[test]
fn test_visible_text_is_preserved() {
    let spans = tokenize("a **b** c *d* `e` [f](g) ![h](i) j").unwrap();
    let visible: String = spans
        .iter()
        .filter(|span| !matches!(span.kind, SpanKind::Image { .. }))
        .map(|span| span.content.as_str())
        .collect();
    assert_eq!(visible, "a b c d e f  j");
}

#[test]
fn test_unbalanced_delimiter_fails_whole_document() {
    let err = markdown_to_html("# ok\n\n- fine\n- *broken").unwrap_err();
    assert_eq!(
        err,
        MarkdownError::MalformedMarkdown {
            delimiter: "*".into(),
            text: "*broken".into(),
        }
    );
}
