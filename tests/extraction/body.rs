//! Body region: verbatim re-serialization and root termination

use sblg_article::{Token, Tokenizer};

use super::common::{article, extract};

/// Element names and non-blank text of a fragment, in document order
fn structure(markup: &[u8]) -> Vec<String> {
    let mut tokenizer = Tokenizer::new(markup);
    let mut out = Vec::new();
    while let Some(token) = tokenizer.next_token().expect("fragment should be well-formed") {
        match token {
            Token::Start(tag) => {
                let mut open = format!("<{}", String::from_utf8_lossy(&tag.name));
                for attr in &tag.attributes {
                    open.push_str(&format!(
                        " {}={}",
                        String::from_utf8_lossy(&attr.key),
                        attr.value_str()
                    ));
                }
                out.push(open);
            }
            Token::End(name) => out.push(format!("</{}", String::from_utf8_lossy(&name))),
            Token::Text(text) | Token::CData(text) => {
                let text = String::from_utf8_lossy(&text).trim().to_string();
                if !text.is_empty() {
                    out.push(text);
                }
            }
            Token::Comment(_) => {}
        }
    }
    out
}

#[test]
fn test_body_is_verbatim() {
    let inner = r#"
<p class="lead" id='intro'>Hello, <a href="/x?a=1&amp;b=2">world</a>!</p>
<pre>  spaced   out  </pre>
"#;
    let article = extract(&article(inner));
    assert_eq!(
        article.body.to_str().unwrap(),
        r#"
<p class="lead" id="intro">Hello, <a href="/x?a=1&amp;b=2">world</a>!</p>
<pre>  spaced   out  </pre>
"#
    );
}

#[test]
fn test_self_closing_elements_expand() {
    let article = extract(&article(r#"<p>a<br/>b<img src="x.png" alt=""/></p>"#));
    assert_eq!(
        article.body.to_str().unwrap(),
        r#"<p>a<br></br>b<img src="x.png" alt=""></img></p>"#
    );
}

#[test]
fn test_single_quoted_attribute_with_double_quote() {
    let article = extract(&article(r#"<abbr title='the "best"'>TB</abbr>"#));
    assert_eq!(
        article.body.to_str().unwrap(),
        r#"<abbr title='the "best"'>TB</abbr>"#
    );
}

#[test]
fn test_nested_articles_retained() {
    let article = extract(&article(
        r#"<p>intro</p><article class="comment"><article><p>reply</p></article></article><p>outro</p>"#,
    ));
    assert_eq!(
        article.body.to_str().unwrap(),
        r#"<p>intro</p><article class="comment"><article><p>reply</p></article></article><p>outro</p>"#
    );
}

#[test]
fn test_terminates_at_root_close() {
    let html = r#"<html><body>
<article data-sblg-article="1"><article><p>nested</p></article><p>in</p></article>
<p>after</p>
<article data-sblg-article="1"><header><h1>Second</h1></header><p>ignored</p></article>
</body></html>"#;
    let article = extract(html);
    assert_eq!(
        article.body.to_str().unwrap(),
        "<article><p>nested</p></article><p>in</p>"
    );
    assert_eq!(article.title, "Untitled article");
}

#[test]
fn test_nested_article_header_is_still_a_header() {
    let article = extract(&article(
        "<article><header><h1>Inner</h1></header><p>c</p></article>",
    ));
    assert_eq!(article.title, "Inner");
    assert_eq!(article.body.to_str().unwrap(), "<article><p>c</p></article>");
}

#[test]
fn test_comments_and_cdata_preserved() {
    let article = extract(&article("<!-- draft --><script><![CDATA[if (a < b) {}]]></script>"));
    assert_eq!(
        article.body.to_str().unwrap(),
        "<!-- draft --><script><![CDATA[if (a < b) {}]]></script>"
    );
}

#[test]
fn test_body_round_trips() {
    let inner = r##"
<section id="s1">
  <h2>Part</h2>
  <p>Text with <em>emphasis</em> and <a href="#x">a link</a>.</p>
  <ul><li>one</li><li>two<br/></li></ul>
  <article><p>nested</p></article>
</section>
"##;
    let article = extract(&article(inner));
    assert_eq!(structure(article.body.as_bytes()), structure(inner.as_bytes()));
}

#[test]
fn test_aside_round_trips() {
    let content = r##"
<h3>Related</h3>
<ul><li><a href="#top">top</a><br/></li></ul>
<aside class="inner"><p>nested</p></aside>
"##;
    let article = extract(&article(&format!(
        r#"<aside class="note">{content}</aside><p>after</p>"#
    )));
    assert_eq!(structure(article.aside.as_bytes()), structure(content.as_bytes()));
    assert_eq!(structure(article.body.as_bytes()), ["<p", "after", "</p"]);
}
