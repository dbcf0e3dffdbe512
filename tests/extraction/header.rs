//! Header region: title, author and publish date

use chrono::{Datelike, Local, TimeZone, Timelike};

use super::common::{article, changed_at, extract};

#[test]
fn test_end_to_end_example() {
    let article = extract(
        r#"<article data-sblg-article="1"><header><h1>Hi</h1><address>A. Uthor</address><time datetime="2014-03-01"/></header><p>Body</p></article>"#,
    );
    assert_eq!(article.title, "Hi");
    assert_eq!(article.author, "A. Uthor");
    assert_eq!(
        article.published_at,
        Local.with_ymd_and_hms(2014, 3, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(article.body.to_str().unwrap(), "<p>Body</p>");
    assert_eq!(article.aside.to_str().unwrap(), "");
}

#[test]
fn test_no_header_uses_defaults() {
    let article = extract(&article("<h1>Not a title</h1><address>Nobody</address><p>x</p>"));
    assert_eq!(article.title, "Untitled article");
    assert_eq!(article.author, "Untitled author");
    assert_eq!(article.published_at, changed_at());
    assert_eq!(
        article.body.to_str().unwrap(),
        "<h1>Not a title</h1><address>Nobody</address><p>x</p>"
    );
}

#[test]
fn test_header_excluded_from_body() {
    let article = extract(&article(
        "<p>before</p><header><h2>T</h2><p>standfirst</p></header><p>after</p>",
    ));
    assert_eq!(article.title, "T");
    assert_eq!(article.body.to_str().unwrap(), "<p>before</p><p>after</p>");
}

#[test]
fn test_any_heading_level_up_to_four() {
    for level in 1..=4 {
        let article = extract(&article(&format!(
            "<header><h{level}>Level {level}</h{level}></header>"
        )));
        assert_eq!(article.title, format!("Level {level}"));
    }
}

#[test]
fn test_h5_is_not_a_title() {
    let article = extract(&article("<header><h5>Small</h5></header>"));
    assert_eq!(article.title, "Untitled article");
}

#[test]
fn test_title_strips_tags_and_unescapes() {
    let article = extract(&article(
        "<header><h1>Rust &amp; <em>XML</em> &lt;3</h1></header>",
    ));
    assert_eq!(article.title, "Rust & XML <3");
}

#[test]
fn test_only_first_title_counts() {
    let article = extract(&article(
        "<header><h1>First</h1><h1>Second</h1></header><header><h1>Third</h1></header>",
    ));
    assert_eq!(article.title, "First");
}

#[test]
fn test_title_ends_on_mismatched_heading_close() {
    // The title region closes on any h1..h4 end tag, not only its opener's.
    let article = extract(&article(
        "<header><h2>Main <h4>sub</h4> rest</h2></header>",
    ));
    assert_eq!(article.title, "Main sub");
}

#[test]
fn test_first_time_sets_date_at_local_midnight() {
    let article = extract(&article(
        r#"<header><time datetime="2014-03-01">March 1st</time><time datetime="2015-06-01"/></header>"#,
    ));
    let published = article.published_at;
    assert_eq!((published.year(), published.month(), published.day()), (2014, 3, 1));
    assert_eq!((published.hour(), published.minute(), published.second()), (0, 0, 0));
}

#[test]
fn test_later_time_ignored_when_first_lacks_datetime() {
    let article = extract(&article(
        r#"<header><time>undated</time><time datetime="2015-06-01"/></header>"#,
    ));
    assert_eq!(article.published_at, changed_at());
}

#[test]
fn test_malformed_datetime_falls_back() {
    let article = extract(&article(r#"<header><time datetime="01/03/2014"/></header>"#));
    assert_eq!(article.published_at, changed_at());
}

#[test]
fn test_datetime_with_time_of_day_keeps_date_only() {
    let article = extract(&article(
        r#"<header><time datetime="2014-03-01T18:30:00Z"/></header>"#,
    ));
    assert_eq!(
        article.published_at,
        Local.with_ymd_and_hms(2014, 3, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_time_outside_header_ignored() {
    let article = extract(&article(r#"<p><time datetime="2014-03-01">then</time></p>"#));
    assert_eq!(article.published_at, changed_at());
    assert_eq!(
        article.body.to_str().unwrap(),
        r#"<p><time datetime="2014-03-01">then</time></p>"#
    );
}

#[test]
fn test_nested_address_text_only() {
    let article = extract(&article(
        r#"<header><address>By <a href="/me">Me</a><address> and <address>You</address></address>!</address></header>"#,
    ));
    assert_eq!(article.author, "By Me and You!");
}

#[test]
fn test_address_region_closes_at_depth_zero() {
    let article = extract(&article(
        "<header><address><address>inner</address> outer</address><h1>T</h1></header>",
    ));
    assert_eq!(article.author, "inner outer");
    assert_eq!(article.title, "T");
}

#[test]
fn test_only_first_address_counts() {
    let article = extract(&article(
        "<header><address>One</address><address>Two</address></header>",
    ));
    assert_eq!(article.author, "One");
}
