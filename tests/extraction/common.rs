//! Shared helpers

use chrono::{DateTime, Local, TimeZone};
use sblg_article::{Article, Extractor};

/// Stand-in file change time used when a document carries no date
pub fn changed_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2019, 11, 5, 16, 45, 0).unwrap()
}

/// Extract a document that is expected to opt in
pub fn extract(html: &str) -> Article {
    Extractor::default()
        .extract_bytes("post.xml", html.as_bytes(), changed_at())
        .unwrap()
        .expect("document should opt in")
}

/// Wrap `inner` in an opted-in root article
pub fn article(inner: &str) -> String {
    format!(r#"<article data-sblg-article="1">{inner}</article>"#)
}
