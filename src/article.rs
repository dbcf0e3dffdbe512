//! Extracted article record

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::ExtractConfig;
use crate::markup::Markup;

/// An article extracted from one source document
///
/// Every field is populated: fields the document did not provide carry the
/// configured defaults, and `published_at` falls back to the source file's
/// change time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Article {
    /// Path the document was read from
    pub source_path: PathBuf,
    /// `source_path` without its last extension
    pub base_name: PathBuf,
    /// Verbatim tag list from the root article, if present
    pub tags: Option<String>,
    /// Text of the first `h1`..`h4` in the header
    pub title: String,
    /// Text of the first `address` in the header, tags stripped
    pub author: String,
    /// Date of the first `time` in the header, or the file change time
    pub published_at: DateTime<Local>,
    /// Article content without the header and the first aside
    pub body: Markup,
    /// Content of the first aside, without its own opening and closing tags
    pub aside: Markup,
}

impl Article {
    /// Split [`tags`](Self::tags) on commas and whitespace
    ///
    /// `"rust, xml  blogging"` yields `rust`, `xml`, `blogging`; empty pieces
    /// are skipped. No tag list yields nothing.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tag| !tag.is_empty())
    }
}

/// Strip the last extension from a path
///
/// Only the final component is considered, and a leading dot does not start
/// an extension: `notes/.draft` is returned unchanged.
pub fn base_name(path: &Path) -> PathBuf {
    path.with_extension("")
}

/// Fields captured while a document is being scanned
#[derive(Debug, Default)]
pub(crate) struct Draft {
    pub(crate) tags: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) published_at: Option<DateTime<Local>>,
    pub(crate) body: Markup,
    pub(crate) aside: Markup,
}

impl Draft {
    /// Apply defaults and produce the final record
    pub(crate) fn finish(
        self,
        source_path: &Path,
        config: &ExtractConfig,
        changed_at: DateTime<Local>,
    ) -> Article {
        Article {
            source_path: source_path.to_path_buf(),
            base_name: base_name(source_path),
            tags: self.tags,
            title: self.title.unwrap_or_else(|| config.default_title.clone()),
            author: self.author.unwrap_or_else(|| config.default_author.clone()),
            published_at: self.published_at.unwrap_or(changed_at),
            body: self.body,
            aside: self.aside,
        }
    }
}
