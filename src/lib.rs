#![doc = include_str!("../README.md")]

/// Extracted article record
pub mod article;
/// Start-tag attributes and the truthy-value reader
pub mod attr;
mod config;
/// Publish-date parsing and file change-time fallback
pub mod date;
mod error;
mod extract;
/// Markup buffer for the body and aside
pub mod markup;
/// Pull tokenizer over in-memory XHTML5 documents
pub mod tokenizer;

pub use article::Article;
pub use config::{
    DEFAULT_AUTHOR, DEFAULT_TITLE, ExtractConfig, MARKER_ATTRIBUTE, TAGS_ATTRIBUTE,
};
pub use error::{ExtractError, Result};
pub use extract::Extractor;
pub use markup::Markup;
pub use tokenizer::{Tag, Token, TokenError, Tokenizer};
