//! Per-document extraction driver

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, error};

use super::state::RegionTracker;
use crate::article::Article;
use crate::config::ExtractConfig;
use crate::date::change_time;
use crate::error::{ExtractError, Result};
use crate::tokenizer::{self, TokenError, Tokenizer};

/// Article extractor
///
/// Runs one extraction pass per document. Each pass builds a fresh context,
/// so a single extractor can be reused for any number of documents.
///
/// # Example
///
/// ```
/// use chrono::Local;
/// use sblg_article::Extractor;
///
/// let html = br#"<article data-sblg-article="1">
///   <header><h1>Hi</h1><address>A. Uthor</address></header>
///   <p>Body</p>
/// </article>"#;
///
/// let extractor = Extractor::default();
/// let article = extractor
///     .extract_bytes("hi.xml", html, Local::now())
///     .unwrap()
///     .expect("article is opted in");
///
/// assert_eq!(article.title, "Hi");
/// assert_eq!(article.author, "A. Uthor");
/// assert!(article.body.to_string().contains("<p>Body</p>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract the article from a file
    ///
    /// Returns `Ok(None)` if the document has no opted-in root article. If the
    /// header carries no usable date, the file's change time is used.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Io`] if the file cannot be opened or read
    /// - [`ExtractError::Xml`] if the document is not well-formed
    /// - [`ExtractError::Timestamp`] if the file has no usable change time
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Option<Article>> {
        let path = path.as_ref();
        let io_error = |source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let metadata = file.metadata().map_err(io_error)?;
        let mut input = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
        file.read_to_end(&mut input).map_err(io_error)?;

        let changed_at = change_time(&metadata).ok_or_else(|| ExtractError::Timestamp {
            path: path.to_path_buf(),
        })?;

        self.extract_bytes(path, &input, changed_at)
    }

    /// Extract the article from an in-memory document
    ///
    /// `source_path` is only recorded in the article and in diagnostics;
    /// `changed_at` stands in for the publish date if the header has none.
    pub fn extract_bytes(
        &self,
        source_path: impl AsRef<Path>,
        input: &[u8],
        changed_at: DateTime<Local>,
    ) -> Result<Option<Article>> {
        let source_path = source_path.as_ref();
        debug!("Extracting article from {}", source_path.display());

        let mut tracker = RegionTracker::new(&self.config);
        let mut reader = Tokenizer::new(input);
        loop {
            match reader.next_token() {
                Ok(Some(token)) => tracker.feed(&token),
                Ok(None) => break,
                Err(err) => return Err(xml_error(source_path, err)),
            }
        }

        let draft = tracker.finish().map_err(|unclosed| {
            let (line, column) = tokenizer::position(input, input.len());
            xml_error(
                source_path,
                TokenError {
                    line,
                    column,
                    message: unclosed.to_string(),
                },
            )
        })?;

        match draft {
            Some(draft) => {
                let article = draft.finish(source_path, &self.config, changed_at);
                debug!(
                    "Extracted {:?} by {:?} from {} ({} body bytes, {} aside bytes)",
                    article.title,
                    article.author,
                    source_path.display(),
                    article.body.len(),
                    article.aside.len()
                );
                Ok(Some(article))
            }
            None => {
                debug!("No opted-in article in {}", source_path.display());
                Ok(None)
            }
        }
    }

    /// Extract a batch of files, one result per path, in order
    ///
    /// A failed document does not stop the batch; deciding whether to carry
    /// on is left to the caller.
    pub fn extract_all<I, P>(&self, paths: I) -> Vec<Result<Option<Article>>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|path| self.extract_file(path))
            .collect()
    }
}

fn xml_error(path: &Path, err: TokenError) -> ExtractError {
    let err = ExtractError::Xml {
        path: path.to_path_buf(),
        line: err.line,
        column: err.column,
        message: err.message,
    };
    error!("{}", err);
    err
}
