//! Extraction configuration

/// Attribute that opts a top-level `<article>` into extraction
pub const MARKER_ATTRIBUTE: &str = "data-sblg-article";

/// Attribute carrying the article's comma/space-delimited tag list
pub const TAGS_ATTRIBUTE: &str = "data-sblg-tags";

/// Title used when the header carries no `h1`..`h4`
pub const DEFAULT_TITLE: &str = "Untitled article";

/// Author used when the header carries no `address`
pub const DEFAULT_AUTHOR: &str = "Untitled author";

/// Extraction configuration
///
/// Controls the attribute vocabulary recognized on the root article and the
/// defaults applied when a document leaves a field uncaptured.
///
/// # Example
///
/// ```
/// use sblg_article::ExtractConfig;
///
/// // The stock vocabulary
/// let config = ExtractConfig::default();
/// assert_eq!(config.marker_attribute, "data-sblg-article");
///
/// // Custom defaults for a site that never signs its posts
/// let config = ExtractConfig::default().with_defaults("Untitled", "The Editors");
/// assert_eq!(config.default_author, "The Editors");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractConfig {
    /// Attribute that must be present and truthy on the root article
    pub marker_attribute: String,

    /// Attribute copied verbatim into [`Article::tags`](crate::Article::tags)
    pub tags_attribute: String,

    /// Title applied at finalization if none was captured
    pub default_title: String,

    /// Author applied at finalization if none was captured
    pub default_author: String,
}

impl ExtractConfig {
    /// Create a configuration with a custom attribute vocabulary
    ///
    /// # Arguments
    ///
    /// * `marker_attribute` - Opt-in attribute looked up on the root article
    /// * `tags_attribute` - Tag list attribute looked up on the root article
    pub fn new(marker_attribute: impl Into<String>, tags_attribute: impl Into<String>) -> Self {
        Self {
            marker_attribute: marker_attribute.into(),
            tags_attribute: tags_attribute.into(),
            ..Self::default()
        }
    }

    /// Replace the title and author defaults
    pub fn with_defaults(
        mut self,
        default_title: impl Into<String>,
        default_author: impl Into<String>,
    ) -> Self {
        self.default_title = default_title.into();
        self.default_author = default_author.into();
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker_attribute: MARKER_ATTRIBUTE.to_string(),
            tags_attribute: TAGS_ATTRIBUTE.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}
