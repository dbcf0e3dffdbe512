//! Region tracker
//!
//! A finite-state machine over tokenizer events. The current [`Region`]
//! decides, for every token, whether it is dropped, captured as plain text
//! (title, author) or re-serialized into a markup buffer (body, aside).

use std::borrow::Cow;
use std::fmt;

use quick_xml::escape::unescape;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::article::Draft;
use crate::attr;
use crate::config::ExtractConfig;
use crate::date::parse_date;
use crate::tokenizer::{Tag, Token};

/// Heading elements that open (and close) the title region
const HEADINGS: [&str; 4] = ["h1", "h2", "h3", "h4"];

/// Where the tracker currently is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    /// Looking for the root article; everything is ignored
    ScanningForRoot,
    /// Inside the opted-in article, outside any special region
    InBody,
    /// Inside the article's `header`
    InHeader,
    /// Inside the first heading of the header
    InTitle,
    /// Inside the first `address` of the header
    InAddress,
    /// Inside the first top-level `aside`
    InAside,
    /// Inside a later top-level `aside`, which is discarded whole
    DroppingAside,
    /// Root rejected or closed; the rest of the document is ignored
    Done,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ScanningForRoot => "document",
            Self::InBody => "article",
            Self::InHeader => "header",
            Self::InTitle => "title",
            Self::InAddress => "address",
            Self::InAside | Self::DroppingAside => "aside",
            Self::Done => "trailing content",
        };
        f.write_str(name)
    }
}

/// The token stream ended while a region was still open
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input ended inside {region} (article depth {article_depth}, region depth {depth})")]
pub(crate) struct UnclosedRegion {
    pub(crate) region: Region,
    pub(crate) article_depth: usize,
    pub(crate) depth: usize,
}

/// One-shot guards: only the first occurrence of each region is captured
#[derive(Debug, Default, Clone, Copy)]
struct Latches {
    time: bool,
    address: bool,
    title: bool,
    aside: bool,
}

/// Extraction context for a single document
pub(crate) struct RegionTracker<'c> {
    config: &'c ExtractConfig,
    region: Region,
    /// Open `article` elements, the root included
    article_depth: usize,
    /// Open `address` or `aside` elements of the current region
    depth: usize,
    latches: Latches,
    opted_in: bool,
    draft: Draft,
}

impl<'c> RegionTracker<'c> {
    pub(crate) fn new(config: &'c ExtractConfig) -> Self {
        Self {
            config,
            region: Region::ScanningForRoot,
            article_depth: 0,
            depth: 0,
            latches: Latches::default(),
            opted_in: false,
            draft: Draft::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn region(&self) -> Region {
        self.region
    }

    /// Dispatch one token on the current region
    pub(crate) fn feed(&mut self, token: &Token<'_>) {
        match token {
            Token::Start(tag) => self.start(tag),
            Token::End(name) => self.end(name),
            Token::Text(raw) => self.text(raw),
            Token::CData(raw) => self.cdata(raw),
            Token::Comment(raw) => self.comment(raw),
        }
    }

    /// Close the context at end of input
    ///
    /// Returns `Ok(None)` if the document had no opted-in article.
    pub(crate) fn finish(self) -> Result<Option<Draft>, UnclosedRegion> {
        match self.region {
            Region::Done if self.opted_in => Ok(Some(self.draft)),
            Region::Done | Region::ScanningForRoot => Ok(None),
            region => Err(UnclosedRegion {
                region,
                article_depth: self.article_depth,
                depth: self.depth,
            }),
        }
    }

    fn enter(&mut self, region: Region) {
        trace!("{} -> {}", self.region, region);
        self.region = region;
    }

    fn start(&mut self, tag: &Tag) {
        match self.region {
            Region::ScanningForRoot => {
                if tag.is("article") {
                    self.open_root(tag);
                }
            }
            Region::InBody => self.body_start(tag),
            Region::InHeader => self.header_start(tag),
            Region::InTitle | Region::Done => {}
            Region::InAddress => {
                if tag.is("address") {
                    self.depth += 1;
                }
            }
            Region::InAside => {
                if tag.is("aside") {
                    self.depth += 1;
                }
                self.draft.aside.open(&tag.name, &tag.attributes);
            }
            Region::DroppingAside => {
                if tag.is("aside") {
                    self.depth += 1;
                }
            }
        }
    }

    fn end(&mut self, name: &[u8]) {
        match self.region {
            Region::ScanningForRoot | Region::Done => {}
            Region::InBody => {
                if is(name, "article") {
                    self.article_depth -= 1;
                    if self.article_depth == 0 {
                        debug!("Root article closed");
                        self.enter(Region::Done);
                        return;
                    }
                }
                self.draft.body.close(name);
            }
            Region::InHeader => {
                if is(name, "header") {
                    self.enter(Region::InBody);
                }
            }
            Region::InTitle => {
                if HEADINGS.iter().any(|heading| is(name, heading)) {
                    self.enter(Region::InHeader);
                }
            }
            Region::InAddress => {
                if is(name, "address") {
                    self.depth -= 1;
                    if self.depth == 0 {
                        self.enter(Region::InHeader);
                    }
                }
            }
            Region::InAside => {
                if is(name, "aside") {
                    self.depth -= 1;
                    if self.depth == 0 {
                        self.enter(Region::InBody);
                        return;
                    }
                }
                self.draft.aside.close(name);
            }
            Region::DroppingAside => {
                if is(name, "aside") {
                    self.depth -= 1;
                    if self.depth == 0 {
                        self.enter(Region::InBody);
                    }
                }
            }
        }
    }

    fn text(&mut self, raw: &[u8]) {
        match self.region {
            Region::InBody => self.draft.body.push_text(raw),
            Region::InAside => self.draft.aside.push_text(raw),
            Region::InTitle => push_unescaped(&mut self.draft.title, raw),
            Region::InAddress => push_unescaped(&mut self.draft.author, raw),
            _ => {}
        }
    }

    fn cdata(&mut self, raw: &[u8]) {
        match self.region {
            Region::InBody => self.draft.body.cdata(raw),
            Region::InAside => self.draft.aside.cdata(raw),
            Region::InTitle => push_literal(&mut self.draft.title, raw),
            Region::InAddress => push_literal(&mut self.draft.author, raw),
            _ => {}
        }
    }

    fn comment(&mut self, raw: &[u8]) {
        match self.region {
            Region::InBody => self.draft.body.comment(raw),
            Region::InAside => self.draft.aside.comment(raw),
            _ => {}
        }
    }

    fn open_root(&mut self, tag: &Tag) {
        if !attr::is_set(tag.attribute(&self.config.marker_attribute)) {
            debug!(
                "First article lacks a truthy {}, skipping document",
                self.config.marker_attribute
            );
            self.enter(Region::Done);
            return;
        }

        debug!("Found opted-in root article");
        self.opted_in = true;
        self.draft.tags = tag
            .attribute(&self.config.tags_attribute)
            .map(|tags| tags.value_str().into_owned());
        self.article_depth = 1;
        self.enter(Region::InBody);
    }

    fn body_start(&mut self, tag: &Tag) {
        if tag.is("header") {
            self.enter(Region::InHeader);
        } else if tag.is("aside") {
            self.depth = 1;
            if self.latches.aside {
                debug!("Dropping additional aside");
                self.enter(Region::DroppingAside);
            } else {
                self.latches.aside = true;
                self.enter(Region::InAside);
            }
        } else {
            if tag.is("article") {
                self.article_depth += 1;
            }
            self.draft.body.open(&tag.name, &tag.attributes);
        }
    }

    fn header_start(&mut self, tag: &Tag) {
        if tag.is("time") {
            if !self.latches.time {
                self.latches.time = true;
                self.capture_time(tag);
            }
        } else if tag.is("address") {
            if !self.latches.address {
                self.latches.address = true;
                self.depth = 1;
                self.enter(Region::InAddress);
            }
        } else if HEADINGS.iter().any(|heading| tag.is(heading)) && !self.latches.title {
            self.latches.title = true;
            self.enter(Region::InTitle);
        }
    }

    fn capture_time(&mut self, tag: &Tag) {
        let Some(datetime) = tag.attribute("datetime") else {
            debug!("First time element has no datetime attribute");
            return;
        };

        let value = datetime.value_str();
        match parse_date(&value) {
            Some(published_at) => self.draft.published_at = Some(published_at),
            None => warn!("Ignoring unparsable datetime {:?}", value),
        }
    }
}

fn is(name: &[u8], expected: &str) -> bool {
    name.eq_ignore_ascii_case(expected.as_bytes())
}

/// Append character data, resolving entity references where possible
fn push_unescaped(field: &mut Option<String>, raw: &[u8]) {
    if raw.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(raw);
    let text = unescape(&text).unwrap_or_else(|_| Cow::Borrowed(&*text));
    field.get_or_insert_with(String::new).push_str(&text);
}

fn push_literal(field: &mut Option<String>, raw: &[u8]) {
    if raw.is_empty() {
        return;
    }
    field
        .get_or_insert_with(String::new)
        .push_str(&String::from_utf8_lossy(raw));
}
