//! Pull tokenizer over an in-memory XHTML5 document
//!
//! Wraps `quick-xml`'s slice reader and reduces its events to the tokens the
//! extractor dispatches on. Well-formedness failures (mismatched or unclosed
//! elements, malformed attributes, broken markup) are reported once, with a
//! line and column computed from the byte offset quick-xml reports.
//!
//! Self-closing elements are delivered as a start token followed by an end
//! token, so `<br/>` and `<br></br>` are indistinguishable downstream.

use std::borrow::Cow;
use std::fmt;

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};

use crate::attr::{self, Attribute};

/// A start tag with its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Element name as written in the source
    pub name: Vec<u8>,
    /// Attributes in source order, values still escaped
    pub attributes: Vec<Attribute>,
}

impl Tag {
    /// Create a tag from its name and attributes
    pub fn new(name: impl Into<Vec<u8>>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Check the element name, ignoring ASCII case
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.as_bytes())
    }

    /// First attribute named `name`, ignoring ASCII case
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        attr::find(&self.attributes, name)
    }
}

/// A single tokenizer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Element start (also emitted for self-closing elements)
    Start(Tag),
    /// Element end, carrying the element name
    End(Vec<u8>),
    /// Character data, raw and still escaped
    Text(Cow<'a, [u8]>),
    /// Content of a `<![CDATA[...]]>` section
    CData(Cow<'a, [u8]>),
    /// Content of a `<!--...-->` comment
    Comment(Cow<'a, [u8]>),
}

/// Positioned well-formedness error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    /// 1-based line
    pub line: usize,
    /// 0-based byte column within the line
    pub column: usize,
    /// Description of the failure
    pub message: String,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for TokenError {}

/// Streaming tokenizer over a complete document
pub struct Tokenizer<'a> {
    reader: Reader<&'a [u8]>,
    input: &'a [u8],
    depth: usize,
    pending_end: Option<Vec<u8>>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`
    pub fn new(input: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.check_end_names = true;
        config.trim_text(false);

        Self {
            reader,
            input,
            depth: 0,
            pending_end: None,
            finished: false,
        }
    }

    /// Read the next token
    ///
    /// Returns `Ok(None)` at end of input. After the first error the tokenizer
    /// is exhausted and keeps returning `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, TokenError> {
        if let Some(name) = self.pending_end.take() {
            self.depth = self.depth.saturating_sub(1);
            return Ok(Some(Token::End(name)));
        }

        while !self.finished {
            let start_at = self.reader.buffer_position();
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    self.finished = true;
                    return Err(self.error_at(self.reader.error_position(), err.to_string()));
                }
            };

            match event {
                Event::Start(start) => {
                    let tag = self.tag(&start, start_at)?;
                    self.depth += 1;
                    return Ok(Some(Token::Start(tag)));
                }
                Event::Empty(start) => {
                    let tag = self.tag(&start, start_at)?;
                    self.depth += 1;
                    self.pending_end = Some(tag.name.clone());
                    return Ok(Some(Token::Start(tag)));
                }
                Event::End(end) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(Some(Token::End(end.name().as_ref().to_vec())));
                }
                Event::Text(text) => return Ok(Some(Token::Text(text.into_inner()))),
                Event::CData(cdata) => return Ok(Some(Token::CData(cdata.into_inner()))),
                Event::Comment(comment) => return Ok(Some(Token::Comment(comment.into_inner()))),
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => {
                    self.finished = true;
                    if self.depth > 0 {
                        let end = self.input.len();
                        return Err(self.error_at(end, "unclosed element at end of input"));
                    }
                }
            }
        }

        Ok(None)
    }

    /// Collect the attributes of a start tag whose `<` sits at `start_at`
    fn tag(&mut self, start: &BytesStart<'_>, start_at: u64) -> Result<Tag, TokenError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            match attr {
                Ok(attr) => {
                    attributes.push(Attribute::new(attr.key.as_ref(), attr.value.into_owned()))
                }
                Err(err) => {
                    self.finished = true;
                    let offset = usize::try_from(start_at)
                        .unwrap_or(usize::MAX)
                        .saturating_add(1)
                        .saturating_add(attribute_offset(&err));
                    return Err(self.error_at(offset, err.to_string()));
                }
            }
        }
        Ok(Tag::new(start.name().as_ref(), attributes))
    }

    fn error_at<P>(&self, offset: P, message: impl Into<String>) -> TokenError
    where
        usize: TryFrom<P>,
    {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let (line, column) = position(self.input, offset);
        TokenError {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Offset of a malformed attribute, relative to the byte after the tag's `<`
fn attribute_offset(err: &AttrError) -> usize {
    match *err {
        AttrError::ExpectedEq(at)
        | AttrError::ExpectedValue(at)
        | AttrError::UnquotedValue(at)
        | AttrError::ExpectedQuote(at, _)
        | AttrError::Duplicated(at, _) => at,
    }
}

/// Line (1-based) and column (0-based) of a byte offset
pub(crate) fn position(input: &[u8], offset: usize) -> (usize, usize) {
    let before = &input[..offset.min(input.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = match before.iter().rposition(|&b| b == b'\n') {
        Some(newline) => before.len() - newline - 1,
        None => before.len(),
    };
    (line, column)
}
