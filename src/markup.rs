//! Markup buffer
//!
//! An owned byte buffer that accumulates the parts of the source document the
//! extractor keeps. Text is appended as-is; tags are written back from the
//! name and attributes the tokenizer delivered, without reordering or
//! re-escaping, so the buffer re-tokenizes to the same subtree.

use std::fmt;
use std::str::Utf8Error;

use crate::attr::Attribute;

/// Growable markup buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    bytes: Vec<u8>,
}

impl Markup {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes verbatim
    pub fn push_text(&mut self, text: &[u8]) {
        self.bytes.extend_from_slice(text);
    }

    /// Append an opening tag: `<name key="value" ...>`
    ///
    /// Values are written exactly as delivered. A value containing a double
    /// quote can only have come from a single-quoted source attribute, so it
    /// is written back single-quoted.
    pub fn open(&mut self, name: &[u8], attributes: &[Attribute]) {
        self.bytes.push(b'<');
        self.bytes.extend_from_slice(name);
        for attr in attributes {
            let quote = if attr.value.contains(&b'"') { b'\'' } else { b'"' };
            self.bytes.push(b' ');
            self.bytes.extend_from_slice(&attr.key);
            self.bytes.push(b'=');
            self.bytes.push(quote);
            self.bytes.extend_from_slice(&attr.value);
            self.bytes.push(quote);
        }
        self.bytes.push(b'>');
    }

    /// Append a closing tag: `</name>`
    pub fn close(&mut self, name: &[u8]) {
        self.bytes.extend_from_slice(b"</");
        self.bytes.extend_from_slice(name);
        self.bytes.push(b'>');
    }

    /// Append a comment: `<!--text-->`
    pub fn comment(&mut self, text: &[u8]) {
        self.bytes.extend_from_slice(b"<!--");
        self.bytes.extend_from_slice(text);
        self.bytes.extend_from_slice(b"-->");
    }

    /// Append a CDATA section: `<![CDATA[text]]>`
    pub fn cdata(&mut self, text: &[u8]) {
        self.bytes.extend_from_slice(b"<![CDATA[");
        self.bytes.extend_from_slice(text);
        self.bytes.extend_from_slice(b"]]>");
    }

    /// Buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer contents as UTF-8
    pub fn to_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// Number of bytes in the buffer
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the buffer, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Markup {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Markup {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Markup {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.bytes))
    }
}
