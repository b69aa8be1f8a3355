use std::fmt;

use crate::color::Color;

pub use length::Length;
pub use number::Number;
pub use url::{QuoteKind, Url};

mod length;
mod number;
mod url;

/// A converted attribute value.
///
/// Values are immutable once produced. The string form returned by
/// [`Value::as_str`] (and `Display`) is canonical: converting it again with
/// the same converter yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    text: String,
    kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// One of the keywords the property accepts
    Keyword(&'static str),
    Length(Length),
    /// One or more colors, in source order
    Colors(Vec<Color>),
    Url(Url),
    /// Unvalidated input stored verbatim
    Raw,
}

impl Value {
    pub(crate) fn new(text: String, kind: ValueKind) -> Self {
        Self { text, kind }
    }

    pub(crate) fn keyword(keyword: &'static str) -> Self {
        Self::new(keyword.to_owned(), ValueKind::Keyword(keyword))
    }

    pub(crate) fn length(length: Length) -> Self {
        Self::new(length.to_string(), ValueKind::Length(length))
    }

    pub(crate) fn raw(text: &str) -> Self {
        Self::new(text.to_owned(), ValueKind::Raw)
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.kind, ValueKind::Raw)
    }

    pub fn as_keyword(&self) -> Option<&'static str> {
        match self.kind {
            ValueKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<Length> {
        match self.kind {
            ValueKind::Length(length) => Some(length),
            _ => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[Color]> {
        match &self.kind {
            ValueKind::Colors(colors) => Some(colors),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match &self.kind {
            ValueKind::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
