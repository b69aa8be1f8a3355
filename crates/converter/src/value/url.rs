use std::fmt;

use crate::{
    color::strip_function,
    rule::{Rejection, RejectionKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    Double,
    Single,
    None,
}

/// A `url(...)` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    path: String,
    quotes: QuoteKind,
}

impl Url {
    /// The referenced path, without quotes
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn quotes(&self) -> QuoteKind {
        self.quotes
    }

    pub(crate) fn parse(raw: &str) -> Result<Self, Rejection> {
        let inner = strip_function(raw, "url")
            .ok_or_else(|| {
                Rejection::new(
                    RejectionKind::NotApplicable,
                    format!("Expected url() or none, was \"{}\".", raw),
                )
            })?
            .trim();

        let (path, quotes) = match inner.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = inner[1..].strip_suffix(quote).ok_or_else(|| {
                    Rejection::new(
                        RejectionKind::Syntax,
                        format!("Expected {} to close \"{}\".", quote, raw),
                    )
                })?;

                if body.contains(quote) {
                    return Err(Rejection::new(
                        RejectionKind::Syntax,
                        format!("Unexpected {} in \"{}\".", quote, raw),
                    ));
                }

                let kind = if quote == '"' {
                    QuoteKind::Double
                } else {
                    QuoteKind::Single
                };

                (body, kind)
            }
            _ => {
                if inner
                    .chars()
                    .any(|c| c.is_ascii_whitespace() || matches!(c, '"' | '\'' | '(' | ')'))
                {
                    return Err(Rejection::new(
                        RejectionKind::Syntax,
                        format!("Invalid character in unquoted url \"{}\".", raw),
                    ));
                }

                (inner, QuoteKind::None)
            }
        };

        if path.is_empty() {
            return Err(Rejection::new(
                RejectionKind::Syntax,
                format!("Expected path in \"{}\".", raw),
            ));
        }

        Ok(Url {
            path: path.to_owned(),
            quotes,
        })
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quotes {
            QuoteKind::Double => write!(f, "url(\"{}\")", self.path),
            QuoteKind::Single => write!(f, "url('{}')", self.path),
            QuoteKind::None => write!(f, "url({})", self.path),
        }
    }
}
