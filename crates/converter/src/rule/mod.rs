use std::fmt;

use crate::{
    color::{split_tokens, Color},
    value::{Length, Url, Value, ValueKind},
    Property,
};

pub(crate) use table::{RuleTable, LENIENT_RULES, STRICT_RULES};

mod table;

/// How a property's raw value is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact, case-sensitive match against a fixed keyword set
    Keyword(&'static [&'static str]),
    Length(LengthPolicy),
    /// One or more whitespace-separated colors
    Colors,
    /// `none` or `url(...)`
    UrlOrNone,
}

/// Which lengths a length-valued property accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub negative: bool,
    pub percent: bool,
    /// Keywords accepted in place of a length, e.g. `auto`
    pub keywords: &'static [&'static str],
}

/// What to store when a value fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Store nothing
    Reject,
    /// Store the input verbatim, unvalidated
    Raw,
    /// Store this value instead
    Default(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub property: Property,
    pub rule: Rule,
    pub fallback: Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Malformed literal
    Syntax,
    /// Well-formed, but outside what the property allows
    Domain,
    /// The property does not accept this form of value at all
    NotApplicable,
    /// No property by that name
    UnknownProperty,
}

/// Why a value was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    kind: RejectionKind,
    message: String,
}

impl Rejection {
    pub(crate) fn new(kind: RejectionKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> RejectionKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Rejection {}

impl Rule {
    /// Validate `raw`, which has already been trimmed
    pub(crate) fn apply(&self, raw: &str) -> Result<Value, Rejection> {
        match self {
            Rule::Keyword(allowed) => match_keyword(allowed, raw)
                .map(Value::keyword)
                .ok_or_else(|| {
                    Rejection::new(
                        RejectionKind::Domain,
                        format!("Expected one of {}, was \"{}\".", allowed.join(", "), raw),
                    )
                }),
            Rule::Length(policy) => policy.apply(raw),
            Rule::Colors => {
                let tokens = split_tokens(raw)?;

                if tokens.is_empty() {
                    return Err(Rejection::new(
                        RejectionKind::Syntax,
                        "Expected color.".to_owned(),
                    ));
                }

                let colors = tokens
                    .into_iter()
                    .map(Color::parse)
                    .collect::<Result<Vec<Color>, Rejection>>()?;

                Ok(Value::new(raw.to_owned(), ValueKind::Colors(colors)))
            }
            Rule::UrlOrNone => {
                if raw == "none" {
                    return Ok(Value::keyword("none"));
                }

                let url = Url::parse(raw)?;
                Ok(Value::new(raw.to_owned(), ValueKind::Url(url)))
            }
        }
    }
}

impl LengthPolicy {
    fn apply(&self, raw: &str) -> Result<Value, Rejection> {
        if let Some(keyword) = match_keyword(self.keywords, raw) {
            return Ok(Value::keyword(keyword));
        }

        let length = Length::parse(raw).map_err(|rejection| {
            // a word that is neither a number nor one of our keywords is
            // out of domain rather than malformed
            if raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
                Rejection::new(RejectionKind::Domain, rejection.message)
            } else {
                rejection
            }
        })?;

        if !self.negative && length.number.is_negative() {
            return Err(Rejection::new(
                RejectionKind::Domain,
                format!("Expected non-negative length, was \"{}\".", raw),
            ));
        }

        if !self.percent && length.unit.is_percent() {
            return Err(Rejection::new(
                RejectionKind::Domain,
                format!("Percentages are not allowed, was \"{}\".", raw),
            ));
        }

        Ok(Value::length(length))
    }
}

fn match_keyword(allowed: &[&'static str], raw: &str) -> Option<&'static str> {
    allowed.iter().copied().find(|keyword| *keyword == raw)
}
