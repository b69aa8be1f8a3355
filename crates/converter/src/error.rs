use std::{
    error::Error as StdError,
    fmt::{self, Display},
    io,
    string::FromUtf8Error,
    sync::Arc,
};

use codemap::{Span, SpanLoc};

pub type Result<T> = std::result::Result<T, Box<Error>>;

/// `Error`s can be either a structured error, specific to `cssattr` or an
/// `io::Error`.
///
/// In the former case, the best way to interact with an error is to use
/// [`Error::kind`], which exposes the message and location.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKindInner,
}

impl Error {
    pub(crate) fn raw(self) -> (String, Span) {
        match self.kind {
            ErrorKindInner::Raw(string, span) => (string, span),
            e => unreachable!("unable to get raw of {:?}", e),
        }
    }

    pub(crate) const fn from_loc(message: String, loc: SpanLoc, unicode: bool) -> Self {
        Error {
            kind: ErrorKindInner::ParseError {
                message,
                loc,
                unicode,
            },
        }
    }

    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self.kind {
            ErrorKindInner::ParseError {
                message,
                loc,
                unicode,
            } => ErrorKind::ParseError {
                message,
                loc,
                unicode,
            },
            ErrorKindInner::FromUtf8Error(s) => ErrorKind::FromUtf8Error(s),
            ErrorKindInner::IoError(io) => ErrorKind::IoError(io),
            ErrorKindInner::Raw(..) => unreachable!("raw errors should not be accessible by users"),
        }
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A malformed declaration block, with the location of the problem
    ParseError {
        message: String,
        loc: SpanLoc,
        unicode: bool,
    },
    /// Reading the input failed
    IoError(Arc<io::Error>),
    /// The input was not valid UTF-8
    FromUtf8Error(String),
}

#[derive(Debug, Clone)]
enum ErrorKindInner {
    /// A raw error with no additional metadata
    /// It contains only a `String` message and
    /// a span
    Raw(String, Span),
    ParseError {
        message: String,
        loc: SpanLoc,
        unicode: bool,
    },
    IoError(Arc<io::Error>),
    FromUtf8Error(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc, unicode) = match &self.kind {
            ErrorKindInner::ParseError {
                message,
                loc,
                unicode,
            } => (message, loc, *unicode),
            ErrorKindInner::FromUtf8Error(s) => return writeln!(f, "Error: {}", s),
            ErrorKindInner::IoError(s) => return writeln!(f, "Error: {}", s),
            ErrorKindInner::Raw(..) => unreachable!(),
        };

        let first_bar = if unicode { '╷' } else { ',' };
        let bar = if unicode { '│' } else { '|' };
        let last_bar = if unicode { '╵' } else { '\'' };

        let line = loc.begin.line + 1;
        let col = loc.begin.column + 1;
        writeln!(f, "Error: {}", message)?;
        let padding = " ".repeat(line.to_string().len() + 1);
        writeln!(f, "{}{}", padding, first_bar)?;
        writeln!(
            f,
            "{} {} {}",
            line,
            bar,
            loc.file.source_line(loc.begin.line)
        )?;
        let underline_len = if loc.end.line == loc.begin.line {
            loc.end.column.saturating_sub(loc.begin.column).max(1)
        } else {
            1
        };
        writeln!(
            f,
            "{}{} {}{}",
            padding,
            bar,
            " ".repeat(loc.begin.column),
            "^".repeat(underline_len)
        )?;
        writeln!(f, "{}{}", padding, last_bar)?;
        writeln!(f, "./{}:{}:{}", loc.file.name(), line, col)?;
        Ok(())
    }
}

impl From<io::Error> for Box<Error> {
    #[inline]
    fn from(error: io::Error) -> Box<Error> {
        Box::new(Error {
            kind: ErrorKindInner::IoError(Arc::new(error)),
        })
    }
}

impl From<FromUtf8Error> for Box<Error> {
    #[inline]
    fn from(error: FromUtf8Error) -> Box<Error> {
        Box::new(Error {
            kind: ErrorKindInner::FromUtf8Error(format!(
                "Invalid UTF-8 character \"\\x{:X?}\"",
                error.as_bytes()[error.utf8_error().valid_up_to()]
            )),
        })
    }
}

impl From<(&str, Span)> for Box<Error> {
    #[inline]
    fn from(error: (&str, Span)) -> Box<Error> {
        Box::new(Error {
            kind: ErrorKindInner::Raw(error.0.to_owned(), error.1),
        })
    }
}

impl From<(String, Span)> for Box<Error> {
    #[inline]
    fn from(error: (String, Span)) -> Box<Error> {
        Box::new(Error {
            kind: ErrorKindInner::Raw(error.0, error.1),
        })
    }
}

impl StdError for Error {
    #[inline]
    fn description(&self) -> &'static str {
        "attribute conversion error"
    }
}
