/*!
This crate converts raw CSS declaration values into validated, normalized
attribute values, as a styled-text document model stores them.

Each supported property carries a validation rule: a fixed keyword set, a
length policy (are negative values allowed? percentages? which keywords stand
in for a length?), a color list, or `url(...)`-or-`none`. Values that fail
their rule are either dropped ([`Mode::Strict`], the default) or replaced by
a per-property fallback ([`Mode::Lenient`]).

## Use as library
```
# use cssattr_converter as cssattr;
use cssattr::{AttributeSet, Converter, Options, Property};

let converter = Converter::new(&Options::default());
let mut attributes = AttributeSet::new();

assert!(attributes.add_css_attribute(&converter, Property::BorderColor, "red green"));
assert!(!attributes.add_css_attribute(&converter, Property::Clear, "sideways"));

assert_eq!(attributes.len(), 1);
assert_eq!(attributes.get(Property::BorderColor).unwrap().to_string(), "red green");
```

Whole declaration blocks can be parsed as well:
```
# use cssattr_converter as cssattr;
fn main() -> Result<(), Box<cssattr::Error>> {
    let attributes = cssattr::parse_declarations(
        "width: 50%; line-height: normal",
        &cssattr::Options::default(),
    )?;
    assert_eq!(attributes.to_string(), "width: 50%; line-height: normal;");
    Ok(())
}
```

## Use as binary
```bash
cargo install cssattr
cssattr style.css
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    unknown_lints,
)]

use std::path::Path;

#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

use codemap::CodeMap;

pub use crate::attribute_set::AttributeSet;
pub use crate::color::Color;
pub use crate::converter::Converter;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{Mode, Options};
pub use crate::property::Property;
pub use crate::rule::{
    Fallback, LengthPolicy, PropertyDescriptor, Rejection, RejectionKind, Rule,
};
pub use crate::unit::Unit;
pub use crate::value::{Length, Number, QuoteKind, Url, Value, ValueKind};
pub(crate) use crate::lexer::Token;
use crate::{lexer::Lexer, parse::DeclarationParser};

pub use codemap;

mod attribute_set;
mod color;
mod converter;
mod error;
mod fs;
mod lexer;
mod logger;
mod options;
mod parse;
mod property;
mod rule;
mod unit;
mod value;

fn raw_to_parse_error(map: &CodeMap, err: Error, unicode: bool) -> Box<Error> {
    let (message, span) = err.raw();
    Box::new(Error::from_loc(message, map.look_up_span(span), unicode))
}

fn parse_declarations_with_file_name<P: AsRef<Path>>(
    input: String,
    file_name: P,
    options: &Options,
) -> Result<AttributeSet> {
    let mut map = CodeMap::new();
    let path = file_name.as_ref();
    let file = map.add_file(path.to_string_lossy().into_owned(), input);
    let lexer = Lexer::new_from_file(&file);

    DeclarationParser::new(lexer, options, &map)
        .parse()
        .map_err(|e| raw_to_parse_error(&map, *e, options.unicode_error_messages))
}

/// Convert a single value, resolving the property by name
///
/// ```
/// # use cssattr_converter as cssattr;
/// let value = cssattr::convert("text-indent", "-11.1pt", &cssattr::Options::default());
/// assert_eq!(value.unwrap().to_string(), "-11.1pt");
/// ```
#[inline]
pub fn convert(property: &str, value: &str, options: &Options) -> Option<Value> {
    Converter::new(options).convert_named(property, value)
}

/// Parse a declaration block from a path
///
/// n.b. `cssattr` does not currently support files or paths that are not valid UTF-8
///
/// ```no_run
/// # use cssattr_converter as cssattr;
/// fn main() -> Result<(), Box<cssattr::Error>> {
///     let attributes = cssattr::from_path("style.css", &cssattr::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_path<P: AsRef<Path>>(p: P, options: &Options) -> Result<AttributeSet> {
    let input = fs::read_source(options.fs, p.as_ref())?;
    parse_declarations_with_file_name(input, p, options)
}

/// Parse a declaration block from a string
///
/// ```
/// # use cssattr_converter as cssattr;
/// fn main() -> Result<(), Box<cssattr::Error>> {
///     let attributes = cssattr::parse_declarations(
///         "clear: both; font-variant: sideways",
///         &cssattr::Options::default().quiet(true),
///     )?;
///     assert_eq!(attributes.to_string(), "clear: both;");
///     Ok(())
/// }
/// ```
#[inline]
pub fn parse_declarations<S: Into<String>>(input: S, options: &Options) -> Result<AttributeSet> {
    parse_declarations_with_file_name(input.into(), "stdin", options)
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = convert)]
pub fn convert_js(property: String, value: String, lenient: bool) -> Option<String> {
    let mode = if lenient { Mode::Lenient } else { Mode::Strict };
    let options = Options::default().mode(mode).logger(&NullLogger);
    convert(&property, &value, &options).map(|value| value.to_string())
}
