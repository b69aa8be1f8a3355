use codemap::{CodeMap, Span};

use crate::{
    error::Result, lexer::Lexer, AttributeSet, Converter, Options, Property, Token,
};

pub(crate) use base::BaseParser;

mod base;

/// Parses a declaration block, e.g. the contents of a `style` attribute,
/// into an [`AttributeSet`].
///
/// Malformed block syntax is an error. A declaration whose property is
/// unknown or whose value the converter rejects is dropped with a warning.
pub(crate) struct DeclarationParser<'a, 'b> {
    toks: Lexer,
    converter: Converter<'a>,
    options: &'b Options<'a>,
    map: &'b CodeMap,
}

impl<'a, 'b> BaseParser for DeclarationParser<'a, 'b> {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl<'a, 'b> DeclarationParser<'a, 'b> {
    pub fn new(toks: Lexer, options: &'b Options<'a>, map: &'b CodeMap) -> Self {
        Self {
            toks,
            converter: Converter::new(options),
            options,
            map,
        }
    }

    pub fn parse(mut self) -> Result<AttributeSet> {
        let mut attributes = AttributeSet::new();

        loop {
            self.whitespace()?;

            if self.toks.peek().is_none() {
                break;
            }

            if self.scan_char(';') {
                continue;
            }

            self.parse_declaration(&mut attributes)?;
            self.scan_char(';');
        }

        Ok(attributes)
    }

    fn parse_declaration(&mut self, attributes: &mut AttributeSet) -> Result<()> {
        let start = self.toks.cursor();
        let name = self.parse_identifier()?;
        let name_span = self.toks.span_from(start);

        self.whitespace()?;
        self.expect_char(':')?;
        self.whitespace()?;

        let value = self.parse_value()?;

        if value.is_empty() {
            return Err(("Expected expression.", self.toks.current_span()).into());
        }

        let span = name_span.merge(self.toks.prev_span());

        let property = match Property::from_name(&name) {
            Some(property) => property,
            None => {
                self.warn(span, &format!("Unknown property \"{}\"; declaration ignored.", name));
                return Ok(());
            }
        };

        match self.converter.try_convert(property, &value) {
            Ok(value) => {
                attributes.add(property, value);
            }
            Err(rejection) => self.warn(
                span,
                &format!(
                    "Invalid value for \"{}\": {} Declaration ignored.",
                    property, rejection
                ),
            ),
        }

        Ok(())
    }

    /// Everything up to the next top-level `;`, with comments and a trailing
    /// `!important` removed
    fn parse_value(&mut self) -> Result<String> {
        let mut buffer = String::new();
        let mut parens = 0_usize;

        while let Some(Token { kind, .. }) = self.toks.peek() {
            match kind {
                ';' if parens == 0 => break,
                '"' | '\'' => self.parse_string(&mut buffer)?,
                '/' if self.next_matches("/*") => {
                    self.skip_loud_comment()?;
                    if !buffer.ends_with(|c: char| c.is_ascii_whitespace()) {
                        buffer.push(' ');
                    }
                }
                c => {
                    self.toks.next();
                    match c {
                        '(' => parens += 1,
                        ')' => {
                            parens = match parens.checked_sub(1) {
                                Some(parens) => parens,
                                None => {
                                    return Err(
                                        ("expected \"(\".", self.toks.prev_span()).into()
                                    )
                                }
                            };
                        }
                        _ => {}
                    }
                    buffer.push(c);
                }
            }
        }

        if parens != 0 {
            return Err(("expected \")\".", self.toks.current_span()).into());
        }

        let mut value = buffer.trim_end();

        if let Some(idx) = value.rfind('!') {
            if value[idx + 1..].trim_start().eq_ignore_ascii_case("important") {
                value = value[..idx].trim_end();
            }
        }

        Ok(value.to_owned())
    }

    fn warn(&self, span: Span, message: &str) {
        if self.options.quiet {
            return;
        }

        self.options
            .logger
            .warning(self.map.look_up_span(span), message);
    }
}
