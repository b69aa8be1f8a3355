use crate::{error::Result, lexer::Lexer, Token};

pub(crate) fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c as u32 >= 0x0080
}

pub(crate) fn is_name(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;

    fn whitespace_without_comments(&mut self) {
        while matches!(
            self.toks().peek(),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            self.toks_mut().next();
        }
    }

    fn whitespace(&mut self) -> Result<()> {
        loop {
            self.whitespace_without_comments();

            if !self.scan_comment()? {
                break;
            }
        }

        Ok(())
    }

    fn scan_comment(&mut self) -> Result<bool> {
        if !self.next_matches("/*") {
            return Ok(false);
        }

        self.skip_loud_comment()?;
        Ok(true)
    }

    fn next_matches(&mut self, s: &str) -> bool {
        for (idx, c) in s.chars().enumerate() {
            match self.toks().peek_n(idx) {
                Some(Token { kind, .. }) if kind == c => {}
                _ => return false,
            }
        }

        true
    }

    fn skip_loud_comment(&mut self) -> Result<()> {
        debug_assert!(self.next_matches("/*"));
        self.toks_mut().next();
        self.toks_mut().next();

        while let Some(next) = self.toks_mut().next() {
            if next.kind != '*' {
                continue;
            }

            while self.scan_char('*') {}

            if self.scan_char('/') {
                return Ok(());
            }
        }

        Err(("expected more input.", self.toks().current_span()).into())
    }

    fn scan_char(&mut self, c: char) -> bool {
        if let Some(Token { kind, .. }) = self.toks().peek() {
            if kind == c {
                self.toks_mut().next();
                return true;
            }
        }

        false
    }

    fn expect_char(&mut self, c: char) -> Result<()> {
        match self.toks().peek() {
            Some(tok) if tok.kind == c => {
                self.toks_mut().next();
                Ok(())
            }
            Some(..) | None => {
                Err((format!("expected \"{}\".", c), self.toks().current_span()).into())
            }
        }
    }

    /// Property names: a name-start character (optionally after a single
    /// `-`) followed by name characters. Escapes are not supported.
    fn parse_identifier(&mut self) -> Result<String> {
        let start = self.toks().cursor();
        let mut text = String::new();

        if self.scan_char('-') {
            text.push('-');
        }

        match self.toks().peek() {
            Some(Token { kind, .. }) if is_name_start(kind) => {
                self.toks_mut().next();
                text.push(kind);
            }
            Some(..) | None => {
                self.toks_mut().set_cursor(start);
                return Err(("Expected identifier.", self.toks().current_span()).into());
            }
        }

        while let Some(Token { kind, .. }) = self.toks().peek() {
            if !is_name(kind) {
                break;
            }

            self.toks_mut().next();
            text.push(kind);
        }

        Ok(text)
    }

    /// Consume a quoted string, including its quotes, into `buffer`
    fn parse_string(&mut self, buffer: &mut String) -> Result<()> {
        let quote = match self.toks_mut().next() {
            Some(Token {
                kind: q @ ('"' | '\''),
                ..
            }) => q,
            Some(..) | None => {
                return Err(("Expected string.", self.toks().prev_span()).into());
            }
        };

        buffer.push(quote);

        while let Some(tok) = self.toks_mut().next() {
            match tok.kind {
                '\n' => return Err(("Expected quote.", self.toks().prev_span()).into()),
                '\\' => {
                    buffer.push('\\');
                    if let Some(escaped) = self.toks_mut().next() {
                        buffer.push(escaped.kind);
                    }
                }
                c => {
                    buffer.push(c);
                    if c == quote {
                        return Ok(());
                    }
                }
            }
        }

        Err(("Expected quote.", self.toks().current_span()).into())
    }
}
