use std::sync::Arc;

use codemap::{File, Span};

/// A single source character. Line endings (`\r\n`, `\r` and form feed) are
/// normalized to `\n`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: char,
    /// Byte offset into the file
    pos: u32,
}

/// Cursor over the characters of a declaration block
#[derive(Debug, Clone)]
pub(crate) struct Lexer {
    toks: Vec<Token>,
    file_span: Span,
    cursor: usize,
}

fn tokenize(source: &str) -> Vec<Token> {
    let mut toks = Vec::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let kind = match c {
            '\r' => {
                chars.next_if(|&(_, next)| next == '\n');
                '\n'
            }
            '\x0C' => '\n',
            c => c,
        };

        toks.push(Token {
            kind,
            pos: pos as u32,
        });
    }

    toks
}

impl Lexer {
    pub fn new_from_file(file: &Arc<File>) -> Self {
        Self {
            toks: tokenize(file.source()),
            file_span: file.span,
            cursor: 0,
        }
    }

    /// Span of the token at `idx`, clamped to the last token. Empty input
    /// yields an empty span.
    fn span_of(&self, idx: usize) -> Span {
        let tok = match self.toks.get(idx).or_else(|| self.toks.last()) {
            Some(tok) => tok,
            None => return self.file_span.subspan(0, 0),
        };

        let start = u64::from(tok.pos);
        self.file_span
            .subspan(start, start + tok.kind.len_utf8() as u64)
    }

    /// From the token at `start` through the last consumed token
    pub fn span_from(&self, start: usize) -> Span {
        self.span_of(start).merge(self.prev_span())
    }

    pub fn prev_span(&self) -> Span {
        self.span_of(self.cursor.saturating_sub(1))
    }

    pub fn current_span(&self) -> Span {
        self.span_of(self.cursor)
    }

    pub fn peek(&self) -> Option<Token> {
        self.peek_n(0)
    }

    pub fn peek_n(&self, n: usize) -> Option<Token> {
        self.toks.get(self.cursor + n).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.peek()?;
        self.cursor += 1;
        Some(tok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.toks.len() - self.cursor;
        (remaining, Some(remaining))
    }
}
