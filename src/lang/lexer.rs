//! Raw C-family lexer
//!
//! Produces the tokens the highlighter needs without preprocessing:
//! whitespace is kept, identifiers are left unresolved, and every byte of
//! the buffer belongs to exactly one token. Lexing can resume at any token
//! boundary and yields the same tokens as lexing from the start.

use super::options::LangOptions;
use crate::highlight::{FileId, LiteralKind, SourceLocation, Token, TokenKind, Tokenizer};

const PUNCT_3: [&str; 5] = ["<<=", ">>=", "...", "->*", "<=>"];

const PUNCT_2: [&str; 22] = [
    "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "##", "::", ".*",
];

/// Longest raw string delimiter the language allows
const MAX_RAW_DELIMITER: usize = 16;

/// Lexer for C and C++ source text
#[derive(Debug, Clone, Copy, Default)]
pub struct RawLexer {
    lang: LangOptions,
}

impl RawLexer {
    pub fn new(lang: LangOptions) -> Self {
        Self { lang }
    }

    /// Lex a whole buffer into a vector
    pub fn lex_all<'a>(&self, file: FileId, buffer: &'a str) -> Vec<Token<'a>> {
        TokenStream::new(file, buffer, 0, self.lang).collect()
    }
}

impl Tokenizer for RawLexer {
    fn tokenize<'a>(
        &self,
        file: FileId,
        buffer: &'a str,
        from: usize,
    ) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(TokenStream::new(file, buffer, from, self.lang))
    }
}

/// Iterator over the tokens of one buffer
pub struct TokenStream<'a> {
    file: FileId,
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    lang: LangOptions,
}

impl<'a> TokenStream<'a> {
    pub fn new(file: FileId, src: &'a str, from: usize, lang: LangOptions) -> Self {
        let pos = if src.is_char_boundary(from) { from } else { 0 };
        Self {
            file,
            src,
            bytes: src.as_bytes(),
            pos,
            lang,
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    /// Length of the line break starting `ahead` bytes from here, if any
    fn newline_len(&self, ahead: usize) -> usize {
        match (self.peek(ahead), self.peek(ahead + 1)) {
            (Some(b'\r'), Some(b'\n')) => 2,
            (Some(b'\r' | b'\n'), _) => 1,
            _ => 0,
        }
    }

    fn scan(&mut self) -> TokenKind {
        let b = self.bytes[self.pos];
        match b {
            b' ' | b'\t' | b'\x0b' | b'\x0c' | b'\r' | b'\n' => self.whitespace(),
            b'/' if self.peek(1) == Some(b'/') => self.line_comment(),
            b'/' if self.peek(1) == Some(b'*') => self.block_comment(),
            b'"' => {
                self.pos += 1;
                self.quoted(b'"', LiteralKind::String)
            }
            b'\'' => {
                self.pos += 1;
                self.quoted(b'\'', LiteralKind::Char)
            }
            b'0'..=b'9' => self.number(),
            b'.' if self.peek(1).is_some_and(|c| c.is_ascii_digit()) => self.number(),
            b'\\' if self.newline_len(1) > 0 => {
                self.pos += 1 + self.newline_len(1);
                TokenKind::Whitespace
            }
            _ if is_ident_start(b) => self.identifier(),
            _ => self.punct(),
        }
    }

    fn whitespace(&mut self) -> TokenKind {
        while self
            .peek(0)
            .is_some_and(|c| matches!(c, b' ' | b'\t' | b'\x0b' | b'\x0c' | b'\r' | b'\n'))
        {
            self.pos += 1;
        }
        TokenKind::Whitespace
    }

    /// `// ...` up to the end of the line; backslash-newline continues it
    fn line_comment(&mut self) -> TokenKind {
        self.pos += 2;
        while let Some(c) = self.peek(0) {
            match c {
                b'\n' | b'\r' => break,
                b'\\' if self.newline_len(1) > 0 => self.pos += 1 + self.newline_len(1),
                _ => self.pos += 1,
            }
        }
        TokenKind::Comment
    }

    /// `/* ... */`; an unterminated comment runs to the end of the buffer
    fn block_comment(&mut self) -> TokenKind {
        self.pos += 2;
        match self.src[self.pos..].find("*/") {
            Some(i) => self.pos += i + 2,
            None => self.pos = self.bytes.len(),
        }
        TokenKind::Comment
    }

    /// Body of a quoted literal, just after the opening quote.
    ///
    /// Backslash escapes the next byte, including a line break. A bare line
    /// break or end of buffer leaves the literal unterminated.
    fn quoted(&mut self, close: u8, kind: LiteralKind) -> TokenKind {
        while let Some(c) = self.peek(0) {
            match c {
                b'\\' => {
                    let escaped = self.newline_len(1).max(usize::from(self.peek(1).is_some()));
                    self.pos += 1 + escaped;
                }
                b'\n' | b'\r' => return TokenKind::Unknown,
                _ if c == close => {
                    self.pos += 1;
                    return TokenKind::Literal(kind);
                }
                _ => self.pos += 1,
            }
        }
        TokenKind::Unknown
    }

    /// `R"delim( ... )delim"`, positioned at the opening quote.
    ///
    /// The delimiter is ASCII only, so an invalid one always ends the
    /// token on a char boundary.
    fn raw_string(&mut self) -> TokenKind {
        self.pos += 1;
        let delim_start = self.pos;
        while let Some(c) = self.peek(0) {
            if c == b'(' {
                break;
            }
            let too_long = self.pos - delim_start >= MAX_RAW_DELIMITER;
            if too_long || !is_raw_delimiter_char(c) {
                return TokenKind::Unknown;
            }
            self.pos += 1;
        }
        if self.peek(0).is_none() {
            return TokenKind::Unknown;
        }

        let terminator = format!("){}\"", &self.src[delim_start..self.pos]);
        self.pos += 1;
        match self.src[self.pos..].find(&terminator) {
            Some(i) => {
                self.pos += i + terminator.len();
                TokenKind::Literal(LiteralKind::RawString)
            }
            None => {
                self.pos = self.bytes.len();
                TokenKind::Unknown
            }
        }
    }

    /// Preprocessing number: digits, letters, `.`, signed exponents, and
    /// digit separators where the language has them
    fn number(&mut self) -> TokenKind {
        self.pos += 1;
        while let Some(c) = self.peek(0) {
            match c {
                b'e' | b'E' | b'p' | b'P' if matches!(self.peek(1), Some(b'+' | b'-')) => {
                    self.pos += 2;
                }
                b'\''
                    if self.lang.digit_separators()
                        && self.peek(1).is_some_and(|n| n.is_ascii_alphanumeric()) =>
                {
                    self.pos += 1;
                }
                _ if c.is_ascii_alphanumeric() || c == b'_' || c == b'.' => self.pos += 1,
                _ => break,
            }
        }
        TokenKind::Literal(LiteralKind::Numeric)
    }

    /// Identifier, or the encoding prefix of a string or character literal
    fn identifier(&mut self) -> TokenKind {
        let src = self.src;
        let start = self.pos;
        while self.peek(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let ident = &src[start..self.pos];

        match self.peek(0) {
            Some(b'"') if self.lang.raw_string_literals() && is_raw_prefix(ident) => self.raw_string(),
            Some(b'"') if is_encoding_prefix(ident) => {
                self.pos += 1;
                self.quoted(b'"', LiteralKind::String)
            }
            Some(b'\'') if is_encoding_prefix(ident) => {
                self.pos += 1;
                self.quoted(b'\'', LiteralKind::Char)
            }
            _ => TokenKind::RawIdentifier,
        }
    }

    fn punct(&mut self) -> TokenKind {
        let rest = &self.src[self.pos..];
        if let Some(p) = PUNCT_3.iter().chain(PUNCT_2.iter()).find(|p| rest.starts_with(**p)) {
            self.pos += p.len();
            return TokenKind::Punct;
        }
        let b = self.bytes[self.pos];
        self.pos += 1;
        if b"[]{}()<>.,;:?!~+-*/%^&|=#".contains(&b) {
            TokenKind::Punct
        } else {
            TokenKind::Unknown
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        let kind = self.scan();
        let offset = u32::try_from(start).ok()?;
        Some(Token::new(
            kind,
            SourceLocation::new(self.file, offset),
            &self.src[start..self.pos],
        ))
    }
}

/// Non-ASCII bytes are accepted so that UTF-8 identifiers stay whole
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// Basic source characters other than space, parentheses, backslash and
/// the control characters
fn is_raw_delimiter_char(c: u8) -> bool {
    c.is_ascii_graphic() && !matches!(c, b')' | b'\\')
}

fn is_encoding_prefix(ident: &str) -> bool {
    matches!(ident, "L" | "u" | "U" | "u8")
}

fn is_raw_prefix(ident: &str) -> bool {
    matches!(ident, "R" | "LR" | "uR" | "UR" | "u8R")
}
