//! Front-end collaborators consumed by the highlighter
//!
//! The highlighter does not lex, track positions, or know any keywords
//! itself. It talks to a compiler front end through the narrow traits
//! defined here, so tests can drive it with synthetic token streams.

use std::borrow::Cow;

use crate::lang::LangOptions;

/// Identifies one source buffer known to a `PositionResolver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// A byte position inside a specific file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: FileId,
    pub offset: u32,
}

impl SourceLocation {
    pub fn new(file: FileId, offset: u32) -> Self {
        Self { file, offset }
    }

    /// The location `delta` bytes further into the same file
    pub fn with_offset(self, delta: u32) -> Self {
        Self {
            file: self.file,
            offset: self.offset.saturating_add(delta),
        }
    }
}

/// Kinds of literal tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Numeric,
    Char,
    String,
    RawString,
}

/// Token kind tags as produced by a raw (non-preprocessing) lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier not yet looked up in any keyword table
    RawIdentifier,
    Literal(LiteralKind),
    Comment,
    Whitespace,
    Punct,
    /// Stray byte or unterminated literal
    Unknown,
}

/// One lexed token, borrowing its raw text from the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub location: SourceLocation,
    /// Length in bytes
    pub length: u32,
    /// Raw text exactly as it appears in the buffer
    pub raw: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, location: SourceLocation, raw: &'a str) -> Self {
        Self {
            kind,
            location,
            length: u32::try_from(raw.len()).unwrap_or(u32::MAX),
            raw,
        }
    }

    /// One past the last byte of the token
    pub fn end_location(&self) -> SourceLocation {
        self.location.with_offset(self.length)
    }

    /// Identifier spelling, for raw identifiers only
    pub fn raw_identifier(&self) -> Option<&'a str> {
        (self.kind == TokenKind::RawIdentifier).then_some(self.raw)
    }

    /// Whether the highlighter cares about this token at all
    pub fn is_highlightable(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::RawIdentifier | TokenKind::Literal(_) | TokenKind::Comment
        )
    }
}

/// Restartable, whitespace-preserving lexer
pub trait Tokenizer {
    /// Lex `buffer` (the contents of `file`) starting at byte `from`.
    ///
    /// Tokens come out in ascending source order and whitespace is kept as
    /// tokens of its own.
    fn tokenize<'a>(
        &self,
        file: FileId,
        buffer: &'a str,
        from: usize,
    ) -> Box<dyn Iterator<Item = Token<'a>> + 'a>;

    /// Spelling of a token after whatever normalization the language applies.
    /// Only called for tokens that span more than one line.
    fn spelling<'a>(&self, token: &Token<'a>) -> Cow<'a, str> {
        Cow::Borrowed(token.raw)
    }
}

/// Maps source locations to lines and columns
pub trait PositionResolver {
    /// Contents of `file`, if it is known
    fn buffer(&self, file: FileId) -> Option<&str>;

    /// 0-based line of `loc`; `None` if the location is invalid
    fn line_of(&self, loc: SourceLocation) -> Option<u32>;

    /// 0-based byte column of `loc`; `None` if the location is invalid
    fn column_of(&self, loc: SourceLocation) -> Option<u32>;
}

/// Decides which identifiers are reserved words
pub trait KeywordTable {
    fn is_keyword(&self, spelling: &str, lang: &LangOptions) -> bool;

    /// False when looking an identifier up could itself emit a diagnostic,
    /// e.g. when identifiers are resolved through an external source.
    fn supports_safe_lookup(&self) -> bool {
        true
    }
}

/// Cache of positions from which re-lexing gives the same tokens as lexing
/// from the start of the file
pub trait ResumePoints {
    /// Nearest known-safe offset at or before `position`
    fn resume_point_before(&self, file: FileId, position: usize) -> Option<usize>;
}

/// Everything the highlighter needs from a front end
#[derive(Clone, Copy)]
pub struct Frontend<'f> {
    pub tokenizer: &'f dyn Tokenizer,
    pub positions: &'f dyn PositionResolver,
    pub keywords: &'f dyn KeywordTable,
    pub resume: &'f dyn ResumePoints,
}

impl<'f> Frontend<'f> {
    pub fn new(
        tokenizer: &'f dyn Tokenizer,
        positions: &'f dyn PositionResolver,
        keywords: &'f dyn KeywordTable,
        resume: &'f dyn ResumePoints,
    ) -> Self {
        Self {
            tokenizer,
            positions,
            keywords,
            resume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_location() {
        let token = Token::new(
            TokenKind::Comment,
            SourceLocation::new(FileId(0), 10),
            "/* x */",
        );
        assert_eq!(token.length, 7);
        assert_eq!(token.end_location(), SourceLocation::new(FileId(0), 17));
    }

    #[test]
    fn test_raw_identifier() {
        let loc = SourceLocation::new(FileId(0), 0);
        let ident = Token::new(TokenKind::RawIdentifier, loc, "while");
        let number = Token::new(TokenKind::Literal(LiteralKind::Numeric), loc, "42");
        assert_eq!(ident.raw_identifier(), Some("while"));
        assert_eq!(number.raw_identifier(), None);
    }

    #[test]
    fn test_highlightable_kinds() {
        let loc = SourceLocation::new(FileId(0), 0);
        assert!(Token::new(TokenKind::RawIdentifier, loc, "x").is_highlightable());
        assert!(Token::new(TokenKind::Comment, loc, "//").is_highlightable());
        assert!(Token::new(TokenKind::Literal(LiteralKind::Char), loc, "'a'").is_highlightable());
        assert!(!Token::new(TokenKind::Whitespace, loc, " ").is_highlightable());
        assert!(!Token::new(TokenKind::Punct, loc, ";").is_highlightable());
        assert!(!Token::new(TokenKind::Unknown, loc, "@").is_highlightable());
    }
}
