//! Fake front-end collaborators for unit tests
//!
//! These produce synthetic token streams over a small buffer so the core
//! can be tested without a lexer, including locations the front end
//! refuses to resolve.

use super::frontend::{
    FileId, KeywordTable, PositionResolver, ResumePoints, SourceLocation, Token, TokenKind,
    Tokenizer,
};
use crate::lang::LangOptions;

/// One buffer with `\n`-separated lines
pub(crate) struct FakeSource {
    text: String,
    line_starts: Vec<u32>,
    invalid: Vec<u32>,
}

impl FakeSource {
    pub const FILE: FileId = FileId(0);

    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self {
            text: text.to_string(),
            line_starts,
            invalid: Vec::new(),
        }
    }

    /// Report the location at `offset` as invalid
    pub fn invalid_at(mut self, offset: u32) -> Self {
        self.invalid.push(offset);
        self
    }

    fn resolve(&self, loc: SourceLocation) -> Option<(u32, u32)> {
        if loc.file != Self::FILE
            || self.invalid.contains(&loc.offset)
            || loc.offset as usize > self.text.len()
        {
            return None;
        }
        let line = self.line_starts.partition_point(|&s| s <= loc.offset) - 1;
        Some((line as u32, loc.offset - self.line_starts[line]))
    }
}

impl PositionResolver for FakeSource {
    fn buffer(&self, file: FileId) -> Option<&str> {
        (file == Self::FILE).then_some(self.text.as_str())
    }

    fn line_of(&self, loc: SourceLocation) -> Option<u32> {
        self.resolve(loc).map(|(line, _)| line)
    }

    fn column_of(&self, loc: SourceLocation) -> Option<u32> {
        self.resolve(loc).map(|(_, col)| col)
    }
}

/// Replays a fixed list of `(kind, start, end)` tokens
pub(crate) struct FakeTokens {
    tokens: Vec<(TokenKind, u32, u32)>,
}

impl FakeTokens {
    pub fn new(tokens: Vec<(TokenKind, u32, u32)>) -> Self {
        Self { tokens }
    }
}

impl Tokenizer for FakeTokens {
    fn tokenize<'a>(
        &self,
        file: FileId,
        buffer: &'a str,
        from: usize,
    ) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        let tokens: Vec<Token<'a>> = self
            .tokens
            .iter()
            .filter(|(_, start, _)| *start as usize >= from)
            .map(|&(kind, start, end)| {
                Token::new(
                    kind,
                    SourceLocation::new(file, start),
                    &buffer[start as usize..end as usize],
                )
            })
            .collect();
        Box::new(tokens.into_iter())
    }
}

pub(crate) struct FakeKeywords {
    words: Vec<&'static str>,
    safe: bool,
}

impl FakeKeywords {
    pub fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
            safe: true,
        }
    }

    pub fn unsafe_lookup(mut self) -> Self {
        self.safe = false;
        self
    }
}

impl KeywordTable for FakeKeywords {
    fn is_keyword(&self, spelling: &str, _lang: &LangOptions) -> bool {
        self.words.contains(&spelling)
    }

    fn supports_safe_lookup(&self) -> bool {
        self.safe
    }
}

pub(crate) struct FakeResume(pub Option<usize>);

impl ResumePoints for FakeResume {
    fn resume_point_before(&self, _file: FileId, _position: usize) -> Option<usize> {
        self.0
    }
}
