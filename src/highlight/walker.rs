//! Walks the token stream up to the target line
//!
//! Only raw identifiers, literals and comments are forwarded, and only
//! those that intersect the target line. Walking stops at the first token
//! that starts after the target line; since tokens come out in source
//! order, nothing later can touch it.

use super::frontend::{PositionResolver, Token};

/// A token known to intersect the target line
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineToken<'a> {
    pub token: Token<'a>,
    pub start_line: u32,
    pub end_line: u32,
    pub start_col: u32,
}

impl LineToken<'_> {
    pub fn is_multiline(&self) -> bool {
        self.start_line != self.end_line
    }
}

pub(crate) struct LineWalker<'a, 'p> {
    tokens: Box<dyn Iterator<Item = Token<'a>> + 'a>,
    positions: &'p dyn PositionResolver,
    line: u32,
    done: bool,
    lexed: usize,
}

impl<'a, 'p> LineWalker<'a, 'p> {
    pub fn new(
        tokens: Box<dyn Iterator<Item = Token<'a>> + 'a>,
        positions: &'p dyn PositionResolver,
        line: u32,
    ) -> Self {
        Self {
            tokens,
            positions,
            line,
            done: false,
            lexed: 0,
        }
    }

    /// Number of tokens pulled from the lexer so far
    pub fn lexed(&self) -> usize {
        self.lexed
    }
}

impl<'a> Iterator for LineWalker<'a, '_> {
    type Item = LineToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(token) = self.tokens.next() else {
                self.done = true;
                break;
            };
            self.lexed += 1;

            if !token.is_highlightable() {
                continue;
            }

            let Some(end_line) = self.positions.line_of(token.end_location()) else {
                tracing::debug!(offset = token.location.offset, "skipping token with invalid end location");
                continue;
            };
            if end_line < self.line {
                continue;
            }

            let Some(start_line) = self.positions.line_of(token.location) else {
                tracing::debug!(offset = token.location.offset, "skipping token with invalid location");
                continue;
            };
            if start_line > self.line {
                self.done = true;
                break;
            }

            let Some(start_col) = self.positions.column_of(token.location) else {
                tracing::debug!(offset = token.location.offset, "skipping token with invalid column");
                continue;
            };

            return Some(LineToken {
                token,
                start_line,
                end_line,
                start_col,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::frontend::{LiteralKind, TokenKind, Tokenizer};
    use crate::highlight::test_support::{FakeSource, FakeTokens};
    use pretty_assertions::assert_eq;

    const TEXT: &str = "int a;\nb = 1; // c\nreturn 2;\nd;";

    fn tokens() -> FakeTokens {
        FakeTokens::new(vec![
            (TokenKind::RawIdentifier, 0, 3),
            (TokenKind::Whitespace, 3, 4),
            (TokenKind::RawIdentifier, 4, 5),
            (TokenKind::Punct, 5, 6),
            (TokenKind::Whitespace, 6, 7),
            (TokenKind::RawIdentifier, 7, 8),
            (TokenKind::Punct, 9, 10),
            (TokenKind::Literal(LiteralKind::Numeric), 11, 12),
            (TokenKind::Punct, 12, 13),
            (TokenKind::Comment, 14, 18),
            (TokenKind::Whitespace, 18, 19),
            (TokenKind::RawIdentifier, 19, 25),
            (TokenKind::Literal(LiteralKind::Numeric), 26, 27),
            (TokenKind::RawIdentifier, 29, 30),
        ])
    }

    fn walk(source: &FakeSource, line: u32) -> (Vec<(&'static str, u32, u32)>, usize) {
        let fake = tokens();
        let stream = fake.tokenize(FakeSource::FILE, TEXT, 0);
        let mut walker = LineWalker::new(stream, source, line);
        let found = walker
            .by_ref()
            .map(|lt| {
                let raw = &TEXT[lt.token.location.offset as usize..][..lt.token.length as usize];
                (raw, lt.start_line, lt.start_col)
            })
            .collect();
        (found, walker.lexed())
    }

    #[test]
    fn test_only_target_line_tokens() {
        let source = FakeSource::new(TEXT);
        let (found, _) = walk(&source, 1);
        assert_eq!(found, vec![("b", 1, 0), ("1", 1, 4), ("// c", 1, 7)]);
    }

    #[test]
    fn test_stops_after_target_line() {
        let source = FakeSource::new(TEXT);
        let (_, lexed) = walk(&source, 1);
        // Everything up to and including `return`, the first token of line 2.
        assert_eq!(lexed, 12);
    }

    #[test]
    fn test_invalid_location_is_skipped() {
        let source = FakeSource::new(TEXT).invalid_at(11);
        let (found, _) = walk(&source, 1);
        assert_eq!(found, vec![("b", 1, 0), ("// c", 1, 7)]);
    }

    #[test]
    fn test_line_past_end() {
        let source = FakeSource::new(TEXT);
        let (found, lexed) = walk(&source, 9);
        assert!(found.is_empty());
        assert_eq!(lexed, 14);
    }
}
