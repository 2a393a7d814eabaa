//! Token classification

use super::frontend::{KeywordTable, Token, TokenKind};
use super::style::HighlightStyle;
use crate::lang::LangOptions;

/// Identifiers that read as keywords but are literal values
const LITERAL_WORDS: [&str; 3] = ["true", "false", "nullptr"];

/// Decide how a token is drawn; `None` means it is not highlighted.
pub(crate) fn classify(
    token: &Token<'_>,
    keywords: &dyn KeywordTable,
    lang: &LangOptions,
) -> Option<HighlightStyle> {
    match token.kind {
        TokenKind::RawIdentifier => {
            let ident = token.raw;
            if LITERAL_WORDS.contains(&ident) {
                Some(HighlightStyle::Literal)
            } else if keywords.is_keyword(ident, lang) {
                Some(HighlightStyle::Keyword)
            } else {
                None
            }
        }
        TokenKind::Literal(_) => Some(HighlightStyle::Literal),
        TokenKind::Comment => Some(HighlightStyle::Comment),
        TokenKind::Whitespace | TokenKind::Punct | TokenKind::Unknown => None,
    }
}
