//! Code snippet highlighting
//!
//! This module turns one line of a source file into colored spans for
//! diagnostic output:
//! - pick a safe point to resume lexing from
//! - walk tokens forward until the target line is passed
//! - classify comments, literals and keywords
//! - cut multi-line tokens down to the part on the target line

mod classify;
mod frontend;
mod highlighter;
mod resume;
mod split;
mod style;
mod walker;

#[cfg(test)]
mod test_support;

pub use frontend::{
    FileId, Frontend, KeywordTable, LiteralKind, PositionResolver, ResumePoints, SourceLocation,
    Token, TokenKind, Tokenizer,
};
pub use highlighter::Highlighter;
pub use style::{Color, HighlightStyle, Palette, Style, StyleSpan};
