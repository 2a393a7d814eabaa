//! snipline - syntax highlighting for C and C++ diagnostic snippets
//!
//! Given a file and a line number, [`Highlighter::highlight_line`] returns
//! the comment, literal and keyword ranges of that one line. It re-lexes
//! from the nearest save point instead of the start of the file, and cuts
//! block comments and raw strings that span several lines down to the part
//! on the requested line.
//!
//! The highlighter talks to its front end only through the traits in
//! [`highlight`]; [`lang`] provides a raw C/C++ lexer, a source manager and
//! keyword tables that implement them.

pub mod config;
pub mod error;
pub mod highlight;
pub mod lang;
pub mod render;

pub use config::Config;
pub use error::{Result, SnipError};
pub use highlight::{FileId, Frontend, HighlightStyle, Highlighter, StyleSpan};
pub use lang::{Keywords, LangOptions, LangStandard, RawLexer, SavePoints, SourceManager};
pub use render::SnippetRenderer;
