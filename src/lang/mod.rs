//! C and C++ front end
//!
//! Concrete implementations of the highlighter's collaborators: a raw
//! lexer, a source manager with line tables, the keyword table for each
//! language standard, and save points for resuming the lexer.

mod keywords;
mod lexer;
mod options;
mod save_points;
mod source;

pub use keywords::Keywords;
pub use lexer::{RawLexer, TokenStream};
pub use options::{LangOptions, LangStandard};
pub use save_points::SavePoints;
pub use source::{SourceFile, SourceManager};
