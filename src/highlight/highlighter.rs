//! Per-line highlighting of code snippets

use std::time::Instant;

use super::classify::classify;
use super::frontend::{FileId, Frontend};
use super::resume::resume_offset;
use super::split::line_fragment;
use super::style::StyleSpan;
use super::walker::LineWalker;
use crate::lang::LangOptions;

/// Produces style spans for single lines of a source file.
///
/// Holds no mutable state: highlighting the same line twice gives the same
/// result, and a shared `Highlighter` may be used from several threads as
/// long as the front end's collaborators allow concurrent reads.
#[derive(Clone, Copy)]
pub struct Highlighter<'f> {
    frontend: Option<Frontend<'f>>,
    lang: LangOptions,
}

impl<'f> Highlighter<'f> {
    /// Create a highlighter. Without a front end every line comes back empty.
    pub fn new(frontend: Option<Frontend<'f>>, lang: LangOptions) -> Self {
        Self { frontend, lang }
    }

    /// Compute the style spans of one line.
    ///
    /// `line` is 0-based and `line_start` is the byte offset of its first
    /// character in the file's buffer. The spans are sorted by start column
    /// and never overlap. Nothing here fails: problems only mean fewer
    /// spans.
    pub fn highlight_line(&self, line: u32, file: FileId, line_start: usize) -> Vec<StyleSpan> {
        let Some(frontend) = self.frontend else {
            return Vec::new();
        };

        // A lookup could report a diagnostic while one is being rendered.
        if !frontend.keywords.supports_safe_lookup() {
            return Vec::new();
        }

        let Some(buffer) = frontend.positions.buffer(file) else {
            return Vec::new();
        };

        let began = Instant::now();
        let from = resume_offset(frontend.resume, file, buffer.len(), line_start);
        let tokens = frontend.tokenizer.tokenize(file, buffer, from);
        let mut walker = LineWalker::new(tokens, frontend.positions, line);

        let mut spans = Vec::new();
        for lt in walker.by_ref() {
            let Some(style) = classify(&lt.token, frontend.keywords, &self.lang) else {
                continue;
            };

            let range = if lt.is_multiline() {
                let Some(end_col) = frontend.positions.column_of(lt.token.end_location()) else {
                    continue;
                };
                let spelling = frontend.tokenizer.spelling(&lt.token);
                line_fragment(
                    &spelling,
                    line - lt.start_line,
                    lt.end_line - lt.start_line,
                    lt.start_col,
                    end_col,
                )
            } else {
                Some((lt.start_col, lt.start_col.saturating_add(lt.token.length)))
            };

            if let Some((start, end)) = range {
                if start < end {
                    spans.push(StyleSpan::new(start, end, style));
                }
            }
        }

        tracing::trace!(
            line,
            from,
            lexed = walker.lexed(),
            spans = spans.len(),
            elapsed_us = began.elapsed().as_micros() as u64,
            "highlighted line"
        );
        spans
    }
}
