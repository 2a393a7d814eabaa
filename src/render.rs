//! Snippet rendering
//!
//! Prints source lines with their highlight spans, either as crossterm
//! color commands or as plain text.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::error::{Result, SnipError};
use crate::highlight::{FileId, HighlightStyle, Highlighter, Palette, Style, StyleSpan};
use crate::lang::SourceManager;

/// Writes highlighted lines to any `Write` sink
#[derive(Debug, Clone)]
pub struct SnippetRenderer {
    pub palette: Palette,
    /// Emit color commands; plain text otherwise
    pub color: bool,
    pub show_line_numbers: bool,
    pub tab_width: usize,
    /// Display columns per line after the gutter (0 = unlimited)
    pub max_width: usize,
}

impl SnippetRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            color: true,
            show_line_numbers: false,
            tab_width: 8,
            max_width: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            palette: config.palette,
            color: config.color,
            show_line_numbers: config.show_line_numbers,
            tab_width: config.tab_width.max(1),
            max_width: config.max_width,
        }
    }

    /// Calculate width needed for line numbers (including separator)
    fn line_number_width(&self, line_count: usize) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let digits = line_count.max(1).to_string().len();
        digits.max(3) + 1
    }

    /// Render 0-based lines `first..=last` of `file`
    pub fn render_snippet<W: Write>(
        &self,
        out: &mut W,
        sources: &SourceManager,
        file: FileId,
        highlighter: &Highlighter<'_>,
        first: usize,
        last: usize,
    ) -> Result<()> {
        let source = sources
            .file(file)
            .ok_or_else(|| SnipError::InvalidArgument(format!("unknown file id {}", file.0)))?;
        let count = source.line_count();
        for line in [first, last] {
            if line >= count {
                return Err(SnipError::LineOutOfRange { line: line + 1, count });
            }
        }

        tracing::debug!(file = source.name(), first, last, "rendering snippet");

        let lnum_width = self.line_number_width(count);
        for line in first..=last {
            let (Some(text), Some(start)) = (source.line_text(line), source.line_start(line)) else {
                continue;
            };

            if self.show_line_numbers {
                let lnum = format!("{:>width$} ", line + 1, width = lnum_width - 1);
                if self.color {
                    queue!(
                        out,
                        SetAttribute(Attribute::Dim),
                        Print(lnum),
                        SetAttribute(Attribute::NormalIntensity)
                    )?;
                } else {
                    out.write_all(lnum.as_bytes())?;
                }
            }

            let spans = highlighter.highlight_line(line as u32, file, start);
            self.write_line(out, text, &spans)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write one line's text with its spans applied (no line break)
    pub fn write_line<W: Write>(&self, out: &mut W, text: &str, spans: &[StyleSpan]) -> Result<()> {
        let mut col = 0;
        for (piece, highlight) in segments(text, spans) {
            let (shown, truncated) = self.fit(piece, &mut col);
            match highlight {
                Some(h) if self.color && !shown.is_empty() => {
                    write_styled(out, &shown, self.palette.style_for(h))?;
                }
                _ => out.write_all(shown.as_bytes())?,
            }
            if truncated {
                break;
            }
        }
        Ok(())
    }

    /// Expand tabs and cut `piece` at `max_width`, starting at display
    /// column `col`. Returns the text to show and whether the line is full.
    fn fit(&self, piece: &str, col: &mut usize) -> (String, bool) {
        let mut shown = String::with_capacity(piece.len());
        for ch in piece.chars() {
            let (ch_width, expanded) = if ch == '\t' {
                let w = self.tab_width - *col % self.tab_width;
                (w, None)
            } else {
                (UnicodeWidthChar::width(ch).unwrap_or(1), Some(ch))
            };
            if self.max_width > 0 && *col + ch_width > self.max_width {
                return (shown, true);
            }
            match expanded {
                Some(ch) => shown.push(ch),
                None => shown.extend(std::iter::repeat(' ').take(ch_width)),
            }
            *col += ch_width;
        }
        (shown, false)
    }
}

fn write_styled<W: Write>(out: &mut W, text: &str, style: Style) -> Result<()> {
    if style.is_default() {
        out.write_all(text.as_bytes())?;
        return Ok(());
    }
    queue!(out, SetForegroundColor(style.fg.into()))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Cut `text` into consecutive pieces, each plain or covered by one span.
///
/// Spans are clamped to the text and snapped to char boundaries; overlap
/// with an earlier span is dropped.
fn segments<'t>(text: &'t str, spans: &[StyleSpan]) -> Vec<(&'t str, Option<HighlightStyle>)> {
    let mut sorted = spans.to_vec();
    sorted.sort_by_key(|s| s.start);

    let mut pieces = Vec::new();
    let mut pos = 0;
    for span in sorted {
        let start = find_safe_boundary(text, span.start as usize, false).max(pos);
        let end = find_safe_boundary(text, span.end as usize, true);
        if start >= end {
            continue;
        }
        if pos < start {
            pieces.push((&text[pos..start], None));
        }
        pieces.push((&text[start..end], Some(span.style)));
        pos = end;
    }
    if pos < text.len() {
        pieces.push((&text[pos..], None));
    }
    pieces
}

/// Find a safe UTF-8 boundary near the given byte offset
/// If forward is true, search forward; otherwise search backward
fn find_safe_boundary(s: &str, offset: usize, forward: bool) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    if s.is_char_boundary(offset) {
        return offset;
    }

    if forward {
        (offset..s.len()).find(|&i| s.is_char_boundary(i)).unwrap_or(s.len())
    } else {
        (0..offset).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Frontend;
    use crate::lang::{Keywords, LangOptions, RawLexer, SavePoints};
    use pretty_assertions::assert_eq;

    fn plain() -> SnippetRenderer {
        let mut renderer = SnippetRenderer::new(Palette::default());
        renderer.color = false;
        renderer
    }

    fn line_to_string(renderer: &SnippetRenderer, text: &str, spans: &[StyleSpan]) -> String {
        let mut out = Vec::new();
        renderer.write_line(&mut out, text, spans).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_segments() {
        let spans = [
            StyleSpan::new(7, 8, HighlightStyle::Literal),
            StyleSpan::new(0, 3, HighlightStyle::Keyword),
        ];
        assert_eq!(
            segments("int a = 1;", &spans),
            vec![
                ("int", Some(HighlightStyle::Keyword)),
                (" a = ", None),
                ("1", Some(HighlightStyle::Literal)),
                (";", None),
            ]
        );
    }

    #[test]
    fn test_segments_snap_to_char_boundaries() {
        // "é" is two bytes; the span starts and ends inside characters.
        let text = "é = \"é\"";
        let spans = [StyleSpan::new(1, 7, HighlightStyle::Literal)];
        assert_eq!(segments(text, &spans), vec![("é = \"é", Some(HighlightStyle::Literal)), ("\"", None)]);
    }

    #[test]
    fn test_segments_clamp_past_end() {
        let spans = [StyleSpan::new(2, 40, HighlightStyle::Comment)];
        assert_eq!(segments("x // c", &spans), vec![("x ", None), ("// c", Some(HighlightStyle::Comment))]);
    }

    #[test]
    fn test_plain_output_is_text() {
        let spans = [StyleSpan::new(0, 3, HighlightStyle::Keyword)];
        assert_eq!(line_to_string(&plain(), "int a;", &spans), "int a;");
    }

    #[test]
    fn test_tabs_expand() {
        let mut renderer = plain();
        renderer.tab_width = 4;
        assert_eq!(line_to_string(&renderer, "\tx\ty", &[]), "    x   y");
    }

    #[test]
    fn test_truncate_to_max_width() {
        let mut renderer = plain();
        renderer.max_width = 5;
        let spans = [StyleSpan::new(4, 9, HighlightStyle::Comment)];
        assert_eq!(line_to_string(&renderer, "a = // comment", &spans), "a = /");
        // Wide characters are not split.
        renderer.max_width = 3;
        assert_eq!(line_to_string(&renderer, "日本語", &[]), "日");
    }

    #[test]
    fn test_colored_output() {
        let renderer = SnippetRenderer::new(Palette::default());
        let spans = [StyleSpan::new(0, 6, HighlightStyle::Keyword)];
        let out = line_to_string(&renderer, "return 0;", &spans);
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("return"));
        assert!(out.ends_with(" 0;"));
    }

    #[test]
    fn test_render_snippet_with_gutter() {
        let lang = LangOptions::default();
        let mut sources = SourceManager::new();
        let file = sources.add_file("t.c", "int a;\n\tb = 2;\nreturn a;\n");
        let lexer = RawLexer::new(lang);
        let keywords = Keywords::new();
        let saves = SavePoints::new();
        let highlighter = Highlighter::new(Some(Frontend::new(&lexer, &sources, &keywords, &saves)), lang);

        let mut renderer = plain();
        renderer.show_line_numbers = true;
        renderer.tab_width = 2;
        let mut out = Vec::new();
        renderer
            .render_snippet(&mut out, &sources, file, &highlighter, 1, 2)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  2   b = 2;\n  3 return a;\n");
    }

    #[test]
    fn test_render_snippet_out_of_range() {
        let mut sources = SourceManager::new();
        let file = sources.add_file("t.c", "a;\nb;\n");
        let highlighter = Highlighter::new(None, LangOptions::default());
        let mut out = Vec::new();
        let err = plain()
            .render_snippet(&mut out, &sources, file, &highlighter, 0, 2)
            .unwrap_err();
        assert!(matches!(err, SnipError::LineOutOfRange { line: 3, count: 2 }));
    }
}
