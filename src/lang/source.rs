//! Source files and line/column lookup

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::highlight::{FileId, PositionResolver, SourceLocation};

/// One loaded source file with its line table
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    text: String,
    /// Byte offset of the first character of each line
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// `\n`, `\r\n` and a lone `\r` each end a line
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(i as u32);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    line_starts.push(i as u32);
                }
                _ => i += 1,
            }
        }
        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines; a trailing line break does not start a new line
    pub fn line_count(&self) -> usize {
        let last = self.line_starts.len() - 1;
        if last > 0 && self.line_starts[last] as usize == self.text.len() {
            last
        } else {
            self.line_starts.len()
        }
    }

    /// Byte offset where a 0-based line starts
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).map(|&s| s as usize)
    }

    /// Text of a 0-based line without its line break
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches(|c: char| c == '\r' || c == '\n'))
    }

    /// 0-based line containing `offset`; the buffer end is a valid offset
    pub fn line_of_offset(&self, offset: u32) -> Option<u32> {
        if offset as usize > self.text.len() {
            return None;
        }
        let line = self.line_starts.partition_point(|&s| s <= offset) - 1;
        u32::try_from(line).ok()
    }

    /// 0-based byte column of `offset` within its line
    pub fn column_of_offset(&self, offset: u32) -> Option<u32> {
        let line = self.line_of_offset(offset)?;
        Some(offset - self.line_starts[line as usize])
    }
}

/// All files known to the highlighter, addressed by `FileId`
#[derive(Debug, Default)]
pub struct SourceManager {
    files: Vec<SourceFile>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register in-memory text as a file
    pub fn add_file(&mut self, name: impl Into<String>, text: impl Into<String>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(SourceFile::new(name, text));
        id
    }

    /// Read a file from disk and register it
    pub fn load_file(&mut self, path: &Path) -> Result<FileId> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(self.add_file(path.display().to_string(), text))
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0 as usize)
    }

    pub fn line_start(&self, id: FileId, line: u32) -> Option<usize> {
        self.file(id)?.line_start(line as usize)
    }

    pub fn line_text(&self, id: FileId, line: u32) -> Option<&str> {
        self.file(id)?.line_text(line as usize)
    }
}

impl PositionResolver for SourceManager {
    fn buffer(&self, file: FileId) -> Option<&str> {
        self.file(file).map(SourceFile::text)
    }

    fn line_of(&self, loc: SourceLocation) -> Option<u32> {
        self.file(loc.file)?.line_of_offset(loc.offset)
    }

    fn column_of(&self, loc: SourceLocation) -> Option<u32> {
        self.file(loc.file)?.column_of_offset(loc.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_table() {
        let file = SourceFile::new("t.c", "ab\ncd\r\nef\rgh");
        assert_eq!(file.line_count(), 4);
        assert_eq!(file.line_start(1), Some(3));
        assert_eq!(file.line_start(2), Some(7));
        assert_eq!(file.line_start(3), Some(10));
        assert_eq!(file.line_start(4), None);
    }

    #[test]
    fn test_line_text_strips_breaks() {
        let file = SourceFile::new("t.c", "ab\ncd\r\nef\rgh");
        assert_eq!(file.line_text(0), Some("ab"));
        assert_eq!(file.line_text(1), Some("cd"));
        assert_eq!(file.line_text(2), Some("ef"));
        assert_eq!(file.line_text(3), Some("gh"));
    }

    #[test]
    fn test_trailing_newline() {
        let file = SourceFile::new("t.c", "one\ntwo\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_text(2), Some(""));
        assert_eq!(SourceFile::new("e.c", "").line_count(), 1);
    }

    #[test]
    fn test_offsets_to_positions() {
        let file = SourceFile::new("t.c", "ab\ncd\r\nef");
        assert_eq!(file.line_of_offset(0), Some(0));
        assert_eq!(file.line_of_offset(2), Some(0));
        assert_eq!(file.line_of_offset(3), Some(1));
        assert_eq!(file.line_of_offset(6), Some(1));
        assert_eq!(file.line_of_offset(7), Some(2));
        assert_eq!(file.column_of_offset(8), Some(1));
        assert_eq!(file.line_of_offset(9), Some(2));
        assert_eq!(file.column_of_offset(9), Some(2));
        assert_eq!(file.line_of_offset(10), None);
    }

    #[test]
    fn test_manager_resolves_locations() {
        let mut sources = SourceManager::new();
        let a = sources.add_file("a.c", "x\ny");
        let b = sources.add_file("b.c", "\n\nz");
        assert_eq!(a, FileId(0));
        assert_eq!(b, FileId(1));
        assert_eq!(sources.line_of(SourceLocation::new(b, 2)), Some(2));
        assert_eq!(sources.column_of(SourceLocation::new(a, 2)), Some(0));
        assert_eq!(sources.line_of(SourceLocation::new(FileId(9), 0)), None);
        assert_eq!(sources.buffer(a), Some("x\ny"));
        assert_eq!(sources.line_text(b, 2), Some("z"));
        assert_eq!(sources.file(b).map(SourceFile::name), Some("b.c"));
    }
}
