//! Resume points for re-lexing
//!
//! A save point is the start offset of a token seen while lexing a file
//! from the beginning. Lexing again from there produces the same tokens,
//! so highlighting a line only has to re-lex from the nearest save point
//! before it.

use std::collections::HashMap;

use crate::highlight::{FileId, PositionResolver, ResumePoints, Tokenizer};

/// Sorted save points per file
#[derive(Debug, Default, Clone)]
pub struct SavePoints {
    points: HashMap<FileId, Vec<usize>>,
}

impl SavePoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one save point
    pub fn record(&mut self, file: FileId, offset: usize) {
        let points = self.points.entry(file).or_default();
        if let Err(i) = points.binary_search(&offset) {
            points.insert(i, offset);
        }
    }

    /// Lex `file` once and record a token start about every `interval`
    /// lines. Returns how many points were recorded.
    pub fn build(
        &mut self,
        file: FileId,
        tokenizer: &dyn Tokenizer,
        positions: &dyn PositionResolver,
        interval: u32,
    ) -> usize {
        let Some(buffer) = positions.buffer(file) else {
            return 0;
        };

        let interval = interval.max(1);
        let mut next_line = interval;
        let mut recorded = 0;
        for token in tokenizer.tokenize(file, buffer, 0) {
            let Some(line) = positions.line_of(token.location) else {
                continue;
            };
            if line >= next_line {
                self.record(file, token.location.offset as usize);
                recorded += 1;
                next_line = line.saturating_add(interval);
            }
        }

        tracing::debug!(file = file.0, interval, recorded, "built save points");
        recorded
    }

    /// Save points of a file, ascending
    pub fn points(&self, file: FileId) -> &[usize] {
        self.points.get(&file).map(Vec::as_slice).unwrap_or_default()
    }
}

impl ResumePoints for SavePoints {
    fn resume_point_before(&self, file: FileId, position: usize) -> Option<usize> {
        let points = self.points.get(&file)?;
        let idx = points.partition_point(|&p| p <= position);
        idx.checked_sub(1).map(|i| points[i])
    }
}
