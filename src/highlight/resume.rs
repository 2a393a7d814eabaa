//! Where to start lexing for a given line

use super::frontend::{FileId, ResumePoints};

/// Byte offset to start lexing from so that `line_start` is reached
/// without re-lexing the whole file.
///
/// A resume point is only trusted if it lies inside the buffer and not
/// after the line start; anything else means lexing from the beginning.
pub(crate) fn resume_offset(
    resume: &dyn ResumePoints,
    file: FileId,
    buffer_len: usize,
    line_start: usize,
) -> usize {
    match resume.resume_point_before(file, line_start) {
        Some(save) if save < buffer_len && save <= line_start => save,
        Some(save) => {
            tracing::debug!(save, line_start, buffer_len, "ignoring out-of-bounds resume point");
            0
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<usize>);

    impl ResumePoints for Fixed {
        fn resume_point_before(&self, _file: FileId, _position: usize) -> Option<usize> {
            self.0
        }
    }

    #[test]
    fn test_valid_resume_point() {
        assert_eq!(resume_offset(&Fixed(Some(12)), FileId(0), 100, 40), 12);
        assert_eq!(resume_offset(&Fixed(Some(40)), FileId(0), 100, 40), 40);
    }

    #[test]
    fn test_no_resume_point() {
        assert_eq!(resume_offset(&Fixed(None), FileId(0), 100, 40), 0);
    }

    #[test]
    fn test_past_buffer_end() {
        assert_eq!(resume_offset(&Fixed(Some(100)), FileId(0), 100, 40), 0);
        assert_eq!(resume_offset(&Fixed(Some(5000)), FileId(0), 100, 40), 0);
    }

    #[test]
    fn test_after_line_start() {
        assert_eq!(resume_offset(&Fixed(Some(41)), FileId(0), 100, 40), 0);
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(resume_offset(&Fixed(Some(0)), FileId(0), 0, 0), 0);
    }
}
