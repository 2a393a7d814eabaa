//! Splitting multi-line tokens into per-line fragments

/// `\n` and `\r` end a line; `\r\n` counts once.
fn is_vertical_whitespace(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Column range of the part of a multi-line token that lies on one line.
///
/// `spelling` is the token text, `relative_line` the target line counted
/// from the token's first line, and `last_line` the relative index of the
/// token's final line. The first fragment starts at `start_col`, the last
/// ends at `end_col`, and interior lines start at column 0. Line breaks
/// belong to neither fragment.
///
/// The spelling has to be scanned from the beginning: line lengths are not
/// known until the line breaks before the target have been found.
pub(crate) fn line_fragment(
    spelling: &str,
    relative_line: u32,
    last_line: u32,
    start_col: u32,
    end_col: u32,
) -> Option<(u32, u32)> {
    let bytes = spelling.as_bytes();
    let mut line = 0u32;
    let mut len = 0u32;
    let mut i = 0;

    while i <= bytes.len() {
        let at_end = i == bytes.len();
        if at_end || is_vertical_whitespace(bytes[i]) {
            if line == relative_line {
                let range = if line == 0 {
                    (start_col, start_col + len)
                } else if line == last_line {
                    (0, end_col)
                } else {
                    (0, len)
                };
                return Some(range);
            }
            if !at_end && bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            line += 1;
            len = 0;
            i += 1;
            continue;
        }
        len += 1;
        i += 1;
    }

    None
}
