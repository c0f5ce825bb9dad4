use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whether `c` ends a line on its own. `\n` is handled by `read_line`.
fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\u{2028}' | '\u{2029}' | '\u{0085}')
}

/// Lines of a buffered source.
///
/// Breaks on `\n`, `\r\n`, a lone `\r`, NEL (U+0085), and the Unicode
/// line and paragraph separators (U+2028, U+2029). Terminators are not
/// included in the yielded lines.
pub struct SourceLines<R> {
    reader: R,
    buf: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }

        let record = match self.buf.strip_suffix('\n') {
            Some(body) => body.strip_suffix('\r').unwrap_or(body),
            None => self.buf.as_str(),
        };
        self.pending
            .extend(record.split(is_line_break).map(str::to_owned));
        self.pending.pop_front().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(source: &str) -> Vec<String> {
        SourceLines::new(source.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lines(""), Vec::<String>::new());
    }

    #[test]
    fn test_newline_and_crlf() {
        assert_eq!(lines("a\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_lone_carriage_return() {
        assert_eq!(lines("a\rb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unicode_line_breaks() {
        assert_eq!(
            lines("a\u{2028}b\u{2029}c\u{0085}d\ne"),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let mut iter = SourceLines::new(&[b'a', 0xff, b'\n'][..]);
        assert!(iter.next().unwrap().is_err());
    }
}
