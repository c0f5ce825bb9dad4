use crate::tag::Tag;

/// A `<` with no `>` after it on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnterminatedTag {
    /// 1-based character column of the `<`.
    pub column: usize,
}

/// Finds bracketed tags in a single line of text.
///
/// Yields tags left to right. Scanning resumes after each `>`, so bracket
/// contents are never rescanned. The search for `>` starts at the `<`
/// itself, which means a second `<` before the `>` is part of the tag:
/// `<a<b>` yields one opening tag named `a<b`.
///
/// An unterminated tag ends the iteration after yielding the error.
pub struct TagScanner<'a> {
    line: &'a str,
    pos: usize,
    counted: usize,
    column: usize,
    done: bool,
}

impl<'a> TagScanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            counted: 0,
            column: 0,
            done: false,
        }
    }

    /// 1-based character column of the byte offset `at`.
    /// Offsets must be requested in increasing order.
    fn column_at(&mut self, at: usize) -> usize {
        self.column += self.line[self.counted..at].chars().count();
        self.counted = at;
        self.column + 1
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = Result<Tag<'a>, UnterminatedTag>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // `<` and `>` are ASCII, so byte offsets from `find` are char boundaries
        let open = self.pos + self.line[self.pos..].find('<')?;
        let column = self.column_at(open);

        let Some(close) = self.line[open..].find('>').map(|i| open + i) else {
            self.done = true;
            return Some(Err(UnterminatedTag { column }));
        };

        self.pos = close + 1;
        Some(Ok(Tag::classify(&self.line[open + 1..close], column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagKind;
    use pretty_assertions::assert_eq;

    fn scan(line: &str) -> Vec<Result<Tag<'_>, UnterminatedTag>> {
        TagScanner::new(line).collect()
    }

    fn names(line: &str) -> Vec<(TagKind, &str)> {
        TagScanner::new(line)
            .map(|t| t.map(|t| (t.kind, t.name)).unwrap())
            .collect()
    }

    // =========================================================================
    // Basic scanning
    // =========================================================================

    #[test]
    fn test_empty_line() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(scan("no tags here"), vec![]);
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(
            names("<p>hello</p>"),
            vec![(TagKind::Open, "p"), (TagKind::Close, "p")]
        );
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(
            names("<a><b></b></a>"),
            vec![
                (TagKind::Open, "a"),
                (TagKind::Open, "b"),
                (TagKind::Close, "b"),
                (TagKind::Close, "a"),
            ]
        );
    }

    #[test]
    fn test_lone_closing_bracket_ignored() {
        assert_eq!(names("a > b <i>"), vec![(TagKind::Open, "i")]);
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(names("<>"), vec![(TagKind::Open, "")]);
    }

    // =========================================================================
    // Delimiter edge cases
    // =========================================================================

    #[test]
    fn test_inner_open_bracket_is_tag_text() {
        assert_eq!(names("<a<b>"), vec![(TagKind::Open, "a<b")]);
    }

    #[test]
    fn test_unterminated_tag() {
        assert_eq!(scan("<a"), vec![Err(UnterminatedTag { column: 1 })]);
    }

    #[test]
    fn test_unterminated_after_valid_tag() {
        let tags = scan("<a> text <b");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Ok(Tag::new(TagKind::Open, "a", 1)));
        assert_eq!(tags[1], Err(UnterminatedTag { column: 10 }));
    }

    #[test]
    fn test_iteration_stops_after_unterminated() {
        let mut scanner = TagScanner::new("<a");
        assert!(scanner.next().unwrap().is_err());
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    // =========================================================================
    // Columns
    // =========================================================================

    #[test]
    fn test_columns() {
        let columns: Vec<usize> = TagScanner::new("  <a>x</a>")
            .map(|t| t.unwrap().column)
            .collect();
        assert_eq!(columns, vec![3, 7]);
    }

    #[test]
    fn test_columns_count_characters() {
        let columns: Vec<usize> = TagScanner::new("é<a>ü</a>")
            .map(|t| t.unwrap().column)
            .collect();
        assert_eq!(columns, vec![2, 6]);
    }

    #[test]
    fn test_multibyte_tag_name() {
        assert_eq!(names("<ü></ü>"), vec![(TagKind::Open, "ü"), (TagKind::Close, "ü")]);
    }
}
