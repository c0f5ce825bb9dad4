/// Whether a bracketed token opens or closes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// A token found between `<` and the next `>` on a single line.
///
/// `name` is the raw bracket contents, minus the leading `/` for closing
/// tags. Attributes and whitespace are kept verbatim, so `<div id="x">`
/// has the name `div id="x"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: &'a str,
    /// 1-based character column of the `<`.
    pub column: usize,
}

impl<'a> Tag<'a> {
    pub fn new(kind: TagKind, name: &'a str, column: usize) -> Self {
        Self { kind, name, column }
    }

    /// Classify bracket contents. Only a leading `/` makes a closing tag;
    /// a trailing one (`br/`) does not.
    pub fn classify(content: &'a str, column: usize) -> Self {
        match content.strip_prefix('/') {
            Some(name) => Self::new(TagKind::Close, name, column),
            None => Self::new(TagKind::Open, content, column),
        }
    }

    pub fn is_closing(&self) -> bool {
        self.kind == TagKind::Close
    }
}
