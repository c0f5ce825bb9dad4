use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tagcheck_stack::Stack;
use tracing::{debug, trace};

use crate::lines::SourceLines;
use crate::scanner::{TagScanner, UnterminatedTag};
use crate::tag::TagKind;
use crate::ValidateError;

/// Outcome of checking one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every tag was closed in the right order.
    Balanced,
    /// A `<` with no `>` later on its line.
    Unterminated { line: usize, column: usize },
    /// A closing tag arrived while no tag was open.
    UnopenedClose {
        name: String,
        line: usize,
        column: usize,
    },
    /// A closing tag did not match the innermost open tag.
    Mismatch {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
    /// Input ended with tags still open, innermost first.
    Unclosed { open: Vec<String> },
}

impl Verdict {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Verdict::Balanced)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Balanced => write!(f, "balanced"),
            Verdict::Unterminated { line, column } => {
                write!(f, "line {line}, column {column}: tag is missing its closing '>'")
            }
            Verdict::UnopenedClose { name, line, column } => write!(
                f,
                "line {line}, column {column}: closing tag </{name}> has no opening tag"
            ),
            Verdict::Mismatch {
                expected,
                found,
                line,
                column,
            } => write!(
                f,
                "line {line}, column {column}: expected </{expected}>, found </{found}>"
            ),
            Verdict::Unclosed { open } => {
                write!(f, "unclosed at end of input:")?;
                for name in open {
                    write!(f, " <{name}>")?;
                }
                Ok(())
            }
        }
    }
}

/// Check a document read line by line from `reader`.
///
/// Stops at the first problem found. Only I/O failures are errors;
/// unbalanced markup is reported through the returned [`Verdict`].
pub fn check_reader<R: BufRead>(reader: R) -> Result<Verdict, ValidateError> {
    let mut open: Stack<String> = Stack::new();

    for (index, line) in SourceLines::new(reader).enumerate() {
        let line = line.map_err(|source| ValidateError::Read { source })?;
        let line_no = index + 1;

        for tag in TagScanner::new(&line) {
            let tag = match tag {
                Ok(tag) => tag,
                Err(UnterminatedTag { column }) => {
                    return Ok(conclude(Verdict::Unterminated {
                        line: line_no,
                        column,
                    }));
                }
            };

            match tag.kind {
                TagKind::Open => {
                    trace!(line = line_no, tag = tag.name, "push");
                    open.push(tag.name.to_owned())?;
                }
                TagKind::Close => {
                    // An empty stack is the only way `pop` fails
                    let Ok(expected) = open.pop() else {
                        return Ok(conclude(Verdict::UnopenedClose {
                            name: tag.name.to_owned(),
                            line: line_no,
                            column: tag.column,
                        }));
                    };
                    trace!(line = line_no, tag = tag.name, "pop");
                    if expected != tag.name {
                        return Ok(conclude(Verdict::Mismatch {
                            expected,
                            found: tag.name.to_owned(),
                            line: line_no,
                            column: tag.column,
                        }));
                    }
                }
            }
        }
    }

    if open.is_empty() {
        Ok(conclude(Verdict::Balanced))
    } else {
        Ok(conclude(Verdict::Unclosed {
            open: open.into_iter().collect(),
        }))
    }
}

fn conclude(verdict: Verdict) -> Verdict {
    debug!(%verdict, "scan finished");
    verdict
}

/// Check an in-memory document.
pub fn check_str(source: &str) -> Result<Verdict, ValidateError> {
    check_reader(source.as_bytes())
}

/// Open the file at `path` and check it.
pub fn check_path(path: impl AsRef<Path>) -> Result<Verdict, ValidateError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ValidateError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    check_reader(BufReader::new(file))
}

/// Whether the file at `path` has balanced tags.
pub fn is_balanced(path: impl AsRef<Path>) -> Result<bool, ValidateError> {
    Ok(check_path(path)?.is_balanced())
}

/// Whether an in-memory document has balanced tags.
pub fn is_balanced_str(source: &str) -> bool {
    matches!(check_str(source), Ok(Verdict::Balanced))
}
