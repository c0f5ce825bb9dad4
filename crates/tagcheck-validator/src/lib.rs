//! tagcheck Validator
//!
//! Checks that the `<tag>`/`</tag>` markers in a line-oriented document are
//! matched and properly nested. Tags are found by locating `<` and the next
//! `>` on the same line; nothing else about the markup is interpreted.
//!
//! ```text
//! source → lines → TagScanner → Stack<String> → Verdict
//! ```
//!
//! # Example
//!
//! ```
//! use tagcheck_validator::{check_str, Verdict};
//!
//! assert!(check_str("<a><b></b></a>").unwrap().is_balanced());
//! assert_eq!(
//!     check_str("<a>").unwrap(),
//!     Verdict::Unclosed { open: vec!["a".to_string()] },
//! );
//! ```

pub mod lines;
pub mod scanner;
pub mod tag;
pub mod validator;

pub use lines::SourceLines;
pub use scanner::{TagScanner, UnterminatedTag};
pub use tag::{Tag, TagKind};
pub use validator::{check_path, check_reader, check_str, is_balanced, is_balanced_str, Verdict};

use std::path::PathBuf;

use tagcheck_stack::StackError;

/// Validation error. Unbalanced markup is not an error; it is reported
/// through [`Verdict`].
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("source not found: {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read source: {source}")]
    Read { source: std::io::Error },
    /// Carries stack failures through `?`. Tag names are always present,
    /// so the validator itself never produces this.
    #[error(transparent)]
    Stack(#[from] StackError),
}
