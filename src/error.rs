//! Error types
//!
//! A sentence either yields a well-formed tree or one of these errors.
//! Nothing is skipped silently: a malformed sentence aborts its analysis
//! and the error is handed back to the caller.

use thiserror::Error;

/// Structural problems detected while building a dependency tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeError {
    #[error("sentence has no tokens")]
    Empty,

    #[error("no token has head 0")]
    NoRoot,

    #[error("tokens {first} and {second} both have head 0")]
    MultipleRoots { first: usize, second: usize },

    #[error("token {id} has head {head}, which does not exist")]
    DanglingHead { id: usize, head: usize },

    #[error("token id {id} occurs more than once")]
    DuplicateId { id: usize },

    #[error("token ids start at 1")]
    InvalidId,

    #[error("head links from token {id} do not reach the root")]
    Cycle { id: usize },
}

/// A token record that cannot be turned into a tree node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported input at line {line}: {message}")]
pub struct UnsupportedInputError {
    pub line: usize,
    pub message: String,
}

impl UnsupportedInputError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Errors raised by sentence and text analysis
#[derive(Debug, Error)]
pub enum ComplexityError {
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] MalformedTreeError),

    #[error(transparent)]
    UnsupportedInput(#[from] UnsupportedInputError),

    #[error("the annotation is empty")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComplexityError>;
