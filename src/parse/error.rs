use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `position` is a byte offset into the expression with its spaces removed.
    #[error("(at position {position}): invalid character {found:?}")]
    InvalidCharacter { found: char, position: usize },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
}
