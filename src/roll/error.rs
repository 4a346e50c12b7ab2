use crate::common::Int;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("malformed expression")]
    MalformedExpression,
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("dice count and sides must be positive, got {count}d{sides}")]
    InvalidDiceParameters { count: Int, sides: Int },
    #[error("too many dice rolled")]
    TooManyRolls,
}
