use crate::parse::ParseError;
use crate::roll::RollError;

/// Everything [`evaluate`](crate::evaluate) can fail with.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Roll(#[from] RollError),
}
