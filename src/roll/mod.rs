mod ctx;
mod error;
mod num;
mod record;
mod roller;
mod stringify;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, EvalConfig, RollContext, DEFAULT_DIE_SIDES};
pub use error::RollError;
pub use num::Number;
pub use record::DiceRollRecord;
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};

#[cfg(test)]
pub(crate) use roller::StepRoller;
