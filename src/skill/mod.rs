//! Skill checks on top of the expression engine.
//!
//! Text like `strength50dodge1d6` is split into labels and value expressions;
//! each value goes through the same tokenizer, parser and evaluator as any
//! other roll.

mod attributes;
mod check;
mod segment;
mod sheet;

pub use attributes::{parse_attributes, Attributes};
pub use check::{classify, resolve, SkillConfig, SkillRollResult, SuccessTier};
pub use segment::{segments, Segment};
pub use sheet::{apply_attributes, SkillSheet};
