//! Dice expressions and percentile skill checks for tabletop RPG chat bots.
//!
//! ```
//! let mut audit = Vec::new();
//! let total = trpg_dice::evaluate("2d6 + 3", Some(&mut audit), 100).unwrap();
//! assert_eq!(audit.len(), 1);
//! assert_eq!(total.as_int(), audit[0].sum as i64 + 3);
//! ```

mod common;
mod error;
pub mod parse;
pub mod roll;
pub mod skill;

pub use common::{Associativity, Float, Int, NonZeroUInt, Operator, UInt};
pub use error::Error;
pub use roll::{DiceRollRecord, EvalConfig, Number, RollContext, Roller, DEFAULT_DIE_SIDES};
pub use skill::{Attributes, SkillConfig, SkillRollResult, SkillSheet, SuccessTier};

fn context(default_die_sides: UInt) -> RollContext {
    RollContext::new(
        EvalConfig {
            default_die_sides,
            ..EvalConfig::default()
        },
        rand::thread_rng(),
    )
}

/// Evaluates a dice expression such as `2d6+3`, `d20` or `(2d4)d6`.
///
/// Every `d` that is applied appends one [`DiceRollRecord`] to `audit`.
/// A `d` without sides uses `default_die_sides`.
pub fn evaluate(
    expr: &str,
    audit: Option<&mut Vec<DiceRollRecord>>,
    default_die_sides: UInt,
) -> Result<Number, Error> {
    context(default_die_sides).eval_str(expr, audit)
}

/// Parses attribute assignments such as `strength50dodge1d6`. Never fails;
/// see [`skill::parse_attributes`].
pub fn parse_attribute_expression(
    expr: &str,
    audit: Option<&mut Vec<DiceRollRecord>>,
    default_die_sides: UInt,
) -> Attributes {
    skill::parse_attributes(&mut context(default_die_sides), expr, audit)
}

/// Rolls a percentile skill check such as `spot` or `spot60` against
/// `attributes`. Never fails; see [`skill::resolve`].
pub fn resolve_skill_roll<S: SkillSheet + ?Sized>(
    expr: &str,
    attributes: &S,
    default_die_sides: UInt,
) -> SkillRollResult {
    skill::resolve(
        &mut context(default_die_sides),
        &SkillConfig::default(),
        expr,
        attributes,
    )
}

#[cfg(test)]
pub(crate) mod test_utils {
    use rand::{rngs::StdRng, SeedableRng};

    pub fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }
}
