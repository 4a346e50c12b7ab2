use super::{error::RollError, num::Number, record::DiceRollRecord, roller::Roller, RResult};
use crate::common::*;
use crate::error::Error;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use vec1::Vec1;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Sides given to a `d` that has none, as in `2d` or a bare `d`.
pub const DEFAULT_DIE_SIDES: UInt = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub default_die_sides: UInt,
    /// Upper bound on dice drawn by one evaluation; `None` for no bound.
    pub max_rolls: Option<UInt>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            default_die_sides: DEFAULT_DIE_SIDES,
            max_rolls: Some(1000),
        }
    }
}

/// Stack machine for postfix token sequences.
///
/// The context owns its [`Roller`]; nothing else in an evaluation is random.
pub struct RollContext<R = DefaultRoller> {
    config: EvalConfig,
    rolls: UInt,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(config: EvalConfig, roller: R) -> Self {
        Self {
            config,
            rolls: 0,
            roller,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    fn count_rolls(&mut self, n: UInt) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.config.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Rolls `count` dice of `sides` faces after truncating both toward zero.
    pub fn roll(&mut self, count: Number, sides: Number) -> RResult<DiceRollRecord> {
        let (count, sides) = (count.as_int(), sides.as_int());
        let positive = |x: Int| UInt::try_from(x).ok().and_then(NonZeroUInt::new);
        let (num, faces) = match (positive(count), positive(sides)) {
            (Some(num), Some(faces)) => (num, faces),
            _ => return Err(RollError::InvalidDiceParameters { count, sides }),
        };
        self.count_rolls(num.get())?;

        let mut rolls = Vec1::new(self.roller.roll(faces));
        for _ in 1..num.get() {
            rolls.push(self.roller.roll(faces));
        }
        let record = DiceRollRecord::new(faces, rolls);
        tracing::trace!(count, sides, sum = record.sum, "rolled dice");
        Ok(record)
    }

    /// Evaluates a postfix sequence, appending one record per `d` to `audit`.
    pub fn eval(
        &mut self,
        postfix: &[Token],
        mut audit: Option<&mut Vec<DiceRollRecord>>,
    ) -> RResult<Number> {
        self.rolls = 0;
        let mut stack: Vec<Number> = Vec::with_capacity(postfix.len());

        for token in postfix {
            match *token {
                Token::Number(x) => stack.push(x),
                Token::Operator(op) if op.is_unary() => {
                    let x = pop(&mut stack)?;
                    stack.push(if op == Operator::Neg { -x } else { x });
                }
                Token::Operator(Operator::Dice) => {
                    let sides = pop(&mut stack)?;
                    let count = pop(&mut stack)?;
                    let record = self.roll(count, sides)?;
                    stack.push(record.total());
                    if let Some(audit) = audit.as_mut() {
                        audit.push(record);
                    }
                }
                Token::Operator(op) => {
                    let rhs = pop(&mut stack)?;
                    let lhs = pop(&mut stack)?;
                    stack.push(binary(op, lhs, rhs)?);
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(RollError::MalformedExpression)
                }
            }
        }

        match stack.as_slice() {
            [x] => Ok(*x),
            _ => Err(RollError::MalformedExpression),
        }
    }

    /// Tokenizes, parses and evaluates `expr`.
    pub fn eval_str(
        &mut self,
        expr: &str,
        audit: Option<&mut Vec<DiceRollRecord>>,
    ) -> Result<Number, Error> {
        let postfix = parse::parse(expr, self.config.default_die_sides)?;
        Ok(self.eval(&postfix, audit)?)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(EvalConfig::default(), rand::thread_rng())
    }
}

fn pop(stack: &mut Vec<Number>) -> RResult<Number> {
    stack.pop().ok_or(RollError::MalformedExpression)
}

fn binary(op: Operator, lhs: Number, rhs: Number) -> RResult<Number> {
    Ok(match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div | Operator::Rem if rhs.is_zero() => return Err(RollError::DivisionByZero),
        Operator::Div => lhs / rhs,
        Operator::Rem => lhs % rhs,
        Operator::Pow => lhs.pow(rhs),
        // applied by `eval` itself
        Operator::Dice | Operator::Pos | Operator::Neg => return Err(RollError::MalformedExpression),
    })
}
