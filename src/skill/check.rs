use super::attributes::eval_truncated;
use super::segment::{segments, Segment};
use super::sheet::SkillSheet;
use crate::common::Int;
use crate::roll::{DiceRollRecord, Roller, RollContext};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest ceiling for the check die; targets above it roll `1d{target}`.
const PERCENTILE: Int = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Critical successes need a roll at or below this and a target of at
    /// least five times it; fumbles start at `100 - critical_threshold`.
    pub critical_threshold: Int,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessTier {
    CriticalSuccess,
    ExtremeSuccess,
    HardSuccess,
    Success,
    Failure,
    Fumble,
}

impl SuccessTier {
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Failure | Self::Fumble)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "critical success",
            Self::ExtremeSuccess => "extreme success",
            Self::HardSuccess => "hard success",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Fumble => "fumble",
        }
    }
}

impl fmt::Display for SuccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRollResult {
    pub skill_name: String,
    /// The value the roll is checked against.
    pub target: Int,
    pub roll: Int,
    pub records: Vec<DiceRollRecord>,
    pub tier: SuccessTier,
}

impl fmt::Display for SkillRollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.skill_name.is_empty() {
            write!(f, "{} ", self.skill_name)?;
        }
        write!(f, "{}/{}: {}", self.roll, self.target, self.tier)
    }
}

/// Classifies a check roll against its target value.
pub fn classify(roll: Int, target: Int, config: &SkillConfig) -> SuccessTier {
    let threshold = config.critical_threshold;
    // `roll <= roll / 5` holds only for rolls of zero or below, i.e. a check
    // die that failed to evaluate.
    if (target >= threshold.saturating_mul(5) && roll <= threshold) || roll <= roll.div_euclid(5) {
        return SuccessTier::CriticalSuccess;
    }
    if target <= PERCENTILE && roll >= PERCENTILE.saturating_sub(threshold) {
        return SuccessTier::Fumble;
    }

    let hard = target.div_euclid(2);
    let extreme = target.div_euclid(4);
    if roll <= extreme {
        SuccessTier::ExtremeSuccess
    } else if roll <= hard {
        SuccessTier::HardSuccess
    } else if roll <= target {
        SuccessTier::Success
    } else {
        SuccessTier::Failure
    }
}

/// Resolves a skill check such as `spot` or `spot60`.
///
/// An explicit value after the skill name is the target; otherwise the target
/// is read from `sheet`, `0` when the skill is missing. Text that starts with
/// a value is an unnamed check against that value; it is not looked up as a
/// skill named `60`.
pub fn resolve<R: Roller, S: SkillSheet + ?Sized>(
    ctx: &mut RollContext<R>,
    config: &SkillConfig,
    expr: &str,
    sheet: &S,
) -> SkillRollResult {
    let stripped = expr.replace(' ', "");
    let lookup = |name: &str| sheet.skill_value(name).unwrap_or(0);

    let segments = segments(&stripped);
    let (skill_name, target) = match *segments.as_slice() {
        [] => (String::new(), 0),
        [Segment::Value(value), ..] => (String::new(), eval_truncated(ctx, value, None).unwrap_or(0)),
        [Segment::Label(label), Segment::Value(value), ..] => (
            label.to_string(),
            eval_truncated(ctx, value, None).unwrap_or_else(|| lookup(label)),
        ),
        [Segment::Label(label), ..] => (label.to_string(), lookup(label)),
    };

    let ceiling = if target < PERCENTILE { PERCENTILE } else { target };
    let mut records = Vec::with_capacity(1);
    let roll = eval_truncated(ctx, &format!("1d{}", ceiling), Some(&mut records)).unwrap_or(0);
    let tier = classify(roll, target, config);
    tracing::debug!(skill = %skill_name, target, roll, %tier, "resolved skill check");

    SkillRollResult {
        skill_name,
        target,
        roll,
        records,
        tier,
    }
}
