use super::segment::{segments, Segment};
use crate::common::Int;
use crate::roll::{DiceRollRecord, Roller, RollContext};
use serde::{Serialize, Serializer};

/// Label to value map that remembers where each label first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Int)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Int> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|&(_, value)| value)
    }

    /// Sets `name`, keeping its original position if it is already present.
    pub fn insert(&mut self, name: &str, value: Int) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_owned(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Int)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Evaluates `expr` and truncates the result toward zero. Failures are
/// logged and reported as `None`.
pub(crate) fn eval_truncated<R: Roller>(
    ctx: &mut RollContext<R>,
    expr: &str,
    audit: Option<&mut Vec<DiceRollRecord>>,
) -> Option<Int> {
    match ctx.eval_str(expr, audit) {
        Ok(x) => Some(x.as_int()),
        Err(err) => {
            tracing::debug!(expr, %err, "value did not evaluate");
            None
        }
    }
}

/// Parses `label value label value ...` text such as `strength50dodge1d6`.
///
/// A value before the first label is ignored, a label without a value gets
/// `0`, and so does a value that fails to evaluate. Later occurrences of a
/// label overwrite earlier ones.
pub fn parse_attributes<R: Roller>(
    ctx: &mut RollContext<R>,
    expr: &str,
    mut audit: Option<&mut Vec<DiceRollRecord>>,
) -> Attributes {
    let stripped = expr.replace(' ', "");
    let segments = segments(&stripped);
    let pairs = match segments.first() {
        Some(Segment::Value(_)) => &segments[1..],
        _ => &segments[..],
    };

    let mut ret = Attributes::new();
    for pair in pairs.chunks(2) {
        match *pair {
            [Segment::Label(label), Segment::Value(value)] => {
                let value = eval_truncated(ctx, value, audit.as_deref_mut()).unwrap_or(0);
                ret.insert(label, value);
            }
            [Segment::Label(label)] => ret.insert(label, 0),
            // segments alternate, so a pair always opens with a label
            _ => {}
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::NonZeroUInt;
    use crate::roll::{EvalConfig, StepRoller};
    use crate::test_utils::seeded_rng;

    fn mock_ctx() -> RollContext<StepRoller> {
        RollContext::new(
            EvalConfig::default(),
            StepRoller::new(NonZeroUInt::new(3).unwrap(), 1),
        )
    }

    fn check(s: &str, expected: &[(&str, Int)]) {
        let actual = parse_attributes(&mut mock_ctx(), s, None);
        assert_eq!(actual.iter().collect::<Vec<_>>(), expected, "attributes of {:?}", s);
    }

    #[test]
    fn test_pairs() {
        check("strength50dodge1d6", &[("strength", 50), ("dodge", 3)]);
        check("str 50 con 60", &[("str", 50), ("con", 60)]);
    }

    #[test]
    fn test_countless_dice_after_label() {
        check("力量d20", &[("力量", 3)]);
        check("力量d", &[("力量", 3)]);
        check("力量d20敏捷50", &[("力量", 3), ("敏捷", 50)]);
        check("speed50", &[("speed", 50)]);
    }

    #[test]
    fn test_leading_value_is_dropped() {
        check("1d100str50", &[("str", 50)]);
        check("42", &[]);
    }

    #[test]
    fn test_trailing_label_defaults_to_zero() {
        check(
            "str1d6con50Skill",
            &[("str", 3), ("con", 50), ("Skill", 0)],
        );
        check(
            "str1d6con50Skill20Default",
            &[("str", 3), ("con", 50), ("Skill", 20), ("Default", 0)],
        );
    }

    #[test]
    fn test_failed_values_default_to_zero() {
        check("str5/0con(2", &[("str", 0), ("con", 0)]);
        check("str0d6", &[("str", 0)]);
    }

    #[test]
    fn test_reals_truncate() {
        check("str7/2", &[("str", 3)]);
        check("str-7/2", &[("str", -3)]);
    }

    #[test]
    fn test_later_occurrence_overwrites_in_place() {
        check("a1b2a3", &[("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_audit_collects_every_value() {
        let mut audit = Vec::new();
        let parsed = parse_attributes(&mut mock_ctx(), "1d4str2d6dex50", Some(&mut audit));
        assert_eq!(parsed.get("str"), Some(3 + 4));
        // the leading roll is dropped before evaluation
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].sides, 6);
    }

    #[test]
    fn test_random_value_in_range() {
        let mut ctx = RollContext::new(EvalConfig::default(), seeded_rng());
        for _ in 0..100 {
            let parsed = parse_attributes(&mut ctx, "strength50dodge1d6", None);
            assert_eq!(parsed.get("strength"), Some(50));
            let dodge = parsed.get("dodge").unwrap();
            assert!((1..=6).contains(&dodge));
        }
    }

    #[test]
    fn test_serialize_keeps_order() {
        let parsed = parse_attributes(&mut mock_ctx(), "zeta1alpha2", None);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );
    }
}
