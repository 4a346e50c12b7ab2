use super::num::Number;
use crate::common::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use vec1::Vec1;

/// One application of the `d` operator: every face drawn, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollRecord {
    pub count: UInt,
    pub sides: UInt,
    pub rolls: Vec1<UInt>,
    pub sum: UInt,
}

impl DiceRollRecord {
    pub(crate) fn new(sides: NonZeroUInt, rolls: Vec1<UInt>) -> Self {
        let sum = rolls.iter().fold(0, |a: UInt, &b| a.saturating_add(b));
        Self {
            count: rolls.len() as UInt,
            sides: sides.get(),
            rolls,
            sum,
        }
    }

    /// The sum as it is pushed back onto the evaluation stack.
    pub fn total(&self) -> Number {
        Int::try_from(self.sum)
            .map(Number::Int)
            .unwrap_or(Number::Float(self.sum as Float))
    }
}

/// `D20=15` for a single die, `2D6=3+4=7` otherwise.
impl fmt::Display for DiceRollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            let rolls = self
                .rolls
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("+");
            write!(f, "{}D{}={}={}", self.count, self.sides, rolls, self.sum)
        } else {
            write!(f, "D{}={}", self.sides, self.sum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vec1::vec1;

    fn sides(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    #[test]
    fn test_new_sums_rolls() {
        let record = DiceRollRecord::new(sides(6), vec1![3, 4, 6]);
        assert_eq!(record.count, 3);
        assert_eq!(record.sides, 6);
        assert_eq!(record.sum, 13);
        assert_eq!(record.total(), Number::Int(13));
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceRollRecord::new(sides(20), vec1![15]).to_string(), "D20=15");
        assert_eq!(
            DiceRollRecord::new(sides(6), vec1![3, 4]).to_string(),
            "2D6=3+4=7"
        );
    }

    #[test]
    fn test_serde() {
        let record = DiceRollRecord::new(sides(6), vec1![2, 5]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"count":2,"sides":6,"rolls":[2,5],"sum":7}"#);
        let back: DiceRollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(serde_json::from_str::<DiceRollRecord>(
            r#"{"count":0,"sides":6,"rolls":[],"sum":0}"#
        )
        .is_err());
    }
}
