use super::{num::Number, record::DiceRollRecord};

/// Renders the outcome of one evaluation for display.
pub trait Stringify {
    fn str_total(&mut self, total: Number) -> String;

    fn str_record(&mut self, record: &DiceRollRecord) -> String;

    fn str_roll(&mut self, total: Number, records: &[DiceRollRecord]) -> String {
        let total = self.str_total(total);
        if records.is_empty() {
            return total;
        }
        let records = records
            .iter()
            .map(|r| self.str_record(r))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} [{}]", total, records)
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl Stringify for SimpleStringifier {
    fn str_total(&mut self, total: Number) -> String {
        total.to_string()
    }

    fn str_record(&mut self, record: &DiceRollRecord) -> String {
        record.to_string()
    }
}

#[derive(Default)]
pub struct MarkdownStringifier;

impl Stringify for MarkdownStringifier {
    fn str_total(&mut self, total: Number) -> String {
        format!("**{}**", total)
    }

    fn str_record(&mut self, record: &DiceRollRecord) -> String {
        format!("`{}`", record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::NonZeroUInt;
    use vec1::vec1;

    fn records() -> Vec<DiceRollRecord> {
        vec![
            DiceRollRecord::new(NonZeroUInt::new(6).unwrap(), vec1![3, 6]),
            DiceRollRecord::new(NonZeroUInt::new(20).unwrap(), vec1![11]),
        ]
    }

    #[test]
    fn test_simple() {
        let mut s = SimpleStringifier;
        assert_eq!(s.str_roll(Number::Int(7), &[]), "7");
        assert_eq!(
            s.str_roll(Number::Int(20), &records()),
            "20 [2D6=3+6=9, D20=11]"
        );
    }

    #[test]
    fn test_markdown() {
        let mut s = MarkdownStringifier;
        assert_eq!(s.str_roll(Number::Float(0.5), &[]), "**0.5**");
        assert_eq!(
            s.str_roll(Number::Int(20), &records()),
            "**20** [`2D6=3+6=9`, `D20=11`]"
        );
    }
}
