use once_cell::sync::Lazy;
use regex::Regex;

/// A run of dice-expression characters. `d` belongs to a run only when it
/// reads as dice notation: followed by a digit, `(`, an operator, `)` or the
/// end of input.
static VALUE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[0-9+\-*/^%()]|d(?:$|[0-9(+\-*/^%)]))+").unwrap()
});

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Label(&'a str),
    Value(&'a str),
}

/// Splits text into alternating label and value runs, in order. Adjacent
/// segments never have the same kind.
///
/// A run opening with `d` right after an ASCII letter is not a value there,
/// so the `d` in `speed50` stays in its label while `力量d20` rolls a `d20`.
pub fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut ret = Vec::new();
    let mut last = 0;
    let mut pos = 0;
    while let Some(m) = VALUE_RUN.find_at(s, pos) {
        let after_letter = s[..m.start()]
            .chars()
            .next_back()
            .map_or(false, |c| c.is_ascii_alphabetic());
        if after_letter && m.as_str().starts_with('d') {
            pos = m.start() + 1;
            continue;
        }
        if m.start() > last {
            ret.push(Segment::Label(&s[last..m.start()]));
        }
        ret.push(Segment::Value(m.as_str()));
        last = m.end();
        pos = m.end();
    }
    if last < s.len() {
        ret.push(Segment::Label(&s[last..]));
    }
    ret
}
