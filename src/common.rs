use std::fmt::{self, Write};
use std::num::NonZeroU64;

pub type Int = i64;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type Float = f64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Every operator a token stream can carry, including the unary markers the
/// tokenizer synthesizes for prefix `+` and `-`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Dice,
    /// Unary plus, rendered `P` in postfix form.
    Pos,
    /// Unary minus, rendered `N` in postfix form.
    Neg,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Pow => 3,
            Self::Dice | Self::Pos | Self::Neg => 4,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Self::Pow | Self::Dice | Self::Pos | Self::Neg => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Self::Pos | Self::Neg)
    }

    /// Whether `self`, sitting on the operator stack, must be emitted before
    /// `incoming` is pushed.
    pub(crate) fn binds_before(self, incoming: Self) -> bool {
        let (top, next) = (self.precedence(), incoming.precedence());
        top > next || (top == next && incoming.associativity() == Associativity::Left)
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
            Self::Dice => 'd',
            Self::Pos => 'P',
            Self::Neg => 'N',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}
