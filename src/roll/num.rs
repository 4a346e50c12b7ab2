use crate::common::*;
use std::fmt;

/// A value on the evaluation stack.
///
/// Integer arithmetic stays exact until it overflows `Int`, at which point the
/// result continues as a `Float`.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(Int),
    Float(Float),
}

impl Number {
    /// Truncates toward zero, saturating at the bounds of `Int`.
    pub fn as_int(self) -> Int {
        match self {
            Self::Int(x) => x,
            Self::Float(x) => x as Int,
        }
    }

    pub fn as_float(self) -> Float {
        match self {
            Self::Int(x) => x as Float,
            Self::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_float() == 0.0
    }

    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Drops the fractional part of a `Float`, as dice parameters do.
    pub fn truncate(self) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(x) => Self::Int(x as Int),
        }
    }

    /// Exponentiation. Stays integral only for an integer base raised to a
    /// non-negative integer power whose result fits.
    pub fn pow(self, rhs: Self) -> Self {
        if let (Self::Int(base), Self::Int(exp)) = (self, rhs) {
            if let Some(x) = u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)) {
                return Self::Int(x);
            }
        }
        Self::Float(self.as_float().powf(rhs.as_float()))
    }
}

impl std::ops::Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Int(x) => x.checked_neg().map_or(Self::Float(-(x as Float)), Self::Int),
            Self::Float(x) => Self::Float(-x),
        }
    }
}

macro_rules! val_impl_bin_op {
    ($Name:ident, $fn_name:ident, $checked:ident) => {
        impl std::ops::$Name for Number {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                let float = |x: Self, y: Self| {
                    Self::Float(std::ops::$Name::$fn_name(x.as_float(), y.as_float()))
                };
                match (self, rhs) {
                    (Self::Int(x), Self::Int(y)) => x.$checked(y).map_or(float(self, rhs), Self::Int),
                    (x, y) => float(x, y),
                }
            }
        }
    };
}

val_impl_bin_op!(Add, add, checked_add);
val_impl_bin_op!(Sub, sub, checked_sub);
val_impl_bin_op!(Mul, mul, checked_mul);

/// True division; the quotient is always a `Float`.
impl std::ops::Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Float(self.as_float() / rhs.as_float())
    }
}

/// Floored remainder: a non-zero result takes the sign of the divisor.
impl std::ops::Rem for Number {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => {
                // only `Int::MIN % -1` overflows, and that remainder is zero
                let r = x.checked_rem(y).unwrap_or(0);
                Self::Int(if r != 0 && (r < 0) != (y < 0) { r + y } else { r })
            }
            (x, y) => {
                let (x, y) = (x.as_float(), y.as_float());
                let r = x % y;
                Self::Float(if r != 0.0 && (r < 0.0) != (y < 0.0) { r + y } else { r })
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x == y,
            (x, y) => x.as_float().eq(&y.as_float()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x.partial_cmp(y),
            (x, y) => x.as_float().partial_cmp(&y.as_float()),
        }
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<i32> for Number {
    fn from(x: i32) -> Self {
        Self::Int(x.into())
    }
}

impl From<Float> for Number {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
        }
    }
}
