use std::fmt;

const PRECISION: i32 = 10;

fn epsilon() -> f64 {
    10.0_f64.powi(-PRECISION - 1)
}

fn inverse_epsilon() -> f64 {
    10.0_f64.powi(PRECISION + 1)
}

/// Thin wrapper around `f64` providing fuzzy equality and canonical
/// serialization
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Number(pub f64);

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        fuzzy_equals(self.0, other.0)
    }
}

impl Eq for Number {}

fn fuzzy_equals(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    (a - b).abs() <= epsilon() && (a * inverse_epsilon()).round() == (b * inverse_epsilon()).round()
}

impl Number {
    /// Exact sign test on the parsed literal; `-0` is not negative
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn clamp(self, min: f64, max: f64) -> Self {
        Number(self.0.clamp(min, max))
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number( {} )", self)
    }
}

impl fmt::Display for Number {
    /// Shortest representation that parses back to the same value, so
    /// serializing is idempotent. Negative zero is written as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            return write!(f, "0");
        }

        write!(f, "{}", self.0)
    }
}
