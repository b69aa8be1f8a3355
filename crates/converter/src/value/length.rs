use std::fmt;

use crate::{
    rule::{Rejection, RejectionKind},
    unit::Unit,
};

use super::Number;

/// A number with an optional unit, e.g. `-11.1pt`, `50%` or `1.5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub number: Number,
    pub unit: Unit,
}

impl Length {
    pub const fn new(number: Number, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// The length in points, if the unit is absolute. Unitless values are
    /// taken as points.
    pub fn to_points(self) -> Option<f64> {
        match self.unit {
            Unit::None => Some(self.number.0),
            unit => unit.points_per_unit().map(|factor| self.number.0 * factor),
        }
    }

    /// Parse `[+-]? digits ( . digits )? unit?`, where either side of the
    /// decimal point may be empty but not both.
    pub(crate) fn parse(raw: &str) -> Result<Self, Rejection> {
        let bytes = raw.as_bytes();
        let mut cursor = 0;

        if matches!(bytes.first(), Some(b'+' | b'-')) {
            cursor += 1;
        }

        let int_start = cursor;
        while bytes.get(cursor).map_or(false, u8::is_ascii_digit) {
            cursor += 1;
        }
        let int_digits = cursor - int_start;

        if bytes.get(cursor) == Some(&b'.') {
            cursor += 1;
            let frac_start = cursor;
            while bytes.get(cursor).map_or(false, u8::is_ascii_digit) {
                cursor += 1;
            }

            if cursor == frac_start {
                return Err(Rejection::new(
                    RejectionKind::Syntax,
                    format!("Expected digit after decimal point in \"{}\".", raw),
                ));
            }
        } else if int_digits == 0 {
            return Err(Rejection::new(
                RejectionKind::Syntax,
                format!("Expected number, was \"{}\".", raw),
            ));
        }

        let number = raw[..cursor]
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| {
                Rejection::new(
                    RejectionKind::Syntax,
                    format!("Invalid number \"{}\".", &raw[..cursor]),
                )
            })?;

        let unit = Unit::from_suffix(&raw[cursor..]).ok_or_else(|| {
            Rejection::new(
                RejectionKind::Syntax,
                format!("Unknown unit \"{}\".", &raw[cursor..]),
            )
        })?;

        Ok(Length::new(Number(number), unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit)
    }
}
