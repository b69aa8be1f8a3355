use std::fmt;

/// Units a length literal may carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    // Absolute units
    /// Points
    Pt,
    /// Pixels
    Px,
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Inches
    In,
    /// Picas
    Pc,

    // Font relative units
    /// Font size of the element
    Em,
    /// x-height of the element's font
    Ex,

    Percent,

    /// Unspecified unit
    None,
}

impl Unit {
    /// Parse a unit suffix. Units are ASCII case-insensitive.
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix.to_ascii_lowercase().as_str() {
            "" => Unit::None,
            "pt" => Unit::Pt,
            "px" => Unit::Px,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "pc" => Unit::Pc,
            "em" => Unit::Em,
            "ex" => Unit::Ex,
            "%" => Unit::Percent,
            _ => return None,
        })
    }

    pub fn is_percent(self) -> bool {
        matches!(self, Unit::Percent)
    }

    /// Conversion factor to points for absolute units
    pub fn points_per_unit(self) -> Option<f64> {
        Some(match self {
            Unit::Pt => 1.0,
            Unit::Px => 0.75,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
            Unit::Pc => 12.0,
            Unit::Em | Unit::Ex | Unit::Percent | Unit::None => return None,
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Pt => write!(f, "pt"),
            Unit::Px => write!(f, "px"),
            Unit::Mm => write!(f, "mm"),
            Unit::Cm => write!(f, "cm"),
            Unit::In => write!(f, "in"),
            Unit::Pc => write!(f, "pc"),
            Unit::Em => write!(f, "em"),
            Unit::Ex => write!(f, "ex"),
            Unit::Percent => write!(f, "%"),
            Unit::None => Ok(()),
        }
    }
}
