use std::fmt;
use std::str::FromStr;

use crate::error::{DishError, Result};
use crate::scoring::constants::{ATTRIBUTE_MAX, ATTRIBUTE_MIN, TASTE_MAX};

/// One of the four measured dish attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Taste,
    Spiciness,
    Sweetness,
    Texture,
}

impl Attribute {
    /// All attributes in report order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Taste,
        Attribute::Spiciness,
        Attribute::Sweetness,
        Attribute::Texture,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Taste => "Taste",
            Attribute::Spiciness => "Spiciness",
            Attribute::Sweetness => "Sweetness",
            Attribute::Texture => "Texture",
        }
    }

    /// Valid input range `(min, max)`, inclusive.
    ///
    /// Enforced when recording a dish; the scoring core accepts any real.
    pub fn range(self) -> (f64, f64) {
        match self {
            Attribute::Taste => (ATTRIBUTE_MIN, TASTE_MAX),
            _ => (ATTRIBUTE_MIN, ATTRIBUTE_MAX),
        }
    }

    /// Check a raw value against [`Attribute::range`].
    pub fn validate(self, value: f64) -> Result<f64> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(DishError::OutOfRange {
                attribute: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = DishError;

    /// Case-insensitive name lookup.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DishError::InvalidSelection(format!(
                    "unknown attribute '{}'! Must be Taste, Spiciness, Sweetness, or Texture.",
                    s
                ))
            })
    }
}

/// Membership function family applied to every attribute in one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Triangular,
    Trapezoidal,
    Gaussian,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Triangular,
        Strategy::Trapezoidal,
        Strategy::Gaussian,
    ];

    /// Numeric selector used by the command line (1, 2 or 3).
    pub fn id(self) -> u8 {
        match self {
            Strategy::Triangular => 1,
            Strategy::Trapezoidal => 2,
            Strategy::Gaussian => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Triangular => "Triangular",
            Strategy::Trapezoidal => "Trapezoidal",
            Strategy::Gaussian => "Gaussian",
        }
    }

    /// Header line used in reports.
    pub fn method(self) -> String {
        format!("{} Membership Functions", self.name())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logic {}: {}", self.id(), self.name())
    }
}

impl TryFrom<u8> for Strategy {
    type Error = DishError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Strategy::Triangular),
            2 => Ok(Strategy::Trapezoidal),
            3 => Ok(Strategy::Gaussian),
            other => Err(DishError::InvalidSelection(format!(
                "logic choice {} is not valid! Must be 1, 2, or 3.",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_ids_roundtrip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::try_from(strategy.id()).unwrap(), strategy);
        }
    }

    #[test]
    fn test_strategy_out_of_range_is_invalid_selection() {
        for id in [0u8, 4, 255] {
            let err = Strategy::try_from(id).unwrap_err();
            assert!(matches!(err, DishError::InvalidSelection(_)));
            assert!(err.to_string().contains("Must be 1, 2, or 3"));
        }
    }

    #[test]
    fn test_attribute_from_str_case_insensitive() {
        assert_eq!("taste".parse::<Attribute>().unwrap(), Attribute::Taste);
        assert_eq!(" TEXTURE ".parse::<Attribute>().unwrap(), Attribute::Texture);
        assert!(matches!(
            "saltiness".parse::<Attribute>(),
            Err(DishError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_attribute_ranges() {
        assert_eq!(Attribute::Taste.range(), (0.0, 20.0));
        assert_eq!(Attribute::Texture.range(), (0.0, 10.0));

        assert!(Attribute::Taste.validate(20.0).is_ok());
        assert!(Attribute::Spiciness.validate(0.0).is_ok());
        assert!(matches!(
            Attribute::Sweetness.validate(10.5),
            Err(DishError::OutOfRange { .. })
        ));
        assert!(Attribute::Texture.validate(-0.1).is_err());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Gaussian.to_string(), "Logic 3: Gaussian");
        assert_eq!(
            Strategy::Trapezoidal.method(),
            "Trapezoidal Membership Functions"
        );
    }
}
