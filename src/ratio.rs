//! Width:height ratio values and their text form.

use core::fmt;
use core::str::FromStr;

/// A width:height proportion.
///
/// Components are kept as parsed floating-point values so that an outcome
/// can echo back exactly what the engine computed with. Ratios built from
/// text via [`FromStr`] or [`Ratio::new`] are always positive integers.
///
/// ```
/// use zenaspect::Ratio;
///
/// let r: Ratio = "16:9".parse().unwrap();
/// assert_eq!(r, Ratio::new(16, 9));
/// assert_eq!(r.to_string(), "16:9");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ratio {
    /// Width component.
    pub numerator: f64,
    /// Height component.
    pub denominator: f64,
}

impl Ratio {
    /// Create a ratio from integer components.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator: numerator as f64,
            denominator: denominator as f64,
        }
    }

    /// Whether both components are strictly positive.
    ///
    /// Non-positive (or NaN) components make a ratio unusable for resolution.
    pub fn is_valid(&self) -> bool {
        self.numerator > 0.0 && self.denominator > 0.0
    }

    /// Width over height.
    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Error from parsing a ratio like `"16:9"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RatioParseError {
    /// No `:`, `/`, `x` or `×` between the components.
    MissingSeparator,
    /// The width component is not an unsigned integer.
    InvalidNumerator,
    /// The height component is not an unsigned integer.
    InvalidDenominator,
    /// One of the components is zero.
    ZeroComponent,
}

impl fmt::Display for RatioParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingSeparator => "expected N:D, N/D or NxD",
            Self::InvalidNumerator => "ratio numerator is not an unsigned integer",
            Self::InvalidDenominator => "ratio denominator is not an unsigned integer",
            Self::ZeroComponent => "ratio components must be greater than zero",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for RatioParseError {}

impl FromStr for Ratio {
    type Err = RatioParseError;

    /// Parse `N:D`, `N/D`, `NxD` or `N×D`. Whitespace around components is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s
            .split_once(|c| matches!(c, ':' | '/' | 'x' | 'X' | '×'))
            .ok_or(RatioParseError::MissingSeparator)?;
        let num: u32 = num
            .trim()
            .parse()
            .map_err(|_| RatioParseError::InvalidNumerator)?;
        let den: u32 = den
            .trim()
            .parse()
            .map_err(|_| RatioParseError::InvalidDenominator)?;
        if num == 0 || den == 0 {
            return Err(RatioParseError::ZeroComponent);
        }
        Ok(Self::new(num, den))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_separators() {
        assert_eq!("16:9".parse(), Ok(Ratio::new(16, 9)));
        assert_eq!("4/3".parse(), Ok(Ratio::new(4, 3)));
        assert_eq!("21x9".parse(), Ok(Ratio::new(21, 9)));
        assert_eq!("3X2".parse(), Ok(Ratio::new(3, 2)));
        assert_eq!("1×1".parse(), Ok(Ratio::new(1, 1)));
        assert_eq!(" 9 : 16 ".parse(), Ok(Ratio::new(9, 16)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("169".parse::<Ratio>(), Err(RatioParseError::MissingSeparator));
        assert_eq!("".parse::<Ratio>(), Err(RatioParseError::MissingSeparator));
        assert_eq!("a:9".parse::<Ratio>(), Err(RatioParseError::InvalidNumerator));
        assert_eq!(":9".parse::<Ratio>(), Err(RatioParseError::InvalidNumerator));
        assert_eq!("16:".parse::<Ratio>(), Err(RatioParseError::InvalidDenominator));
        assert_eq!("-16:9".parse::<Ratio>(), Err(RatioParseError::InvalidNumerator));
        assert_eq!("1.5:1".parse::<Ratio>(), Err(RatioParseError::InvalidNumerator));
        assert_eq!("0:9".parse::<Ratio>(), Err(RatioParseError::ZeroComponent));
        assert_eq!("16:0".parse::<Ratio>(), Err(RatioParseError::ZeroComponent));
    }

    #[test]
    fn validity() {
        assert!(Ratio::new(16, 9).is_valid());
        assert!(!Ratio::new(0, 9).is_valid());
        assert!(!Ratio::new(16, 0).is_valid());
        assert!(
            !Ratio {
                numerator: f64::NAN,
                denominator: 1.0
            }
            .is_valid()
        );
    }

    #[test]
    fn value_is_width_over_height() {
        assert_eq!(Ratio::new(16, 8).value(), 2.0);
        assert_eq!(Ratio::new(3, 4).value(), 0.75);
    }
}
