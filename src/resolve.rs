//! Dimension derivation and ratio matching.
//!
//! Given a target width and/or height and one ratio, derive the missing
//! dimension, or check a fully-specified pair against the ratio. Pure
//! arithmetic: no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenaspect::{Supplied, resolve};
//!
//! // Only width given: height is derived.
//! let out = resolve("1920", "", "16", "9").unwrap();
//! assert_eq!((out.width, out.height), (1920.0, 1080.0));
//! assert_eq!(out.kind, Supplied::WidthOnly);
//! assert!(out.is_match);
//!
//! // Both given: height is checked against the ratio.
//! let out = resolve("1920", "1081", "16", "9").unwrap();
//! assert!(!out.is_match);
//! assert_eq!(out.supplied_height, Some(1081.0));
//!
//! // Zero ratio component: nothing to show.
//! assert!(resolve("100", "", "0", "9").is_none());
//! ```

use core::fmt;

use num_traits::Float;

use crate::ratio::Ratio;

/// Maximum distance between a supplied height and the derived height for
/// the pair to count as matching the ratio.
pub const MATCH_TOLERANCE: f64 = 0.5;

/// Which target dimensions were supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Supplied {
    /// Only width: height is derived from the ratio.
    WidthOnly,
    /// Only height: width is derived from the ratio.
    HeightOnly,
    /// Both: height is derived from width and compared with the supplied height.
    Both,
}

/// Result of resolving target dimensions against one ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolutionOutcome {
    /// Reported width. The supplied width whenever one was given.
    pub width: f64,
    /// Reported height. Derived from width unless only height was given.
    pub height: f64,
    /// The ratio as parsed.
    pub ratio: Ratio,
    /// Whether the supplied dimensions agree with the ratio.
    /// Always `true` unless both dimensions were supplied.
    pub is_match: bool,
    /// The supplied height, present only for [`Supplied::Both`].
    pub supplied_height: Option<f64>,
    /// Which dimensions were supplied.
    pub kind: Supplied,
}

impl ResolutionOutcome {
    /// Supplied height minus derived height, when both dimensions were given.
    pub fn discrepancy(&self) -> Option<f64> {
        self.supplied_height.map(|h| h - self.height)
    }
}

impl fmt::Display for ResolutionOutcome {
    /// `✓ 1920 × 1080 [16:9]`, or for a mismatch the supplied height
    /// followed by the correct one: `✗ False 1920 × 1081 1080 [16:9]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_match, self.supplied_height) {
            (false, Some(supplied)) => write!(
                f,
                "✗ False {} × {} {} [{}]",
                self.width, supplied, self.height, self.ratio
            ),
            _ => write!(f, "✓ {} × {} [{}]", self.width, self.height, self.ratio),
        }
    }
}

/// Resolve raw field text against one ratio.
///
/// All four inputs go through [`parse_number`], so empty or unparsable text
/// counts as zero. Returns `None` when there is nothing to show: no positive
/// target dimension, or a ratio component that is not strictly positive.
pub fn resolve(
    target_width: &str,
    target_height: &str,
    ratio_numerator: &str,
    ratio_denominator: &str,
) -> Option<ResolutionOutcome> {
    resolve_values(
        parse_number(target_width),
        parse_number(target_height),
        Ratio {
            numerator: parse_number(ratio_numerator),
            denominator: parse_number(ratio_denominator),
        },
    )
}

/// Resolve already-parsed target dimensions against one ratio.
///
/// Width is the canonical dimension: when both are supplied, height is
/// derived from width and compared, never the other way around.
pub fn resolve_values(width: f64, height: f64, ratio: Ratio) -> Option<ResolutionOutcome> {
    if (width <= 0.0 && height <= 0.0) || !ratio.is_valid() {
        return None;
    }

    if width > 0.0 && height == 0.0 {
        return Some(ResolutionOutcome {
            width,
            height: height_for(width, ratio),
            ratio,
            is_match: true,
            supplied_height: None,
            kind: Supplied::WidthOnly,
        });
    }

    if height > 0.0 && width == 0.0 {
        return Some(ResolutionOutcome {
            width: width_for(height, ratio),
            height,
            ratio,
            is_match: true,
            supplied_height: None,
            kind: Supplied::HeightOnly,
        });
    }

    // Anything else reaches the comparison, including a negative
    // dimension paired with a positive one.
    let derived = height_for(width, ratio);
    Some(ResolutionOutcome {
        width,
        height: derived,
        ratio,
        is_match: Float::abs(height - derived) < MATCH_TOLERANCE,
        supplied_height: Some(height),
        kind: Supplied::Both,
    })
}

/// Height implied by `width` at `ratio`, rounded half away from zero.
fn height_for(width: f64, ratio: Ratio) -> f64 {
    Float::round(width / ratio.numerator * ratio.denominator)
}

/// Width implied by `height` at `ratio`, rounded half away from zero.
fn width_for(height: f64, ratio: Ratio) -> f64 {
    Float::round(height / ratio.denominator * ratio.numerator)
}

/// Leniently parse a number from field text.
///
/// Leading whitespace is skipped, then the longest decimal prefix
/// (`[+-]digits[.digits][e[+-]digits]`) is parsed. Text with no numeric
/// prefix yields `0.0`, so `"12px"` is `12.0` and `"px"` is `0.0`.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let end = numeric_prefix_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match s[..end].parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Length of the longest prefix of `b` that is a decimal floating-point
/// literal, or 0 if there is none.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    i = digits_from(i);
    let mut mantissa_digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let frac_end = digits_from(frac_start);
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}
