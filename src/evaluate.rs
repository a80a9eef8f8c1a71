//! Evaluation of a whole ratio set against the target dimensions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::ratio_set::RatioSet;
use crate::resolve::{ResolutionOutcome, parse_number};
use crate::sanitize::sanitize;

/// Target width and height field text, kept in sanitized form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Targets {
    width: String,
    height: String,
}

impl Targets {
    /// Targets from raw field text. Both fields are sanitized.
    pub fn new(width: &str, height: &str) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Only a target width.
    pub fn width_only(width: u32) -> Self {
        Self::new(&alloc::format!("{width}"), "")
    }

    /// Only a target height.
    pub fn height_only(height: u32) -> Self {
        Self::new("", &alloc::format!("{height}"))
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    /// Sanitize and store the width text.
    pub fn set_width(&mut self, raw: &str) {
        self.width = sanitize(raw);
    }

    /// Sanitize and store the height text.
    pub fn set_height(&mut self, raw: &str) {
        self.height = sanitize(raw);
    }

    /// Whether at least one target dimension is positive.
    pub fn is_entered(&self) -> bool {
        parse_number(&self.width) > 0.0 || parse_number(&self.height) > 0.0
    }
}

/// Result of evaluating every ratio in a set.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Neither target dimension is positive.
    NoTargets,
    /// Targets are present but no ratio in the set is usable.
    NoValidRatios,
    /// One outcome per usable ratio, in set order.
    Results(Vec<ResolutionOutcome>),
}

impl Evaluation {
    /// Outcomes, empty for either empty state.
    pub fn outcomes(&self) -> &[ResolutionOutcome] {
        match self {
            Self::Results(v) => v.as_slice(),
            Self::NoTargets | Self::NoValidRatios => &[],
        }
    }

    /// Message shown in place of results, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::NoTargets => Some("Enter dimensions and ratios to see results"),
            Self::NoValidRatios => Some("Add valid aspect ratios to see results"),
            Self::Results(_) => None,
        }
    }
}

impl fmt::Display for Evaluation {
    /// The empty-state message, or one outcome per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.empty_message() {
            return f.write_str(msg);
        }
        for (i, outcome) in self.outcomes().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{outcome}")?;
        }
        Ok(())
    }
}

/// Resolve every entry of `ratios` against `targets`.
///
/// Ratios that resolve to nothing are left out; the two empty states are
/// reported separately so callers can tell "no input yet" from "no usable
/// ratio".
pub fn evaluate(targets: &Targets, ratios: &RatioSet) -> Evaluation {
    if !targets.is_entered() {
        return Evaluation::NoTargets;
    }
    let outcomes: Vec<ResolutionOutcome> = ratios
        .iter()
        .filter_map(|entry| entry.resolve(&targets.width, &targets.height))
        .collect();
    if outcomes.is_empty() {
        Evaluation::NoValidRatios
    } else {
        Evaluation::Results(outcomes)
    }
}
