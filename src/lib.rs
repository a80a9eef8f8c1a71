//! Aspect ratio calculator core: dimension derivation, ratio matching, and ratio list state.
//!
//! Given a target width and/or height and a list of width:height ratios,
//! derive the dimension each ratio implies, or check a fully specified pair
//! against each ratio.
//!
//! # Modules
//!
//! - [`resolve`] — Single-ratio resolution engine, lenient number parsing
//! - [`ratio`] — Ratio values and `N:D` text form
//! - [`sanitize`] — Digit-only sanitization of editable fields
//! - [`ratio_set`] — Ordered ratio list with stable ids (requires `alloc`)
//! - [`evaluate`] — Whole-set evaluation and empty states (requires `alloc`)
//! - [`calculator`] — Owned state with change notification (requires `alloc`)
//!
//! # Example
//!
//! ```
//! use zenaspect::{Evaluation, RatioSet, Targets, evaluate};
//!
//! let ratios = RatioSet::default(); // 16:9, 9:16, 4:3, 3:4
//! let eval = evaluate(&Targets::new("", "1080"), &ratios);
//!
//! let widths: Vec<f64> = eval.outcomes().iter().map(|o| o.width).collect();
//! assert_eq!(widths, [1920.0, 608.0, 1440.0, 810.0]);
//!
//! assert_eq!(evaluate(&Targets::default(), &ratios), Evaluation::NoTargets);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod ratio;
pub mod resolve;
pub mod sanitize;

#[cfg(feature = "alloc")]
pub mod calculator;
#[cfg(feature = "alloc")]
pub mod evaluate;
#[cfg(feature = "alloc")]
pub mod ratio_set;

// Re-exports: core types
pub use ratio::{Ratio, RatioParseError};
pub use resolve::{
    MATCH_TOLERANCE, ResolutionOutcome, Supplied, parse_number, resolve, resolve_values,
};
pub use sanitize::is_sanitized;
#[cfg(feature = "alloc")]
pub use sanitize::sanitize;

#[cfg(feature = "alloc")]
pub use calculator::{Calculator, Observer, SubscriptionId};
#[cfg(feature = "alloc")]
pub use evaluate::{Evaluation, Targets, evaluate};
#[cfg(feature = "alloc")]
pub use ratio_set::{DEFAULT_RATIOS, RatioEntry, RatioField, RatioId, RatioSet};
