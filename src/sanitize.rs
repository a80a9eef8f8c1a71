//! Text sanitization for dimension and ratio fields.
//!
//! Every editable field (target width, target height, ratio numerator,
//! ratio denominator) goes through the same filter: keep decimal digits
//! only, then drop leading zeros unless the field is exactly `"0"`.
//!
//! ```
//! use zenaspect::sanitize::sanitize;
//!
//! assert_eq!(sanitize("1,920px"), "1920");
//! assert_eq!(sanitize("007"), "7");
//! assert_eq!(sanitize("0"), "0");
//! assert_eq!(sanitize("-16.5"), "165");
//! ```

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Sanitize raw field text.
///
/// Strips all characters that are not ASCII decimal digits. If what remains
/// is longer than one character and starts with `'0'`, all leading zeros are
/// removed, so `"00"` becomes `""` while `"0"` is kept.
#[cfg(feature = "alloc")]
pub fn sanitize(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 1 && digits.starts_with('0') {
        String::from(digits.trim_start_matches('0'))
    } else {
        digits
    }
}

/// Whether `text` is already in sanitized form.
///
/// True when `text` contains only ASCII digits and does not carry a leading
/// zero (a lone `"0"` is allowed). `sanitize` always produces text for which
/// this holds.
pub fn is_sanitized(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit()) && !(text.len() > 1 && text.starts_with('0'))
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn strips_non_digits() {
        assert_eq!(sanitize("12a3"), "123");
        assert_eq!(sanitize(" 1 9 2 0 "), "1920");
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn strips_sign_and_decimal_point() {
        assert_eq!(sanitize("-5"), "5");
        assert_eq!(sanitize("+5"), "5");
        assert_eq!(sanitize("1.5"), "15");
        assert_eq!(sanitize("1e3"), "13");
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(sanitize("0"), "0");
        assert_eq!(sanitize("00"), "");
        assert_eq!(sanitize("000"), "");
        assert_eq!(sanitize("0016"), "16");
        assert_eq!(sanitize("100"), "100");
        assert_eq!(sanitize("x0y9"), "9");
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        // Arabic-Indic and fullwidth digits are not decimal ASCII.
        assert_eq!(sanitize("١٢"), "");
        assert_eq!(sanitize("１6"), "6");
    }

    #[test]
    fn is_sanitized_matches_contract() {
        assert!(is_sanitized(""));
        assert!(is_sanitized("0"));
        assert!(is_sanitized("1080"));
        assert!(!is_sanitized("01"));
        assert!(!is_sanitized("00"));
        assert!(!is_sanitized("1 0"));
        assert!(!is_sanitized("-1"));
    }

    /// Inputs built from a small alphabet, covering every 1–4 char combination.
    fn sample_inputs() -> Vec<alloc::string::String> {
        const ALPHABET: [&str; 7] = ["0", "1", "9", "a", "-", ".", " "];
        let mut out = alloc::vec![alloc::string::String::new()];
        let mut frontier = out.clone();
        for _ in 0..4 {
            let mut next = Vec::new();
            for prefix in &frontier {
                for c in ALPHABET {
                    next.push(format!("{prefix}{c}"));
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn sanitize_invariants() {
        let mut failures = Vec::new();
        for raw in sample_inputs() {
            let once = sanitize(&raw);
            let twice = sanitize(&once);
            if once != twice {
                failures.push(format!("{raw:?}: not idempotent ({once:?} -> {twice:?})"));
            }
            if !is_sanitized(&once) {
                failures.push(format!("{raw:?}: output {once:?} not sanitized"));
            }
        }
        assert!(
            failures.is_empty(),
            "{} failures:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}
