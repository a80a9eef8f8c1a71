//! Ordered, editable list of ratio entries.
//!
//! Entries are identified by a [`RatioId`] that is assigned from a monotonic
//! counter and never reused, so an id stays valid (or permanently invalid)
//! no matter how the list is edited. The set never becomes empty: removing
//! the last entry is refused.
//!
//! ```
//! use zenaspect::{RatioField, RatioSet};
//!
//! let mut set = RatioSet::default(); // 16:9, 9:16, 4:3, 3:4
//! let id = set.add();
//! set.update(id, RatioField::Numerator, "21");
//! set.update(id, RatioField::Denominator, "09");
//!
//! let entry = set.get(id).unwrap();
//! assert_eq!((entry.numerator(), entry.denominator()), ("21", "9"));
//! assert_eq!(set.len(), 5);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::resolve::{self, ResolutionOutcome};
use crate::sanitize::sanitize;

/// The ratios a fresh set starts with, in presentation order.
pub const DEFAULT_RATIOS: [(u32, u32); 4] = [(16, 9), (9, 16), (4, 3), (3, 4)];

/// Stable identifier of a ratio entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatioId(pub u64);

impl fmt::Display for RatioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Editable field of a ratio entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RatioField {
    /// Width side of the ratio.
    Numerator,
    /// Height side of the ratio.
    Denominator,
}

/// One ratio in a [`RatioSet`].
///
/// Fields hold sanitized text and may be empty while being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioEntry {
    id: RatioId,
    numerator: String,
    denominator: String,
}

impl RatioEntry {
    pub fn id(&self) -> RatioId {
        self.id
    }

    pub fn numerator(&self) -> &str {
        &self.numerator
    }

    pub fn denominator(&self) -> &str {
        &self.denominator
    }

    /// Text of the given field.
    pub fn field(&self, field: RatioField) -> &str {
        match field {
            RatioField::Numerator => &self.numerator,
            RatioField::Denominator => &self.denominator,
        }
    }

    /// Resolve target field text against this entry's ratio.
    pub fn resolve(&self, target_width: &str, target_height: &str) -> Option<ResolutionOutcome> {
        resolve::resolve(target_width, target_height, &self.numerator, &self.denominator)
    }

    fn field_mut(&mut self, field: RatioField) -> &mut String {
        match field {
            RatioField::Numerator => &mut self.numerator,
            RatioField::Denominator => &mut self.denominator,
        }
    }
}

/// Ordered collection of ratio entries. Always holds at least one entry.
///
/// Insertion order is presentation order, and evaluation reports results
/// in this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioSet {
    entries: Vec<RatioEntry>,
    next_id: u64,
}

impl Default for RatioSet {
    /// The standard set: 16:9, 9:16, 4:3, 3:4.
    fn default() -> Self {
        Self::from_ratios(DEFAULT_RATIOS)
    }
}

impl RatioSet {
    /// A set holding a single blank entry.
    pub fn new() -> Self {
        let mut set = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        set.add();
        set
    }

    /// A set seeded from `(numerator, denominator)` pairs, in order.
    ///
    /// An empty iterator yields a set with one blank entry.
    pub fn from_ratios<I>(ratios: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut set = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        for (n, d) in ratios {
            set.add_with(n, d);
        }
        if set.entries.is_empty() {
            set.add();
        }
        set
    }

    /// Append a blank entry and return its id.
    pub fn add(&mut self) -> RatioId {
        self.push(String::new(), String::new())
    }

    /// Append an entry seeded with `numerator:denominator` and return its id.
    pub fn add_with(&mut self, numerator: u32, denominator: u32) -> RatioId {
        self.push(numerator.to_string(), denominator.to_string())
    }

    fn push(&mut self, numerator: String, denominator: String) -> RatioId {
        let id = RatioId(self.next_id);
        self.next_id += 1;
        self.entries.push(RatioEntry {
            id,
            numerator,
            denominator,
        });
        id
    }

    /// Remove the entry with `id`.
    ///
    /// Returns `false` without changing anything if `id` is unknown or the
    /// entry is the last one left.
    pub fn remove(&mut self, id: RatioId) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        match self.position(id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Sanitize `raw` and store it in `field` of the entry with `id`.
    ///
    /// Returns `false` without changing anything if `id` is unknown.
    pub fn update(&mut self, id: RatioId, field: RatioField, raw: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                *entry.field_mut(field) = sanitize(raw);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: RatioId) -> Option<&RatioEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in presentation order.
    pub fn iter(&self) -> core::slice::Iter<'_, RatioEntry> {
        self.entries.iter()
    }

    /// Entry ids in presentation order.
    pub fn ids(&self) -> impl Iterator<Item = RatioId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a set keeps at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: RatioId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a RatioSet {
    type Item = &'a RatioEntry;
    type IntoIter = core::slice::Iter<'a, RatioEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::vec;

    fn fields(set: &RatioSet) -> Vec<(&str, &str)> {
        set.iter().map(|e| (e.numerator(), e.denominator())).collect()
    }

    #[test]
    fn default_seeds_standard_ratios() {
        let set = RatioSet::default();
        assert_eq!(
            fields(&set),
            vec![("16", "9"), ("9", "16"), ("4", "3"), ("3", "4")]
        );
        assert_eq!(
            set.ids().collect::<Vec<_>>(),
            vec![RatioId(0), RatioId(1), RatioId(2), RatioId(3)]
        );
    }

    #[test]
    fn new_holds_one_blank_entry() {
        let set = RatioSet::new();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert_eq!(fields(&set), vec![("", "")]);
    }

    #[test]
    fn from_empty_iterator_holds_one_blank_entry() {
        let set = RatioSet::from_ratios([]);
        assert_eq!(fields(&set), vec![("", "")]);
        assert_eq!(set.ids().next(), Some(RatioId(0)));
    }

    #[test]
    fn add_appends_at_end() {
        let mut set = RatioSet::default();
        let blank = set.add();
        let wide = set.add_with(21, 9);
        assert_eq!(blank, RatioId(4));
        assert_eq!(wide, RatioId(5));
        assert_eq!(set.len(), 6);
        assert_eq!(fields(&set)[4..], [("", ""), ("21", "9")]);
    }

    #[test]
    fn remove_preserves_order() {
        let mut set = RatioSet::default();
        assert!(set.remove(RatioId(1)));
        assert_eq!(fields(&set), vec![("16", "9"), ("4", "3"), ("3", "4")]);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut set = RatioSet::default();
        let before = set.clone();
        assert!(!set.remove(RatioId(42)));
        assert_eq!(set, before);
    }

    #[test]
    fn remove_refuses_last_entry() {
        let mut set = RatioSet::default();
        for id in [0, 1, 2] {
            assert!(set.remove(RatioId(id)));
        }
        assert_eq!(set.len(), 1);
        assert!(!set.remove(RatioId(3)));
        assert_eq!(set.len(), 1);
        assert_eq!(fields(&set), vec![("3", "4")]);
    }

    #[test]
    fn ids_never_reused_after_removal() {
        let mut set = RatioSet::default();
        assert!(set.remove(RatioId(3)));
        assert!(set.remove(RatioId(2)));
        let id = set.add();
        assert_eq!(id, RatioId(4));
        assert!(set.get(RatioId(3)).is_none());
    }

    #[test]
    fn update_sanitizes() {
        let mut set = RatioSet::default();
        assert!(set.update(RatioId(0), RatioField::Numerator, "0021a"));
        assert!(set.update(RatioId(0), RatioField::Denominator, "-9"));
        let e = set.get(RatioId(0)).unwrap();
        assert_eq!(e.field(RatioField::Numerator), "21");
        assert_eq!(e.field(RatioField::Denominator), "9");
    }

    #[test]
    fn update_can_clear_field() {
        let mut set = RatioSet::default();
        assert!(set.update(RatioId(2), RatioField::Denominator, ""));
        assert_eq!(set.get(RatioId(2)).unwrap().denominator(), "");
    }

    #[test]
    fn update_unknown_is_noop() {
        let mut set = RatioSet::default();
        let before = set.clone();
        assert!(!set.update(RatioId(5), RatioField::Numerator, "12"));
        assert_eq!(set, before);
    }

    #[test]
    fn entry_resolves_its_ratio() {
        let set = RatioSet::default();
        let o = set.get(RatioId(2)).unwrap().resolve("", "1080").unwrap();
        assert_eq!(o.width, 1440.0);
    }

    #[test]
    fn ids_strictly_increase_under_churn() {
        let mut set = RatioSet::new();
        let mut issued = vec![set.ids().next().unwrap()];
        for round in 0..50u32 {
            issued.push(set.add_with(round + 1, 1));
            if round % 3 == 0 {
                let first = set.ids().next().unwrap();
                set.remove(first);
            }
            assert!(set.len() >= 1);
        }
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }
}
