//! Top-level calculator state with change notification.
//!
//! [`Calculator`] owns the target dimensions and the ratio set. Every
//! mutation that takes effect notifies subscribed [`Observer`]s once it has
//! completed, so a presentation layer can re-run [`Calculator::evaluate`]
//! and redraw.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zenaspect::Calculator;
//!
//! let rendered = Rc::new(RefCell::new(String::new()));
//! let sink = Rc::clone(&rendered);
//!
//! let mut calc = Calculator::new();
//! calc.subscribe(move |c: &Calculator| *sink.borrow_mut() = c.evaluate().to_string());
//!
//! calc.set_width("1920");
//! assert!(rendered.borrow().starts_with("✓ 1920 × 1080 [16:9]"));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::evaluate::{Evaluation, Targets, evaluate};
use crate::ratio_set::{RatioField, RatioId, RatioSet};

/// Receives a notification after each effective change to a [`Calculator`].
///
/// Any `FnMut(&Calculator)` closure is an observer.
pub trait Observer {
    fn changed(&mut self, calculator: &Calculator);
}

impl<F> Observer for F
where
    F: FnMut(&Calculator),
{
    fn changed(&mut self, calculator: &Calculator) {
        self(calculator)
    }
}

/// Handle returned by [`Calculator::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owned calculator state: target dimensions plus the ratio set.
pub struct Calculator {
    targets: Targets,
    ratios: RatioSet,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
    next_subscription: u64,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("targets", &self.targets)
            .field("ratios", &self.ratios)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Empty targets and the default ratios (16:9, 9:16, 4:3, 3:4).
    pub fn new() -> Self {
        Self::with_state(Targets::default(), RatioSet::default())
    }

    /// Start from existing targets and ratios.
    pub fn with_state(targets: Targets, ratios: RatioSet) -> Self {
        Self {
            targets,
            ratios,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn ratios(&self) -> &RatioSet {
        &self.ratios
    }

    /// Evaluate every ratio against the current targets.
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.targets, &self.ratios)
    }

    /// Register an observer. It is called after every effective mutation.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Sanitize and store the target width, then notify.
    pub fn set_width(&mut self, raw: &str) {
        self.targets.set_width(raw);
        self.notify();
    }

    /// Sanitize and store the target height, then notify.
    pub fn set_height(&mut self, raw: &str) {
        self.targets.set_height(raw);
        self.notify();
    }

    /// Append a blank ratio, then notify.
    pub fn add_ratio(&mut self) -> RatioId {
        let id = self.ratios.add();
        self.notify();
        id
    }

    /// Append a seeded ratio, then notify.
    pub fn add_ratio_with(&mut self, numerator: u32, denominator: u32) -> RatioId {
        let id = self.ratios.add_with(numerator, denominator);
        self.notify();
        id
    }

    /// Remove a ratio. Notifies only if something was removed.
    pub fn remove_ratio(&mut self, id: RatioId) -> bool {
        let removed = self.ratios.remove(id);
        if removed {
            self.notify();
        }
        removed
    }

    /// Edit a ratio field. Notifies only if `id` exists.
    pub fn update_ratio(&mut self, id: RatioId, field: RatioField, raw: &str) -> bool {
        let updated = self.ratios.update(id, field, raw);
        if updated {
            self.notify();
        }
        updated
    }

    fn notify(&mut self) {
        let mut observers = core::mem::take(&mut self.observers);
        for (_, observer) in &mut observers {
            observer.changed(self);
        }
        self.observers = observers;
    }
}
