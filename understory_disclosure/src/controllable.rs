// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value that is either owned by the widget or supplied by its owner.
//!
//! In **uncontrolled** mode the state keeps its own value, starting from a
//! default. In **controlled** mode the owner supplies the value through
//! [`ControllableState::set_prop`], and setters only report the requested
//! change; the visible value moves when the owner passes it back in.
//!
//! Either way the change callback fires once per setter call whose result
//! differs from the current value.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_disclosure::controllable::ControllableState;
//!
//! let seen = Rc::new(Cell::new(0));
//! let counter = seen.clone();
//! let mut open = ControllableState::new(None, false)
//!     .with_on_change(move |_: &bool| counter.set(counter.get() + 1));
//!
//! assert!(open.set(true));
//! assert!(!open.set(true));
//! assert!(*open.get());
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::boxed::Box;

/// Controlled or uncontrolled value with a change callback.
pub struct ControllableState<T> {
    prop: Option<T>,
    uncontrolled: T,
    on_change: Option<Box<dyn FnMut(&T)>>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for ControllableState<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllableState")
            .field("prop", &self.prop)
            .field("uncontrolled", &self.uncontrolled)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T: Default> Default for ControllableState<T> {
    fn default() -> Self {
        Self {
            prop: None,
            uncontrolled: T::default(),
            on_change: None,
        }
    }
}

impl<T: Clone + PartialEq> ControllableState<T> {
    /// Create a state. `prop` set means controlled; `default` seeds the uncontrolled value.
    pub fn new(prop: Option<T>, default: T) -> Self {
        Self {
            prop,
            uncontrolled: default,
            on_change: None,
        }
    }

    /// Install the change callback.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Whether the owner supplies the value.
    pub fn is_controlled(&self) -> bool {
        self.prop.is_some()
    }

    /// The current value.
    pub fn get(&self) -> &T {
        self.prop.as_ref().unwrap_or(&self.uncontrolled)
    }

    /// Re-supply the controlled value, or `None` to fall back to the internal one.
    ///
    /// This is how the owner answers a change notification; it does not fire
    /// the callback itself.
    pub fn set_prop(&mut self, prop: Option<T>) {
        self.prop = prop;
    }

    /// Request a new value. Returns `true` if it differed and the callback fired.
    pub fn set(&mut self, next: T) -> bool {
        if next == *self.get() {
            return false;
        }
        if let Some(on_change) = &mut self.on_change {
            on_change(&next);
        }
        if self.prop.is_none() {
            self.uncontrolled = next;
        }
        true
    }

    /// Request a value derived from the current one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(self.get());
        self.set(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recording<T: Clone + PartialEq + 'static>(
        prop: Option<T>,
        default: T,
    ) -> (ControllableState<T>, Rc<RefCell<Vec<T>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let state = ControllableState::new(prop, default)
            .with_on_change(move |v: &T| sink.borrow_mut().push(v.clone()));
        (state, log)
    }

    #[test]
    fn uncontrolled_updates_and_notifies_once() {
        let (mut s, log) = recording(None, false);
        assert!(!s.is_controlled());
        assert!(s.set(true));
        assert!(*s.get());
        assert!(!s.set(true));
        assert!(s.update(|v| !v));
        assert!(!*s.get());
        assert_eq!(*log.borrow(), [true, false]);
    }

    #[test]
    fn controlled_reports_but_keeps_prop() {
        let (mut s, log) = recording(Some(false), false);
        assert!(s.is_controlled());
        assert!(s.set(true));
        // Value only moves once the owner passes it back.
        assert!(!*s.get());
        s.set_prop(Some(true));
        assert!(*s.get());
        // Prop changes are not notifications.
        assert_eq!(*log.borrow(), [true]);
    }

    #[test]
    fn controlled_same_value_is_silent() {
        let (mut s, log) = recording(Some(3_u8), 0);
        assert!(!s.set(3));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn releasing_control_falls_back_to_internal_value() {
        let mut s = ControllableState::new(Some(7_u8), 1);
        assert_eq!(*s.get(), 7);
        s.set_prop(None);
        assert_eq!(*s.get(), 1);
    }

    #[test]
    fn no_callback_is_fine() {
        let mut s: ControllableState<u8> = ControllableState::default();
        assert!(s.set(4));
        assert_eq!(*s.get(), 4);
    }
}
