// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion: a set of collapsible items sharing one open-value state.
//!
//! ## Kinds
//!
//! - [`AccordionKind::Single`]: at most one item open. Opening an item replaces
//!   the open one. Closing is only allowed when `collapsible` is set; otherwise
//!   the open item's trigger reports `aria-disabled`.
//! - [`AccordionKind::Multiple`]: any number of items open.
//!
//! The open values live in a [`ControllableState`]. Each item wraps a
//! [`Collapsible`] whose open state is controlled by the accordion, so item
//! content gets animated presence for free.
//!
//! ## Keyboard
//!
//! [`Accordion::focus_target`] implements roving focus across enabled triggers
//! (see [`nav`](crate::nav)).

use alloc::string::String;
use alloc::vec::Vec;

use understory_presence::types::PresenceHost;

use crate::collapsible::{Collapsible, DisclosureState};
use crate::controllable::ControllableState;
use crate::id::DisclosureId;
use crate::nav::{Direction, NavKey, Orientation, next_index};

/// How many items may be open at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccordionKind {
    /// At most one item open.
    Single {
        /// Whether the open item may be closed, leaving none open.
        collapsible: bool,
    },
    /// Any number of items open.
    Multiple,
}

/// One accordion item: header trigger plus collapsible content.
#[derive(Debug)]
pub struct AccordionItem<N> {
    value: String,
    disabled: bool,
    trigger_id: DisclosureId,
    collapsible: Collapsible<N>,
}

impl<N: Clone + PartialEq> AccordionItem<N> {
    /// Value identifying this item in the accordion's open set.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Id of the trigger (for the content's `aria-labelledby`).
    pub fn trigger_id(&self) -> &DisclosureId {
        &self.trigger_id
    }

    /// Id of the content region (for the trigger's `aria-controls`).
    pub fn content_id(&self) -> &DisclosureId {
        self.collapsible.content_id()
    }

    /// Whether this item itself is disabled (ignoring the accordion flag).
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or enable this item.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// `data-state` of the item.
    pub fn data_state(&self) -> DisclosureState {
        self.collapsible.data_state()
    }

    /// The underlying collapsible.
    pub fn collapsible(&self) -> &Collapsible<N> {
        &self.collapsible
    }

    /// Mutable access to the underlying collapsible, for presence and measurement.
    pub fn collapsible_mut(&mut self) -> &mut Collapsible<N> {
        &mut self.collapsible
    }
}

/// Accordion state and item registry.
#[derive(Debug)]
pub struct Accordion<N> {
    kind: AccordionKind,
    value: ControllableState<Vec<String>>,
    items: Vec<AccordionItem<N>>,
    disabled: bool,
    orientation: Orientation,
    direction: Direction,
}

impl<N: Clone + PartialEq> Accordion<N> {
    /// Create an empty, uncontrolled accordion with nothing open.
    pub fn new(kind: AccordionKind) -> Self {
        Self {
            kind,
            value: ControllableState::default(),
            items: Vec::new(),
            disabled: false,
            orientation: Orientation::default(),
            direction: Direction::default(),
        }
    }

    /// Use a prepared open-value state. Call before adding items.
    #[must_use]
    pub fn with_value(mut self, value: ControllableState<Vec<String>>) -> Self {
        debug_assert!(self.items.is_empty(), "set the value before adding items");
        self.value = value;
        self
    }

    /// Disable every item and keyboard handling.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the trigger layout axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the reading direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// The accordion kind.
    pub fn kind(&self) -> AccordionKind {
        self.kind
    }

    /// Trigger layout axis (`data-orientation`).
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the whole accordion is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Register an item, or return the existing one with the same value.
    pub fn add_item(&mut self, value: impl Into<String>) -> &mut AccordionItem<N> {
        let value = value.into();
        if let Some(i) = self.index_of(&value) {
            return &mut self.items[i];
        }
        let open = self.is_open(&value);
        self.items.push(AccordionItem {
            value,
            disabled: false,
            trigger_id: DisclosureId::fallback(),
            collapsible: Collapsible::new(Some(open), false).with_disabled(self.disabled),
        });
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Registered items, in order.
    pub fn items(&self) -> &[AccordionItem<N>] {
        &self.items
    }

    /// Look up an item by value.
    pub fn item(&self, value: &str) -> Option<&AccordionItem<N>> {
        self.items.iter().find(|it| it.value == value)
    }

    /// Look up an item by value for mutation.
    pub fn item_mut(&mut self, value: &str) -> Option<&mut AccordionItem<N>> {
        self.items.iter_mut().find(|it| it.value == value)
    }

    /// Values of the open items.
    pub fn open_values(&self) -> &[String] {
        let all = self.value.get();
        match self.kind {
            AccordionKind::Single { .. } => &all[..all.len().min(1)],
            AccordionKind::Multiple => all,
        }
    }

    /// Whether the item with `value` is open.
    pub fn is_open(&self, value: &str) -> bool {
        self.open_values().iter().any(|v| v == value)
    }

    /// Whether the item's trigger is disabled, by itself or through the accordion.
    pub fn is_item_disabled(&self, value: &str) -> bool {
        self.disabled || self.item(value).is_some_and(|it| it.disabled)
    }

    /// `aria-disabled` for a trigger: an open item that cannot be closed.
    pub fn trigger_aria_disabled(&self, value: &str) -> bool {
        matches!(self.kind, AccordionKind::Single { collapsible: false }) && self.is_open(value)
    }

    /// Trigger activation. Returns `true` if a change was requested.
    pub fn toggle<H: PresenceHost<N>>(&mut self, value: &str, host: &mut H) -> bool {
        if self.item(value).is_none() || self.is_item_disabled(value) {
            return false;
        }
        if self.is_open(value) {
            self.close_item(value, host)
        } else {
            self.open_item(value, host)
        }
    }

    /// Request that `value` be open.
    pub fn open_item<H: PresenceHost<N>>(&mut self, value: &str, host: &mut H) -> bool {
        let changed = match self.kind {
            AccordionKind::Single { .. } => self.value.set(alloc::vec![String::from(value)]),
            AccordionKind::Multiple => self.value.update(|prev| {
                let mut next = prev.clone();
                if !next.iter().any(|v| v == value) {
                    next.push(String::from(value));
                }
                next
            }),
        };
        self.sync(host);
        changed
    }

    /// Request that `value` be closed. Single accordions only close when collapsible.
    pub fn close_item<H: PresenceHost<N>>(&mut self, value: &str, host: &mut H) -> bool {
        let changed = match self.kind {
            AccordionKind::Single { collapsible: false } => false,
            AccordionKind::Single { collapsible: true } => {
                if self.is_open(value) {
                    self.value.set(Vec::new())
                } else {
                    false
                }
            }
            AccordionKind::Multiple => self
                .value
                .update(|prev| prev.iter().filter(|v| *v != value).cloned().collect()),
        };
        self.sync(host);
        changed
    }

    /// Re-supply the controlled open values (or `None` to go uncontrolled).
    pub fn set_value_prop<H: PresenceHost<N>>(&mut self, value: Option<Vec<String>>, host: &mut H) {
        self.value.set_prop(value);
        self.sync(host);
    }

    /// Push the open values and disabled flags into every item.
    pub fn sync<H: PresenceHost<N>>(&mut self, host: &mut H) {
        for i in 0..self.items.len() {
            let open = self.is_open(&self.items[i].value);
            let disabled = self.disabled || self.items[i].disabled;
            let collapsible = &mut self.items[i].collapsible;
            collapsible.set_disabled(disabled);
            collapsible.set_open_prop(Some(open), host);
        }
    }

    /// Value of the trigger to focus after `key` is pressed on the trigger for `focused`.
    ///
    /// Returns `None` when the accordion is disabled or `focused` is not an
    /// enabled trigger.
    pub fn focus_target(&self, focused: &str, key: NavKey) -> Option<&str> {
        if self.disabled {
            return None;
        }
        let enabled: Vec<&AccordionItem<N>> = self
            .items
            .iter()
            .filter(|it| !it.disabled)
            .collect();
        let current = enabled.iter().position(|it| it.value == focused)?;
        let next = next_index(current, enabled.len(), key, self.orientation, self.direction);
        let target: &AccordionItem<N> = enabled[next];
        Some(target.value())
    }

    fn index_of(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|it| it.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use understory_presence::machine::PresenceState;
    use understory_presence::types::{
        AnimationEvent, AnimationListeners, AnimationObserver, AnimationSnapshot, CallbackId,
    };

    #[derive(Default)]
    struct Host {
        animation: &'static str,
    }

    impl AnimationObserver<u32> for Host {
        fn observe(&mut self, _node: &u32, _listeners: AnimationListeners) {}
        fn unobserve(&mut self, _node: &u32, _listeners: AnimationListeners) {}
    }

    impl PresenceHost<u32> for Host {
        fn animation_snapshot(&self, _node: &u32) -> AnimationSnapshot {
            AnimationSnapshot::new(self.animation, false)
        }
        fn fill_mode(&self, _node: &u32) -> String {
            String::new()
        }
        fn set_fill_mode(&mut self, _node: &u32, _fill_mode: &str) {}
        fn schedule_callback(&mut self) -> CallbackId {
            CallbackId(0)
        }
        fn cancel_callback(&mut self, _callback: CallbackId) {}
    }

    fn faq(kind: AccordionKind) -> Accordion<u32> {
        let mut a = Accordion::new(kind);
        for v in ["eligibility", "frequency", "preparation"] {
            a.add_item(v);
        }
        a
    }

    #[test]
    fn single_replaces_open_item() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Single { collapsible: false });
        assert!(a.toggle("eligibility", &mut host));
        assert!(a.toggle("frequency", &mut host));
        assert_eq!(a.open_values(), ["frequency"]);
        assert!(!a.is_open("eligibility"));
        assert!(a.item("frequency").unwrap().collapsible().should_render_content());
        assert!(!a.item("eligibility").unwrap().collapsible().should_render_content());
    }

    #[test]
    fn single_non_collapsible_cannot_close() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Single { collapsible: false });
        a.toggle("frequency", &mut host);
        assert!(a.trigger_aria_disabled("frequency"));
        assert!(!a.toggle("frequency", &mut host));
        assert!(a.is_open("frequency"));
    }

    #[test]
    fn single_collapsible_closes() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Single { collapsible: true });
        a.toggle("frequency", &mut host);
        assert!(!a.trigger_aria_disabled("frequency"));
        assert!(a.toggle("frequency", &mut host));
        assert!(a.open_values().is_empty());
        assert_eq!(
            a.item("frequency").unwrap().data_state(),
            DisclosureState::Closed
        );
    }

    #[test]
    fn multiple_opens_independently() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Multiple);
        a.toggle("eligibility", &mut host);
        a.toggle("preparation", &mut host);
        assert_eq!(a.open_values(), ["eligibility", "preparation"]);
        a.toggle("eligibility", &mut host);
        assert_eq!(a.open_values(), ["preparation"]);
        assert!(!a.trigger_aria_disabled("preparation"));
    }

    #[test]
    fn controlled_value_reports_and_waits() {
        let mut host = Host::default();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        let value = ControllableState::new(Some(Vec::new()), Vec::new())
            .with_on_change(move |v: &Vec<String>| sink.borrow_mut().push(v.clone()));
        let mut a: Accordion<u32> = Accordion::new(AccordionKind::Multiple).with_value(value);
        a.add_item("eligibility");

        assert!(a.toggle("eligibility", &mut host));
        assert!(!a.is_open("eligibility"));
        assert_eq!(*requests.borrow(), [vec![String::from("eligibility")]]);

        a.set_value_prop(Some(vec![String::from("eligibility")]), &mut host);
        assert!(a.is_open("eligibility"));
        assert!(
            a.item("eligibility")
                .unwrap()
                .collapsible()
                .should_render_content()
        );
    }

    #[test]
    fn disabled_items_are_skipped() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Multiple);
        a.item_mut("frequency").unwrap().set_disabled(true);
        assert!(!a.toggle("frequency", &mut host));
        assert_eq!(
            a.focus_target("eligibility", NavKey::ArrowDown),
            Some("preparation")
        );
        assert_eq!(a.focus_target("frequency", NavKey::ArrowDown), None);
    }

    #[test]
    fn disabled_accordion_ignores_everything() {
        let mut host = Host::default();
        let mut a: Accordion<u32> = Accordion::new(AccordionKind::Multiple).with_disabled(true);
        a.add_item("eligibility");
        assert!(!a.toggle("eligibility", &mut host));
        assert_eq!(a.focus_target("eligibility", NavKey::Home), None);
        assert!(a.item("eligibility").unwrap().collapsible().is_disabled());
    }

    #[test]
    fn horizontal_rtl_navigation() {
        let a = faq(AccordionKind::Multiple)
            .with_orientation(Orientation::Horizontal)
            .with_direction(Direction::Rtl);
        assert_eq!(
            a.focus_target("eligibility", NavKey::ArrowLeft),
            Some("frequency")
        );
        assert_eq!(
            a.focus_target("eligibility", NavKey::ArrowRight),
            Some("preparation")
        );
        assert_eq!(a.focus_target("frequency", NavKey::End), Some("preparation"));
    }

    #[test]
    fn unknown_items_do_nothing() {
        let mut host = Host::default();
        let mut a = faq(AccordionKind::Multiple);
        assert!(!a.toggle("missing", &mut host));
        assert_eq!(a.focus_target("missing", NavKey::Home), None);
    }

    #[test]
    fn adding_duplicate_returns_existing() {
        let mut a = faq(AccordionKind::Multiple);
        let id = a.item("frequency").unwrap().trigger_id().clone();
        assert_eq!(a.add_item("frequency").trigger_id(), &id);
        assert_eq!(a.items().len(), 3);
    }

    #[test]
    fn closing_item_runs_exit_animation() {
        let mut host = Host {
            animation: "accordion-down",
        };
        let mut a = faq(AccordionKind::Single { collapsible: true });
        a.toggle("frequency", &mut host);
        let item = a.item_mut("frequency").unwrap();
        item.collapsible_mut()
            .presence_mut()
            .set_node(Some(9), &mut host);

        host.animation = "accordion-up";
        a.toggle("frequency", &mut host);
        let presence = a.item("frequency").unwrap().collapsible().presence();
        assert_eq!(presence.state(), PresenceState::UnmountSuspended);

        a.item_mut("frequency")
            .unwrap()
            .collapsible_mut()
            .presence_mut()
            .on_animation_event(&AnimationEvent::end(9, "accordion-up"), &mut host);
        assert!(
            !a.item("frequency")
                .unwrap()
                .collapsible()
                .should_render_content()
        );
    }
}
