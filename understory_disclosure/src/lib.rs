// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_disclosure --heading-base-level=0

//! Understory Disclosure: collapsible and accordion state for UI toolkits.
//!
//! ## Overview
//!
//! This crate models the state behind disclosure widgets, independent of any
//! rendering layer:
//!
//! - [`controllable`]: a value that is either owned by the widget or supplied by its owner.
//! - [`collapsible`]: one trigger toggling one content region, with animated presence
//!   (via `understory_presence`) and content measurement.
//! - [`accordion`]: a group of collapsible items with single or multiple open values.
//! - [`nav`]: roving keyboard focus across triggers.
//! - [`id`]: identifiers linking triggers and content.
//!
//! ## Workflow
//!
//! 1) Build an [`Accordion`](crate::accordion::Accordion) or
//!    [`Collapsible`](crate::collapsible::Collapsible).
//! 2) On trigger activation call `toggle`, passing your
//!    [`PresenceHost`](understory_presence::types::PresenceHost).
//! 3) Render each content region while `should_render_content()` is true, and
//!    report its node to the item's presence controller.
//! 4) Forward animation events and fired callbacks to that presence controller.
//!
//! ## Example
//!
//! ```
//! use understory_disclosure::accordion::{Accordion, AccordionKind};
//! # use understory_presence::types::*;
//! # struct Host;
//! # impl AnimationObserver<u32> for Host {
//! #     fn observe(&mut self, _: &u32, _: AnimationListeners) {}
//! #     fn unobserve(&mut self, _: &u32, _: AnimationListeners) {}
//! # }
//! # impl PresenceHost<u32> for Host {
//! #     fn animation_snapshot(&self, _: &u32) -> AnimationSnapshot { AnimationSnapshot::default() }
//! #     fn fill_mode(&self, _: &u32) -> String { String::new() }
//! #     fn set_fill_mode(&mut self, _: &u32, _: &str) {}
//! #     fn schedule_callback(&mut self) -> CallbackId { CallbackId(0) }
//! #     fn cancel_callback(&mut self, _: CallbackId) {}
//! # }
//! # let mut host = Host;
//!
//! let mut faq: Accordion<u32> = Accordion::new(AccordionKind::Single { collapsible: true });
//! faq.add_item("who-can-donate");
//! faq.add_item("how-often");
//!
//! faq.toggle("how-often", &mut host);
//! assert!(faq.is_open("how-often"));
//! assert!(faq.item("how-often").unwrap().collapsible().should_render_content());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `trace`: forwarded to `understory_presence`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accordion;
pub mod collapsible;
pub mod controllable;
pub mod id;
pub mod nav;
