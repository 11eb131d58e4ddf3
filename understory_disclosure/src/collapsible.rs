// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible: one trigger toggling one content region.
//!
//! ## Overview
//!
//! [`Collapsible`] owns the open state (controlled or uncontrolled, see
//! [`ControllableState`]) and drives a [`Presence`] for its content with
//! `present = force_mount || open`.
//!
//! ## Content size
//!
//! Height/width animations need the content's natural size. [`ContentMetrics`]
//! measures the content node with its animations switched off, then switches
//! them back on. Content that starts open skips its mount animation until the
//! host reports the first frame with [`ContentMetrics::first_frame`].

use alloc::format;
use alloc::string::String;

use kurbo::Size;
use understory_presence::presence::Presence;
use understory_presence::types::PresenceHost;

use crate::controllable::ControllableState;
use crate::id::DisclosureId;

/// Custom property carrying the measured content height.
pub const CONTENT_HEIGHT_VAR: &str = "--collapsible-content-height";
/// Custom property carrying the measured content width.
pub const CONTENT_WIDTH_VAR: &str = "--collapsible-content-width";

/// Open/closed state as exposed to styling (`data-state`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    /// Content is open.
    Open,
    /// Content is closed.
    Closed,
}

impl DisclosureState {
    /// State for an open flag.
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Attribute value: `"open"` or `"closed"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Inline styles that would animate the content while it is measured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineAnimationStyles {
    /// Inline `transition-duration`.
    pub transition_duration: String,
    /// Inline `animation-name`.
    pub animation_name: String,
}

impl InlineAnimationStyles {
    /// Styles that disable transitions and animations.
    pub fn suppressed() -> Self {
        Self {
            transition_duration: String::from("0s"),
            animation_name: String::from("none"),
        }
    }
}

/// Measurement access to a content node.
pub trait MeasureHost<N> {
    /// Read the node's inline animation styles.
    fn inline_animation_styles(&self, node: &N) -> InlineAnimationStyles;
    /// Write the node's inline animation styles.
    fn set_inline_animation_styles(&mut self, node: &N, styles: &InlineAnimationStyles);
    /// Size of the node's bounding box as currently laid out.
    fn bounding_size(&self, node: &N) -> Size;
}

/// Measured content size plus the bookkeeping needed to measure without animating.
#[derive(Clone, Debug)]
pub struct ContentMetrics {
    size: Size,
    original: Option<InlineAnimationStyles>,
    mount_animation_prevented: bool,
}

impl ContentMetrics {
    /// Metrics for content that is (or is not) open on its first frame.
    pub fn new(initially_open: bool) -> Self {
        Self {
            size: Size::ZERO,
            original: None,
            mount_animation_prevented: initially_open,
        }
    }

    /// Allow animations from now on. Call once the first frame has rendered.
    pub fn first_frame(&mut self) {
        self.mount_animation_prevented = false;
    }

    /// Whether the mount animation is still being held back.
    pub fn is_mount_animation_prevented(&self) -> bool {
        self.mount_animation_prevented
    }

    /// Measure `node` with animations off and return its size.
    ///
    /// The node's original inline styles are captured on the first call and
    /// restored afterwards, unless the mount animation is still prevented.
    pub fn measure<N, H: MeasureHost<N>>(&mut self, node: &N, host: &mut H) -> Size {
        let original = self
            .original
            .get_or_insert_with(|| host.inline_animation_styles(node))
            .clone();
        host.set_inline_animation_styles(node, &InlineAnimationStyles::suppressed());
        self.size = host.bounding_size(node);
        if !self.mount_animation_prevented {
            host.set_inline_animation_styles(node, &original);
        }
        self.size
    }

    /// Last measured size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Custom property values for the measured size; `None` while unmeasured.
    pub fn css_variables(&self) -> [(&'static str, Option<String>); 2] {
        let px = |v: f64| (v != 0.0).then(|| format!("{v}px"));
        [
            (CONTENT_HEIGHT_VAR, px(self.size.height)),
            (CONTENT_WIDTH_VAR, px(self.size.width)),
        ]
    }
}

/// A single disclosure: open state, trigger policy, and content presence.
#[derive(Debug)]
pub struct Collapsible<N> {
    open: ControllableState<bool>,
    disabled: bool,
    force_mount: bool,
    content_id: DisclosureId,
    presence: Presence<N>,
    metrics: ContentMetrics,
}

impl<N: Clone + PartialEq> Collapsible<N> {
    /// Create a collapsible.
    ///
    /// `open` set means controlled; `default_open` seeds the uncontrolled value.
    pub fn new(open: Option<bool>, default_open: bool) -> Self {
        Self::with_state(ControllableState::new(open, default_open))
    }

    /// Create a collapsible from a prepared open state (for example one with a change callback).
    pub fn with_state(open: ControllableState<bool>) -> Self {
        let is_open = *open.get();
        Self {
            open,
            disabled: false,
            force_mount: false,
            content_id: DisclosureId::fallback(),
            presence: Presence::new(is_open),
            metrics: ContentMetrics::new(is_open),
        }
    }

    /// Install a callback fired when the trigger requests a different open state.
    #[must_use]
    pub fn with_on_open_change(mut self, on_open_change: impl FnMut(&bool) + 'static) -> Self {
        self.open = self.open.with_on_change(on_open_change);
        self
    }

    /// Disable or enable the trigger.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Keep the content rendered regardless of the open state.
    ///
    /// Takes effect immediately; no host is involved because nothing is animating yet.
    #[must_use]
    pub fn with_force_mount(mut self, force_mount: bool) -> Self {
        self.force_mount = force_mount;
        self.presence = Presence::new(force_mount || *self.open.get());
        self
    }

    /// Use a caller-supplied content id.
    #[must_use]
    pub fn with_content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = DisclosureId::Custom(id.into());
        self
    }

    /// Whether the content is open.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// `data-state` value.
    pub fn data_state(&self) -> DisclosureState {
        DisclosureState::from_open(self.is_open())
    }

    /// Whether the trigger is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or enable the trigger.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the content is force-mounted.
    pub fn is_force_mounted(&self) -> bool {
        self.force_mount
    }

    /// Id of the content region (for `aria-controls`).
    pub fn content_id(&self) -> &DisclosureId {
        &self.content_id
    }

    /// Presence controller for the content.
    pub fn presence(&self) -> &Presence<N> {
        &self.presence
    }

    /// Mutable presence controller, for forwarding nodes, animation events, and callbacks.
    pub fn presence_mut(&mut self) -> &mut Presence<N> {
        &mut self.presence
    }

    /// Whether the content subtree should be rendered.
    pub fn should_render_content(&self) -> bool {
        self.presence.should_render(self.force_mount)
    }

    /// Whether rendered content should be marked hidden.
    pub fn is_content_hidden(&self) -> bool {
        !(self.is_open() || self.presence.is_present())
    }

    /// Content measurement state.
    pub fn metrics(&self) -> &ContentMetrics {
        &self.metrics
    }

    /// Mutable content measurement state.
    pub fn metrics_mut(&mut self) -> &mut ContentMetrics {
        &mut self.metrics
    }

    /// Trigger activation. Returns `true` if a change was requested.
    pub fn toggle<H: PresenceHost<N>>(&mut self, host: &mut H) -> bool {
        if self.disabled {
            return false;
        }
        let changed = self.open.update(|open| !open);
        self.sync(host);
        changed
    }

    /// Request an open state. Returns `true` if it differed from the current one.
    pub fn set_open<H: PresenceHost<N>>(&mut self, open: bool, host: &mut H) -> bool {
        let changed = self.open.set(open);
        self.sync(host);
        changed
    }

    /// Re-supply the controlled open value (or `None` to go uncontrolled).
    pub fn set_open_prop<H: PresenceHost<N>>(&mut self, open: Option<bool>, host: &mut H) {
        self.open.set_prop(open);
        self.sync(host);
    }

    /// Push the current open state into the content presence.
    pub fn sync<H: PresenceHost<N>>(&mut self, host: &mut H) {
        let present = self.force_mount || self.is_open();
        self.presence.set_present(present, host);
    }

    /// Measure the content node and return its size.
    pub fn measure_content<H: MeasureHost<N>>(&mut self, node: &N, host: &mut H) -> Size {
        self.metrics.measure(node, host)
    }
}
