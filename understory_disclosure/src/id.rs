// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers linking triggers to the content they control.

use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_FALLBACK: AtomicU64 = AtomicU64::new(0);

/// Identifier for a disclosure part (content region, trigger).
///
/// Caller-supplied ids are kept verbatim. Fallback ids come from a
/// process-wide monotonic counter and render as `understory-<n>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureId {
    /// Generated from the process-wide counter.
    Fallback(u64),
    /// Supplied by the caller.
    Custom(String),
}

impl DisclosureId {
    /// Allocate a fresh fallback id.
    pub fn fallback() -> Self {
        Self::Fallback(NEXT_FALLBACK.fetch_add(1, Ordering::Relaxed))
    }

    /// Use `deterministic` if given, otherwise allocate a fallback id.
    pub fn or_fallback(deterministic: Option<String>) -> Self {
        match deterministic {
            Some(id) => Self::Custom(id),
            None => Self::fallback(),
        }
    }
}

impl core::fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fallback(n) => write!(f, "understory-{n}"),
            Self::Custom(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn fallback_ids_are_unique_and_increasing() {
        let (DisclosureId::Fallback(a), DisclosureId::Fallback(b)) =
            (DisclosureId::fallback(), DisclosureId::fallback())
        else {
            panic!("expected fallback ids");
        };
        assert!(b > a, "counter must be monotonic");
    }

    #[test]
    fn deterministic_id_wins() {
        let id = DisclosureId::or_fallback(Some(String::from("faq-1")));
        assert_eq!(id.to_string(), "faq-1");
    }

    #[test]
    fn fallback_renders_with_prefix() {
        assert_eq!(DisclosureId::Fallback(12).to_string(), "understory-12");
    }
}
