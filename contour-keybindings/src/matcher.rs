//! Mode predicate evaluation.
//!
//! Tests a live [`ModeFlags`] snapshot against the tri-state requirements of
//! a binding.

use crate::modes::{MatchModes, ModeFlags};

/// Check whether the current terminal modes satisfy a binding's predicate.
///
/// Every flag required as enabled must be set in `actual`, every flag
/// required as disabled must be clear, and flags marked `Any` are ignored.
#[inline]
pub fn matches(actual: ModeFlags, required: &MatchModes) -> bool {
    actual.contains(required.enabled()) && !actual.intersects(required.disabled())
}
