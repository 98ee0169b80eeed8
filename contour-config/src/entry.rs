//! Documented configuration values.
//!
//! Every configurable field is a [`ConfigEntry`]: the value plus a static
//! documentation template. The writer emits the documentation above the
//! field, replacing [`COMMENT_PLACEHOLDER`] with the comment marker of the
//! output format.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Token in documentation templates that stands for the comment marker.
pub const COMMENT_PLACEHOLDER: &str = "{comment}";

/// A configuration value with attached documentation.
///
/// Comparison, ordering and hashing only look at the value.
#[derive(Debug, Clone)]
pub struct ConfigEntry<T> {
    value: T,
    documentation: &'static str,
}

impl<T> ConfigEntry<T> {
    pub const fn new(value: T, documentation: &'static str) -> Self {
        Self {
            value,
            documentation,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// The raw documentation template.
    pub fn documentation(&self) -> &'static str {
        self.documentation
    }

    /// Documentation with the placeholder replaced by `marker`.
    pub fn documentation_with(&self, marker: &str) -> String {
        self.documentation.replace(COMMENT_PLACEHOLDER, marker)
    }
}

impl<T: Default> ConfigEntry<T> {
    /// Entry holding `T::default()`.
    pub fn with_default(documentation: &'static str) -> Self {
        Self::new(T::default(), documentation)
    }
}

impl<T> Deref for ConfigEntry<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for ConfigEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ConfigEntry<T> {}

impl<T: PartialOrd> PartialOrd for ConfigEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for ConfigEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for ConfigEntry<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
