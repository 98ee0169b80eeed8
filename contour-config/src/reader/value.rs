//! Loaders for scalar and collection field types.

use super::LoadContext;
use crate::error::FieldError;
use crate::types::{
    CursorShape, FontLocator, FontSlant, FontWeight, OptionAsAlt, Permission, RenderMode,
    RenderingBackend, ScrollBarPosition, StatusDisplayPosition, StatusDisplayType, TerminalId,
    TextShapingEngine,
};
use serde::de::DeserializeOwned;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// A field type that can overlay itself from a document node.
///
/// Implementations must leave `self` unchanged for any part of the node that
/// fails to convert, reporting the failure through `ctx` instead.
pub(crate) trait LoadValue {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext);
}

/// A type converted from a single node in one step.
pub(crate) trait FromNode: Sized {
    fn from_node(node: &Value) -> Result<Self, FieldError>;
}

macro_rules! load_from_node {
    ($($ty:ty),* $(,)?) => {$(
        impl LoadValue for $ty {
            fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
                match <$ty as FromNode>::from_node(node) {
                    Ok(value) => *self = value,
                    Err(e) => ctx.report(path, e),
                }
            }
        }
    )*};
}

// ============================================================================
// Primitive Scalars
// ============================================================================

impl FromNode for bool {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        node.as_bool()
            .ok_or_else(|| FieldError::mismatch("a boolean", node))
    }
}

macro_rules! integer_from_node {
    ($($ty:ty),* $(,)?) => {$(
        impl FromNode for $ty {
            fn from_node(node: &Value) -> Result<Self, FieldError> {
                let out_of_range = |value: String| FieldError::OutOfRange {
                    value,
                    range: concat!("must fit in ", stringify!($ty)),
                };
                if let Some(n) = node.as_u64() {
                    <$ty>::try_from(n).map_err(|_| out_of_range(n.to_string()))
                } else if let Some(n) = node.as_i64() {
                    <$ty>::try_from(n).map_err(|_| out_of_range(n.to_string()))
                } else {
                    Err(FieldError::mismatch("an integer", node))
                }
            }
        }
    )*};
}

integer_from_node!(u16, u32, u64, usize, i64);

impl FromNode for f32 {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node.as_f64() {
            Some(n) if n.is_finite() => Ok(n as f32),
            Some(n) => Err(FieldError::OutOfRange {
                value: n.to_string(),
                range: "must be finite",
            }),
            None => Err(FieldError::mismatch("a number", node)),
        }
    }
}

/// Strings also accept plain numbers and booleans, taken literally.
impl FromNode for String {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(FieldError::mismatch("a string", other)),
        }
    }
}

/// Durations are written as integer milliseconds.
impl FromNode for Duration {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node.as_u64() {
            Some(ms) => Ok(Duration::from_millis(ms)),
            None if node.as_i64().is_some() => Err(FieldError::OutOfRange {
                value: node.as_i64().unwrap_or_default().to_string(),
                range: "milliseconds must not be negative",
            }),
            None => Err(FieldError::mismatch("a duration in milliseconds", node)),
        }
    }
}

load_from_node!(bool, u16, u32, u64, usize, i64, f32, String, Duration);

// ============================================================================
// Named Enumerations
// ============================================================================

/// Decode a serde enum from its document name.
///
/// The exact name is tried first, then its lower- and upper-case forms, so
/// `Block`, `block` and `BLOCK` all select the same variant.
fn enum_from_node<T: DeserializeOwned>(node: &Value) -> Result<T, FieldError> {
    let first_error = match serde_yaml_ng::from_value::<T>(node.clone()) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let Some(name) = node.as_str() {
        for candidate in [name.to_lowercase(), name.to_uppercase()] {
            if candidate != name
                && let Ok(value) = serde_yaml_ng::from_value::<T>(Value::String(candidate))
            {
                return Ok(value);
            }
        }
    }

    Err(FieldError::Invalid(first_error.to_string()))
}

macro_rules! enum_loaders {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromNode for $ty {
                fn from_node(node: &Value) -> Result<Self, FieldError> {
                    enum_from_node(node)
                }
            }
        )*
        load_from_node!($($ty),*);
    };
}

enum_loaders!(
    CursorShape,
    FontLocator,
    FontSlant,
    FontWeight,
    OptionAsAlt,
    Permission,
    RenderMode,
    RenderingBackend,
    ScrollBarPosition,
    StatusDisplayPosition,
    StatusDisplayType,
    TerminalId,
    TextShapingEngine,
);

// ============================================================================
// Collections
// ============================================================================

/// A list of strings; a single string is a one-element list.
impl FromNode for Vec<String> {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node {
            Value::Sequence(items) => items.iter().map(String::from_node).collect(),
            Value::Null => Ok(Vec::new()),
            Value::String(s) => Ok(vec![s.clone()]),
            other => Err(FieldError::mismatch("a list of strings", other)),
        }
    }
}

impl FromNode for BTreeMap<String, String> {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node {
            Value::Mapping(map) => map
                .iter()
                .map(|(key, value)| {
                    Ok::<_, FieldError>((String::from_node(key)?, String::from_node(value)?))
                })
                .collect(),
            Value::Null => Ok(BTreeMap::new()),
            other => Err(FieldError::mismatch("a mapping of strings", other)),
        }
    }
}

load_from_node!(Vec<String>, BTreeMap<String, String>);

/// Null clears an optional value; anything else loads into the current or
/// default value, which is only kept if it loaded cleanly.
impl<T: LoadValue + Default + Clone> LoadValue for Option<T> {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        if node.is_null() {
            *self = None;
            return;
        }
        let mut value = self.clone().unwrap_or_default();
        let before = ctx.len();
        value.load_into(node, path, ctx);
        if ctx.len() == before {
            *self = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml_ng::from_str(text).unwrap()
    }

    fn load<T: LoadValue>(mut target: T, text: &str) -> (T, usize) {
        let mut ctx = LoadContext::default();
        target.load_into(&yaml(text), "field", &mut ctx);
        (target, ctx.len())
    }

    #[test]
    fn test_integer_range_checked() {
        assert_eq!(load(7u16, "80"), (80, 0));
        assert_eq!(load(7u16, "70000"), (7, 1));
        assert_eq!(load(7u16, "-1"), (7, 1));
        assert_eq!(load(7i64, "-1"), (-1, 0));
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(load(1.0f32, "14"), (14.0, 0));
        assert_eq!(load(1.0f32, "0.5"), (0.5, 0));
        assert_eq!(load(1.0f32, "\"big\""), (1.0, 1));
    }

    #[test]
    fn test_duration_in_milliseconds() {
        assert_eq!(
            load(Duration::ZERO, "250"),
            (Duration::from_millis(250), 0)
        );
        assert_eq!(load(Duration::ZERO, "-5"), (Duration::ZERO, 1));
        assert_eq!(load(Duration::ZERO, "soon"), (Duration::ZERO, 1));
    }

    #[test]
    fn test_string_accepts_scalars_only() {
        assert_eq!(load(String::new(), "bash"), ("bash".to_string(), 0));
        assert_eq!(load(String::new(), "42"), ("42".to_string(), 0));
        assert_eq!(load("x".to_string(), "[a]"), ("x".to_string(), 1));
    }

    #[test]
    fn test_enum_case_insensitive() {
        assert_eq!(load(CursorShape::Block, "Bar"), (CursorShape::Bar, 0));
        assert_eq!(load(TerminalId::Vt525, "vt220"), (TerminalId::Vt220, 0));
        assert_eq!(
            load(CursorShape::Block, "triangle"),
            (CursorShape::Block, 1)
        );
    }

    #[test]
    fn test_list_rejected_whole_on_bad_element() {
        let original = vec!["-l".to_string()];
        let (list, errors) = load(original.clone(), "[\"-i\", [nested]]");
        assert_eq!(errors, 1);
        assert_eq!(list, original);
    }

    #[test]
    fn test_option_null_clears_and_bad_value_keeps() {
        assert_eq!(load(Some("a".to_string()), "~"), (None, 0));
        assert_eq!(
            load(None::<String>, "/var/log/x"),
            (Some("/var/log/x".to_string()), 0)
        );
        assert_eq!(load(None::<String>, "{a: 1}"), (None, 1));
    }
}
