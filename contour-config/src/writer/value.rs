//! Scalar, enum and collection writers.

use super::{DocumentWriter, plain_or_quoted, quote};
use crate::types::{
    CursorShape, FontLocator, FontSlant, FontWeight, OptionAsAlt, Permission, RenderMode,
    RenderingBackend, ScrollBarPosition, StatusDisplayPosition, StatusDisplayType, TerminalId,
    TextShapingEngine,
};
use serde::Serialize;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Emit a value under `key` at the writer's current depth.
pub(crate) trait WriteValue {
    fn write_value(&self, key: &str, w: &mut DocumentWriter);
}

/// Values that fit on the line of their key.
pub(crate) trait ScalarText {
    fn scalar_text(&self) -> String;
}

macro_rules! write_as_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WriteValue for $ty {
                fn write_value(&self, key: &str, w: &mut DocumentWriter) {
                    w.scalar(key, &self.scalar_text());
                }
            }
        )*
    };
}

impl ScalarText for bool {
    fn scalar_text(&self) -> String {
        self.to_string()
    }
}

macro_rules! integer_text {
    ($($ty:ty),*) => {
        $(
            impl ScalarText for $ty {
                fn scalar_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_text!(u16, u32, u64, usize, i64);

impl ScalarText for f32 {
    fn scalar_text(&self) -> String {
        // Debug keeps the decimal point, so `12.0` is read back as a float.
        format!("{self:?}")
    }
}

impl ScalarText for String {
    fn scalar_text(&self) -> String {
        quote(self)
    }
}

/// Milliseconds.
impl ScalarText for Duration {
    fn scalar_text(&self) -> String {
        self.as_millis().to_string()
    }
}

write_as_scalar!(bool, u16, u32, u64, usize, i64, f32, String, Duration);

// ============================================================================
// Named Enumerations
// ============================================================================

/// The serde name of an enum variant, the form the reader accepts.
fn enum_text<T: Serialize>(value: &T) -> String {
    match serde_yaml_ng::to_value(value) {
        Ok(Value::String(name)) => plain_or_quoted(&name),
        _ => "~".to_string(),
    }
}

macro_rules! enum_writers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarText for $ty {
                fn scalar_text(&self) -> String {
                    enum_text(self)
                }
            }
        )*
        write_as_scalar!($($ty),*);
    };
}

enum_writers!(
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

impl WriteValue for Vec<String> {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let items: Vec<String> = self.iter().map(|item| quote(item)).collect();
        w.scalar(key, &format!("[{}]", items.join(", ")));
    }
}

impl WriteValue for BTreeMap<String, String> {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        if self.is_empty() {
            w.scalar(key, "{}");
            return;
        }
        let mut w = w.section(key);
        for (name, value) in self {
            w.scalar(name, &quote(value));
        }
    }
}

/// An absent value is written as null, which the reader turns back into `None`.
impl<T: WriteValue> WriteValue for Option<T> {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        match self {
            Some(value) => value.write_value(key, w),
            None => w.scalar(key, "~"),
        }
    }
}
