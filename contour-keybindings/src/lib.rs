//! Input binding system for contour.
//!
//! This crate turns live input events into the actions configured for them.
//!
//! Features:
//! - Three binding channels: named keys, characters, mouse buttons
//! - Tri-state mode predicates (enabled / disabled / any) over terminal mode flags
//! - Exact modifier matching and first-match-wins resolution in insertion order
//! - Parsing of key, modifier, mouse button and mode names used by the config document

pub mod action;
pub mod binding;
mod matcher;
pub mod modes;
pub mod parser;

pub use action::{Action, CopyFormat};
pub use binding::{
    CharInputBinding, InputBinding, InputMappings, KeyInputBinding, MouseInputBinding,
    add_or_append, resolve,
};
pub use matcher::matches;
pub use modes::{MatchMode, MatchModes, ModeFlags};
pub use parser::{
    Key, Modifiers, MouseButton, ParseError, Trigger, parse_key_combo, parse_key_trigger,
    parse_modifier, parse_modifiers, parse_mouse_button, parse_named_key,
};
