//! Configuration system for the contour terminal emulator.
//!
//! This crate turns the user's YAML document into a typed [`Config`] and
//! back. It includes:
//!
//! - Fail-soft document loading: problems become [`Diagnostics`], never a
//!   failed load
//! - Profiles that inherit everything they do not override from the default
//!   profile
//! - Named color schemes and input mapping rules
//! - A canonical writer that documents every entry
//! - Shared snapshots and a file watcher for live reload

pub mod config;
pub mod defaults;
pub mod docs;
pub mod entry;
pub mod error;
pub mod profile;
pub mod reader;
pub mod shared;
pub mod types;
#[cfg(feature = "watcher")]
pub mod watcher;
pub mod writer;

pub use config::Config;
pub use entry::ConfigEntry;
pub use error::{ConfigError, Diagnostic, Diagnostics, FieldError};
pub use profile::{InputMode, TerminalProfile};
pub use reader::load;
pub use shared::SharedConfig;
pub use types::{
    Background, Bell, ColorConfig, ColorPalette, CursorConfig, CursorShape, ExecutionProgram,
    FontConfig, FontDescription, FontLocator, FontSlant, FontWeight, History, ImagesConfig,
    NamedColors, OptionAsAlt, PageSize, Permission, Permissions, RenderMode, RendererConfig,
    RenderingBackend, RgbColor, ScrollBarPosition, Scrollbar, SshHost, StatusDisplayPosition,
    StatusDisplayType, StatusLine, TerminalId, TextShapingEngine, WindowMargins,
};
#[cfg(feature = "watcher")]
pub use watcher::{ConfigChange, ConfigWatcher};
pub use writer::serialize;

// The binding vocabulary is part of this crate's public surface.
pub use contour_keybindings as keybindings;
