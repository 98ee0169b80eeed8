//! Configuration value types.
//!
//! This module is split into focused sub-modules by domain:
//! - `color`     — RGB colors, palettes, scheme selection
//! - `font`      — Font descriptions and font pipeline settings
//! - `rendering` — Renderer backend and image limits
//! - `shell`     — Local program and SSH launch settings
//! - `terminal`  — Terminal identity, cursor, history, status line, permissions
//! - `window`    — Margins, size, background, bell

pub mod color;
pub mod font;
pub mod rendering;
pub mod shell;
pub mod terminal;
pub mod window;

pub use color::{ColorConfig, ColorPalette, NamedColors, RgbColor};
pub use font::{
    FontConfig, FontDescription, FontLocator, FontSlant, FontWeight, RenderMode,
    TextShapingEngine,
};
pub use rendering::{ImagesConfig, RendererConfig, RenderingBackend};
pub use shell::{ExecutionProgram, SshHost};
pub use terminal::{
    CursorConfig, CursorShape, History, OptionAsAlt, Permission, Permissions, ScrollBarPosition,
    Scrollbar, StatusDisplayPosition, StatusDisplayType, StatusLine, TerminalId,
};
pub use window::{Background, Bell, PageSize, WindowMargins};
