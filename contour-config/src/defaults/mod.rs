//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions that produce the
//! compiled-in defaults used by the `Default` impls of the config types,
//! the default profile and the default input mappings. Everything is
//! re-exported from this module so call sites use `crate::defaults::*`.

mod colors;
mod font;
mod input;
mod misc;
mod terminal;
mod window;

// ── Font ───────────────────────────────────────────────────────────────────
pub use font::{emoji_font_family, font_family, font_size};

// ── Window ─────────────────────────────────────────────────────────────────
pub use window::{columns, lines, wm_class};

// ── Terminal behaviour ─────────────────────────────────────────────────────
pub use terminal::{
    cursor_blink_interval, highlight_timeout, history_limit, scroll_multiplier, shell_environment,
    shell_program, smooth_line_scrolling, tab_width, vi_mode_scrolloff,
};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{color_palette, color_scheme_name};

// ── Input ──────────────────────────────────────────────────────────────────
pub use input::input_mappings;

// ── Global settings ────────────────────────────────────────────────────────
pub use misc::{
    early_exit_threshold, platform_plugin, profile_name, pty_buffer_size, read_buffer_size,
    sixel_register_count, tile_cache_count, tile_hashtable_slots, word_delimiters,
};
