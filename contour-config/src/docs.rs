//! Documentation templates attached to configuration entries.
//!
//! Every line starts with `{comment}`, which the writer replaces with the
//! comment marker of the output document.

// ── Global settings ────────────────────────────────────────────────────────

pub const PLATFORM_PLUGIN: &str = "\
{comment} Overrides the auto-detected platform plugin to be loaded.
{comment}
{comment} Possible (incomplete list of) values are:
{comment} - auto        The platform will be auto-detected.
{comment} - xcb         Uses XCB plugin (for X11 environment).
{comment} - cocoa       Used to be run on Mac OS/X.
{comment} - direct2d    Windows platform plugin using Direct2D.
{comment} - winrt       Windows platform plugin using WinRT.";

pub const RENDERER: &str = "\
{comment} Renderer settings.
{comment}
{comment} backend: default, opengl or software.
{comment} tile_hashtable_slots: number of hashtable slots of the glyph tile cache.
{comment} tile_cache_count: number of glyph tiles kept in the texture atlas.";

pub const WORD_DELIMITERS: &str = "\
{comment} Word delimiters used when selecting a word by double clicking.";

pub const READ_BUFFER_SIZE: &str = "\
{comment} Size in bytes of the buffer used to read from the PTY.";

pub const PTY_BUFFER_SIZE: &str = "\
{comment} Size in bytes of the per-terminal buffer holding PTY output
{comment} that has not been processed yet.";

pub const DEFAULT_PROFILE: &str = "\
{comment} Name of the profile used by default.
{comment} All other profiles inherit the settings of this profile.";

pub const SPAWN_NEW_PROCESS: &str = "\
{comment} Start a new process instead of a new window when a new terminal is requested.";

pub const LIVE_CONFIG: &str = "\
{comment} Reload the configuration file automatically when it changes on disk.";

pub const REFLOW_ON_RESIZE: &str = "\
{comment} Rewrap wrapped lines when the terminal width changes.";

pub const EARLY_EXIT_THRESHOLD: &str = "\
{comment} Time in milliseconds. If the shell exits before this time has passed,
{comment} the window stays open so the error output can be read.";

pub const IMAGES: &str = "\
{comment} Inline image settings.
{comment}
{comment} sixel_scrolling: scroll when a sixel image reaches the bottom margin.
{comment} sixel_register_count: number of color registers for sixel images.
{comment} max_width, max_height: image size limits in pixels (0 = screen size).";

pub const LOG_FILE: &str = "\
{comment} File to mirror log output into. Leave empty (~) to log to the console only.";

pub const PROFILES: &str = "\
{comment} Terminal profiles.
{comment} Every profile starts as a copy of the default profile and overrides
{comment} only the settings it lists.";

pub const COLOR_SCHEMES: &str = "\
{comment} Color schemes, referenced by name from a profile's `colors` setting.
{comment} Colors are written as #RRGGBB.";

pub const INPUT_MAPPING: &str = "\
{comment} Key and mouse bindings.
{comment}
{comment} Each rule has `mods` (Shift, Alt, Control, Meta), either `key`
{comment} (a named key such as Enter or F5, or a single character) or `mouse`
{comment} (Left, Middle, Right, WheelUp, WheelDown), an optional `mode`
{comment} such as \"Select|~Insert\" and an `action` with its parameters.
{comment} The first matching rule wins.";

// ── Profile settings ───────────────────────────────────────────────────────

pub const SHELL: &str = "\
{comment} Program to run in the terminal, with its arguments, working directory
{comment} and extra environment variables. `login` starts it as a login shell.";

pub const SSH: &str = "\
{comment} Connect to this host via SSH instead of running a local shell.
{comment} Leave `host` empty to disable.";

pub const MAXIMIZED: &str = "\
{comment} Start the window maximized.";

pub const FULLSCREEN: &str = "\
{comment} Start the window in fullscreen mode.";

pub const SHOW_TITLE_BAR: &str = "\
{comment} Show the window title bar.";

pub const SIZE_INDICATOR_ON_RESIZE: &str = "\
{comment} Show the terminal size in cells while the window is resized.";

pub const MOUSE_HIDE_WHILE_TYPING: &str = "\
{comment} Hide the mouse cursor while typing.";

pub const WM_CLASS: &str = "\
{comment} Window class reported to the window manager (X11 WM_CLASS).";

pub const MARGINS: &str = "\
{comment} Padding in pixels between the window border and the text.";

pub const TERMINAL_ID: &str = "\
{comment} Terminal model to emulate: VT100, VT220, VT240, VT320, VT330,
{comment} VT340, VT420, VT510, VT520 or VT525.";

pub const TERMINAL_SIZE: &str = "\
{comment} Initial size of the terminal in columns and lines.";

pub const TAB_WIDTH: &str = "\
{comment} Distance in columns between the initial tab stops.";

pub const HISTORY: &str = "\
{comment} Scrollback settings.
{comment}
{comment} limit: number of lines kept, -1 for unlimited.
{comment} auto_scroll_on_update: jump to the bottom on new output.
{comment} scroll_multiplier: lines scrolled per mouse wheel step.";

pub const SCROLLBAR: &str = "\
{comment} Scrollbar position (left, right or hidden) and whether it is hidden
{comment} while the alternate screen is active.";

pub const OPTION_AS_ALT: &str = "\
{comment} macOS only: treat the Option key as Alt (none, left, right or both).";

pub const PERMISSIONS: &str = "\
{comment} How to answer privileged requests from applications: allow, deny or ask.";

pub const FONTS: &str = "\
{comment} Font settings.
{comment}
{comment} size is in points; a font face is either a family name or a mapping
{comment} with family, weight, slant and features.";

pub const DRAW_BOLD_TEXT_WITH_BRIGHT_COLORS: &str = "\
{comment} Render bold text with the bright variant of its color.";

pub const COLORS: &str = "\
{comment} Color scheme to use, either a single name or a mapping with
{comment} `light` and `dark` scheme names that follow the desktop appearance.";

pub const NORMAL_MODE_CURSOR: &str = "\
{comment} Cursor in normal (vi) mode.";

pub const INSERT_MODE_CURSOR: &str = "\
{comment} Cursor in insert mode. Shape is one of block, rectangle, underscore or bar;
{comment} blinking_interval is in milliseconds.";

pub const VISUAL_MODE_CURSOR: &str = "\
{comment} Cursor in visual (selection) mode.";

pub const STATUS_LINE: &str = "\
{comment} Status line: display (none, indicator or host_writable), position
{comment} (top or bottom) and whether the window title is mirrored into it.";

pub const BACKGROUND: &str = "\
{comment} Window background opacity (0.0 to 1.0) and blur.";

pub const BELL: &str = "\
{comment} Bell sound (default, off or a file path), desktop alert and volume.";

pub const HIGHLIGHT_TIMEOUT: &str = "\
{comment} Time in milliseconds a highlighted search match or copied range stays highlighted.";

pub const VI_MODE_SCROLLOFF: &str = "\
{comment} Number of lines kept visible above and below the cursor in normal mode.";

pub const SMOOTH_LINE_SCROLLING: &str = "\
{comment} Time in milliseconds to animate scrolling by one line. 0 disables smooth scrolling.";
