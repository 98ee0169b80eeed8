// Library exports for testing and for embedding the configuration core.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod logging;

pub use contour_config as config;
pub use contour_keybindings as keybindings;

pub use contour_config::{Config, Diagnostics, SharedConfig};
