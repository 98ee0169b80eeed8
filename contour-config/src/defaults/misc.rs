//! Default values for global (non-profile) settings.

use std::time::Duration;

/// Name of the profile every other profile inherits from.
pub fn profile_name() -> String {
    "main".to_string()
}

pub fn platform_plugin() -> String {
    "auto".to_string()
}

pub fn word_delimiters() -> String {
    " /\\()\"'-.,:;<>~!@#$%^&*+=[]{}~?|│".to_string()
}

pub fn read_buffer_size() -> usize {
    16384
}

pub fn pty_buffer_size() -> usize {
    1024 * 1024
}

pub fn early_exit_threshold() -> Duration {
    Duration::from_secs(5)
}

pub fn tile_hashtable_slots() -> usize {
    4096
}

pub fn tile_cache_count() -> usize {
    4000
}

pub fn sixel_register_count() -> usize {
    4096
}
