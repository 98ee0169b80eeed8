//! Core `Config` struct definition.
//!
//! Global settings sit at the top level of the document next to the three
//! collections: `profiles`, `color_schemes` and `input_mapping`. Every field
//! is a [`ConfigEntry`] so the writer can emit its documentation.

use crate::defaults;
use crate::docs;
use crate::entry::ConfigEntry;
use crate::profile::TerminalProfile;
use crate::types::{ColorPalette, ImagesConfig, RendererConfig};
use contour_keybindings::InputMappings;
use std::collections::BTreeMap;
use std::time::Duration;

/// The fully resolved configuration.
///
/// Built once by the reader (or [`Config::default`]) and then treated as an
/// immutable snapshot; a reload builds a new `Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ========================================================================
    // Platform & Rendering
    // ========================================================================
    pub platform_plugin: ConfigEntry<String>,
    pub renderer: ConfigEntry<RendererConfig>,

    // ========================================================================
    // Terminal I/O
    // ========================================================================
    pub word_delimiters: ConfigEntry<String>,
    pub read_buffer_size: ConfigEntry<usize>,
    pub pty_buffer_size: ConfigEntry<usize>,

    // ========================================================================
    // Session Behavior
    // ========================================================================
    pub default_profile: ConfigEntry<String>,
    pub spawn_new_process: ConfigEntry<bool>,
    pub live_config: ConfigEntry<bool>,
    pub reflow_on_resize: ConfigEntry<bool>,
    pub early_exit_threshold: ConfigEntry<Duration>,

    // ========================================================================
    // Images & Logging
    // ========================================================================
    pub images: ConfigEntry<ImagesConfig>,
    /// Optional path that log output is mirrored into.
    pub log_file: ConfigEntry<Option<String>>,

    // ========================================================================
    // Collections
    // ========================================================================
    /// Profiles by name. Always contains the default profile.
    pub profiles: ConfigEntry<BTreeMap<String, TerminalProfile>>,
    pub color_schemes: ConfigEntry<BTreeMap<String, ColorPalette>>,
    pub input_mappings: ConfigEntry<InputMappings>,
}

impl Default for Config {
    fn default() -> Self {
        let profile_name = defaults::profile_name();
        let scheme_name = defaults::color_scheme_name();

        Self {
            platform_plugin: ConfigEntry::new(defaults::platform_plugin(), docs::PLATFORM_PLUGIN),
            renderer: ConfigEntry::with_default(docs::RENDERER),
            word_delimiters: ConfigEntry::new(defaults::word_delimiters(), docs::WORD_DELIMITERS),
            read_buffer_size: ConfigEntry::new(
                defaults::read_buffer_size(),
                docs::READ_BUFFER_SIZE,
            ),
            pty_buffer_size: ConfigEntry::new(defaults::pty_buffer_size(), docs::PTY_BUFFER_SIZE),
            default_profile: ConfigEntry::new(profile_name.clone(), docs::DEFAULT_PROFILE),
            spawn_new_process: ConfigEntry::new(false, docs::SPAWN_NEW_PROCESS),
            live_config: ConfigEntry::new(false, docs::LIVE_CONFIG),
            reflow_on_resize: ConfigEntry::new(true, docs::REFLOW_ON_RESIZE),
            early_exit_threshold: ConfigEntry::new(
                defaults::early_exit_threshold(),
                docs::EARLY_EXIT_THRESHOLD,
            ),
            images: ConfigEntry::with_default(docs::IMAGES),
            log_file: ConfigEntry::new(None, docs::LOG_FILE),
            profiles: ConfigEntry::new(
                BTreeMap::from([(profile_name, TerminalProfile::default())]),
                docs::PROFILES,
            ),
            color_schemes: ConfigEntry::new(
                BTreeMap::from([(scheme_name, ColorPalette::default())]),
                docs::COLOR_SCHEMES,
            ),
            input_mappings: ConfigEntry::new(defaults::input_mappings(), docs::INPUT_MAPPING),
        }
    }
}
