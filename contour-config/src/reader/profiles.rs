//! Profile loading with inheritance from the default profile.

use super::{LoadContext, Section};
use crate::config::Config;
use crate::error::FieldError;
use crate::profile::TerminalProfile;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;

/// Load `profiles`.
///
/// The profile named by `default_profile` is loaded first. Every other
/// profile starts as a copy of it and overlays only what its own subtree
/// lists. Without a `profiles` key the built-in profile set is kept.
pub(super) fn load_profiles(root: &Section<'_>, config: &mut Config, ctx: &mut LoadContext) {
    let default_name = config.default_profile.value().clone();

    let Some(node) = root.get("profiles") else {
        ensure_default_profile(config, &default_name);
        return;
    };
    let Some(section) = Section::of(node, "profiles", ctx) else {
        ensure_default_profile(config, &default_name);
        return;
    };

    let mut default_profile = TerminalProfile::default();
    let default_path = section.key_path(&default_name);
    match section.get(&default_name) {
        Some(node) => load_profile(&mut default_profile, node, &default_path, ctx),
        None => ctx.report(
            &default_path,
            format!("default profile '{default_name}' is not defined, using built-in settings"),
        ),
    }

    let mut profiles = BTreeMap::new();
    for (name, node) in section.entries(ctx) {
        if name == default_name {
            continue;
        }
        let mut profile = default_profile.clone();
        load_profile(&mut profile, node, &section.key_path(name), ctx);
        log::debug!("Loaded profile '{name}' (inherits '{default_name}')");
        profiles.insert(name.to_string(), profile);
    }
    profiles.insert(default_name, default_profile);

    config.profiles.set(profiles);
}

/// Keep the built-in profiles, making sure the default profile exists.
fn ensure_default_profile(config: &mut Config, default_name: &str) {
    config
        .profiles
        .value_mut()
        .entry(default_name.to_string())
        .or_default();
}

/// Overlay one profile subtree onto `profile`.
pub(super) fn load_profile(
    profile: &mut TerminalProfile,
    node: &Value,
    path: &str,
    ctx: &mut LoadContext,
) {
    let Some(s) = Section::of(node, path, ctx) else {
        return;
    };

    s.load_entry("shell", &mut profile.shell, ctx);
    s.load_entry("ssh", &mut profile.ssh, ctx);
    s.load_entry("maximized", &mut profile.maximized, ctx);
    s.load_entry("fullscreen", &mut profile.fullscreen, ctx);
    s.load_entry("show_title_bar", &mut profile.show_title_bar, ctx);
    s.load_entry(
        "size_indicator_on_resize",
        &mut profile.size_indicator_on_resize,
        ctx,
    );
    s.load_entry(
        "mouse_hide_while_typing",
        &mut profile.mouse_hide_while_typing,
        ctx,
    );
    s.load_entry("wm_class", &mut profile.wm_class, ctx);
    s.load_entry("margins", &mut profile.margins, ctx);
    s.load_entry("terminal_id", &mut profile.terminal_id, ctx);
    s.load_entry("terminal_size", &mut profile.terminal_size, ctx);
    s.load_validated("tab_width", profile.tab_width.value_mut(), ctx, |width| {
        if *width == 0 {
            Err(FieldError::OutOfRange {
                value: width.to_string(),
                range: "1..",
            })
        } else {
            Ok(())
        }
    });
    s.load_entry("history", &mut profile.history, ctx);
    s.load_entry("scrollbar", &mut profile.scrollbar, ctx);
    s.load_entry("option_as_alt", &mut profile.option_as_alt, ctx);
    s.load_entry("permissions", &mut profile.permissions, ctx);
    s.load_entry("fonts", &mut profile.fonts, ctx);
    s.load_entry(
        "draw_bold_text_with_bright_colors",
        &mut profile.draw_bold_text_with_bright_colors,
        ctx,
    );
    s.load_entry("colors", &mut profile.colors, ctx);
    s.load_entry("normal_mode", &mut profile.normal_mode, ctx);
    s.load_entry("insert_mode", &mut profile.insert_mode, ctx);
    s.load_entry("visual_mode", &mut profile.visual_mode, ctx);
    s.load_entry("status_line", &mut profile.status_line, ctx);
    s.load_entry("background", &mut profile.background, ctx);
    s.load_entry("bell", &mut profile.bell, ctx);
    s.load_entry("highlight_timeout", &mut profile.highlight_timeout, ctx);
    s.load_entry("vi_mode_scrolloff", &mut profile.vi_mode_scrolloff, ctx);
    s.load_entry(
        "smooth_line_scrolling",
        &mut profile.smooth_line_scrolling,
        ctx,
    );
}
