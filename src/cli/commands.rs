//! Implementations of the `contour` subcommands.
//!
//! Every command writes its report to the given writer and returns the
//! process exit code; `Err` is reserved for I/O failures.

use super::LookupArgs;
use anyhow::{Context, Result};
use contour_config::keybindings::{
    ModeFlags, Modifiers, Trigger, parse_key_combo, parse_modifiers, parse_mouse_button,
};
use contour_config::{Config, ConfigWatcher, Diagnostics, SharedConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Where a command reads its configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file named with `--config`; a missing file means defaults.
    Path(PathBuf),
    /// The per-user file, written with documented defaults on first run.
    UserDefault,
}

impl ConfigSource {
    pub fn path(&self) -> PathBuf {
        match self {
            ConfigSource::Path(path) => path.clone(),
            ConfigSource::UserDefault => Config::config_path(),
        }
    }

    fn load(&self) -> Result<(Config, Diagnostics)> {
        match self {
            ConfigSource::Path(path) => Config::load_from_path(path),
            ConfigSource::UserDefault => Config::load(),
        }
    }
}

/// Load the configuration, attaching the configured log file if any.
fn load_config(source: &ConfigSource) -> Result<(Config, Diagnostics)> {
    let (config, diagnostics) = source.load()?;
    attach_log_file(&config);
    Ok((config, diagnostics))
}

fn attach_log_file(config: &Config) {
    if let Some(log_file) = config.log_file.as_deref()
        && let Err(e) = crate::logging::attach_file(Path::new(log_file))
    {
        log::warn!("Cannot open log file {log_file}: {e}");
    }
}

fn report_diagnostics(diagnostics: &Diagnostics, out: &mut impl Write) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    Ok(())
}

/// Write the default configuration to `output`, or to `out` without one.
pub fn generate_config(output: Option<&Path>, out: &mut impl Write) -> Result<i32> {
    let config = Config::default();
    match output {
        Some(path) => {
            config
                .save_to_path(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Wrote default configuration to {}", path.display())?;
        }
        None => out.write_all(config.to_yaml_string().as_bytes())?,
    }
    Ok(0)
}

/// Report every diagnostic; exit code 1 when there is at least one.
pub fn check_config(source: &ConfigSource, out: &mut impl Write) -> Result<i32> {
    let path = source.path();
    if let ConfigSource::Path(path) = source
        && !path.exists()
    {
        writeln!(out, "{}: not found, defaults apply", path.display())?;
        return Ok(0);
    }

    let (_, diagnostics) = load_config(source)?;
    if diagnostics.is_empty() {
        writeln!(out, "{}: OK", path.display())?;
        return Ok(0);
    }
    report_diagnostics(&diagnostics, out)?;
    writeln!(
        out,
        "{}: {} problem(s) found",
        path.display(),
        diagnostics.len()
    )?;
    Ok(1)
}

pub fn list_profiles(source: &ConfigSource, out: &mut impl Write) -> Result<i32> {
    let (config, _) = load_config(source)?;
    for name in config.profile_names() {
        let marker = if name == config.default_profile.as_str() {
            "*"
        } else {
            " "
        };
        writeln!(out, "{marker} {name}")?;
    }
    Ok(0)
}

/// Actual mode flags for a lookup, e.g. `Select|Insert`.
fn parse_mode_flags(text: &str) -> Result<ModeFlags> {
    text.split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(ModeFlags::empty(), |flags, name| -> Result<ModeFlags> {
            Ok(flags | ModeFlags::from_doc_name(name)?)
        })
}

fn parse_lookup_modifiers(text: &str) -> Result<Modifiers> {
    Ok(parse_modifiers(
        text.split(['+', '|'])
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    )?)
}

/// The trigger plus any modifiers spelled inside a `--key` combo.
fn lookup_trigger(args: &LookupArgs) -> Result<(Modifiers, Trigger)> {
    if let Some(ch) = args.character {
        return Ok((Modifiers::empty(), Trigger::Char(ch)));
    }
    if let Some(button) = &args.mouse {
        return Ok((Modifiers::empty(), Trigger::Mouse(parse_mouse_button(button)?)));
    }
    let key = args.key.as_deref().context("no trigger given")?;
    Ok(parse_key_combo(key)?)
}

/// Print the resolved actions one per line; exit code 1 when nothing is bound.
pub fn lookup(source: &ConfigSource, args: &LookupArgs, out: &mut impl Write) -> Result<i32> {
    let (combo_modifiers, trigger) = lookup_trigger(args)?;
    let modifiers = combo_modifiers | parse_lookup_modifiers(&args.mods)?;
    let modes = parse_mode_flags(&args.modes)?;

    let (config, _) = load_config(source)?;
    match config.input_mappings.resolve(trigger, modifiers, modes) {
        Some(actions) => {
            for action in actions {
                writeln!(out, "{action}")?;
            }
            Ok(0)
        }
        None => {
            writeln!(out, "No binding for {modifiers} {trigger}")?;
            Ok(1)
        }
    }
}

/// Re-check the document after every change until interrupted.
pub fn watch(source: &ConfigSource, out: &mut impl Write) -> Result<i32> {
    let (config, diagnostics) = load_config(source)?;
    let path = source.path();
    let shared = SharedConfig::with_diagnostics(config, diagnostics, &path);
    if !*shared.snapshot().live_config {
        log::warn!("live_config is disabled; watching {} anyway", path.display());
    }
    report_diagnostics(&shared.diagnostics(), out)?;

    let watcher = ConfigWatcher::with_default_debounce(&path)?;
    writeln!(out, "Watching {} (Ctrl+C to stop)", path.display())?;
    out.flush()?;

    loop {
        if let Some(result) = watcher.reload_if_changed(&shared) {
            match result {
                Ok(diagnostics) if diagnostics.is_empty() => writeln!(out, "Reloaded: OK")?,
                Ok(diagnostics) => {
                    report_diagnostics(&diagnostics, out)?;
                    writeln!(out, "Reloaded: {} problem(s)", diagnostics.len())?;
                }
                Err(e) => writeln!(out, "Reload failed: {e:#}")?,
            }
            out.flush()?;
        }
        std::thread::sleep(WATCH_POLL_INTERVAL);
    }
}
