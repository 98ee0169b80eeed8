//! Fail-soft document reader.
//!
//! The document is parsed into a `serde_yaml_ng::Value` tree and then walked
//! field by field. Each field type knows how to load itself from a node via
//! [`LoadValue`]; a node that does not convert leaves the field untouched and
//! records a [`Diagnostic`]. Only a document that is not YAML at all (or whose
//! root is not a mapping) falls back to the defaults wholesale.

mod colors;
mod composite;
mod input_mapping;
mod profiles;
mod value;

use crate::config::Config;
use crate::entry::ConfigEntry;
use crate::error::{ConfigError, Diagnostic, Diagnostics, FieldError, node_kind};
use serde_yaml_ng::{Mapping, Value};
use std::fmt;

pub(crate) use value::LoadValue;

/// Load a configuration from document text.
///
/// Never fails: problems are returned as diagnostics next to a usable
/// configuration.
pub fn load(document: &str) -> (Config, Diagnostics) {
    let mut ctx = LoadContext::default();
    let mut config = Config::default();

    if document.trim().is_empty() {
        return (config, ctx.finish());
    }

    let root: Value = match serde_yaml_ng::from_str(document) {
        Ok(root) => root,
        Err(e) => {
            ctx.report("", ConfigError::Parse(e));
            return (config, ctx.finish());
        }
    };

    let root_map = match &root {
        Value::Mapping(map) => map,
        Value::Null => return (config, ctx.finish()),
        other => {
            ctx.report(
                "",
                format!(
                    "document root must be a mapping, found {}",
                    node_kind(other)
                ),
            );
            return (config, ctx.finish());
        }
    };

    let root = Section::root(root_map);
    load_globals(&root, &mut config, &mut ctx);
    colors::load_color_schemes(&root, &mut config, &mut ctx);
    profiles::load_profiles(&root, &mut config, &mut ctx);
    input_mapping::load_input_mappings(&root, &mut config, &mut ctx);

    log::debug!(
        "Loaded config: {} profile(s), {} color scheme(s), {} binding(s), {} diagnostic(s)",
        config.profiles.len(),
        config.color_schemes.len(),
        config.input_mappings.len(),
        ctx.len()
    );

    (config, ctx.finish())
}

fn load_globals(root: &Section<'_>, config: &mut Config, ctx: &mut LoadContext) {
    root.load_entry("platform_plugin", &mut config.platform_plugin, ctx);
    root.load_entry("renderer", &mut config.renderer, ctx);
    root.load_entry("word_delimiters", &mut config.word_delimiters, ctx);
    root.load_entry("read_buffer_size", &mut config.read_buffer_size, ctx);
    root.load_entry("pty_buffer_size", &mut config.pty_buffer_size, ctx);
    root.load_validated("default_profile", config.default_profile.value_mut(), ctx, |name| {
        if name.is_empty() {
            Err(FieldError::Invalid("profile name must not be empty".to_string()))
        } else {
            Ok(())
        }
    });
    root.load_entry("spawn_new_process", &mut config.spawn_new_process, ctx);
    root.load_entry("live_config", &mut config.live_config, ctx);
    root.load_entry("reflow_on_resize", &mut config.reflow_on_resize, ctx);
    root.load_entry("early_exit_threshold", &mut config.early_exit_threshold, ctx);
    root.load_entry("images", &mut config.images, ctx);
    root.load_entry("log_file", &mut config.log_file, ctx);
}

// ============================================================================
// Load Context
// ============================================================================

/// Collects diagnostics for one load.
#[derive(Debug, Default)]
pub(crate) struct LoadContext {
    diagnostics: Diagnostics,
}

impl LoadContext {
    /// Record a problem at `path` and log it.
    pub(crate) fn report(&mut self, path: &str, message: impl fmt::Display) {
        let diagnostic = Diagnostic::new(path, message.to_string());
        log::warn!("Config: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn len(&self) -> usize {
        self.diagnostics.len()
    }

    fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}

// ============================================================================
// Section
// ============================================================================

/// A mapping node together with its dotted path in the document.
pub(crate) struct Section<'a> {
    map: &'a Mapping,
    path: String,
}

impl<'a> Section<'a> {
    fn root(map: &'a Mapping) -> Self {
        Self {
            map,
            path: String::new(),
        }
    }

    /// View `node` as a section. A null node is an empty override and yields
    /// `None` silently; any other non-mapping is reported.
    pub(crate) fn of(node: &'a Value, path: &str, ctx: &mut LoadContext) -> Option<Self> {
        match node {
            Value::Mapping(map) => Some(Self {
                map,
                path: path.to_string(),
            }),
            Value::Null => None,
            other => {
                ctx.report(path, FieldError::mismatch("a mapping", other));
                None
            }
        }
    }

    pub(crate) fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// The nested section under `key`, if present.
    pub(crate) fn child(&self, key: &str, ctx: &mut LoadContext) -> Option<Section<'a>> {
        let node = self.get(key)?;
        Section::of(node, &self.key_path(key), ctx)
    }

    /// Overlay `target` with the node under `key`; absent keys keep the value.
    pub(crate) fn load<T: LoadValue>(&self, key: &str, target: &mut T, ctx: &mut LoadContext) {
        if let Some(node) = self.get(key) {
            target.load_into(node, &self.key_path(key), ctx);
        }
    }

    pub(crate) fn load_entry<T: LoadValue>(
        &self,
        key: &str,
        entry: &mut ConfigEntry<T>,
        ctx: &mut LoadContext,
    ) {
        self.load(key, entry.value_mut(), ctx);
    }

    /// Like [`Section::load`], but the loaded value must also pass `validate`.
    ///
    /// The value is only replaced when loading produced no diagnostics and
    /// validation succeeded.
    pub(crate) fn load_validated<T, F>(
        &self,
        key: &str,
        target: &mut T,
        ctx: &mut LoadContext,
        validate: F,
    ) where
        T: LoadValue + Clone,
        F: Fn(&T) -> Result<(), FieldError>,
    {
        let Some(node) = self.get(key) else {
            return;
        };
        let path = self.key_path(key);
        let mut candidate = target.clone();
        let before = ctx.len();
        candidate.load_into(node, &path, ctx);
        if ctx.len() != before {
            return;
        }
        match validate(&candidate) {
            Ok(()) => *target = candidate,
            Err(e) => ctx.report(&path, e),
        }
    }

    /// Entries with string keys, in document order. Other keys are reported
    /// and skipped.
    pub(crate) fn entries(&self, ctx: &mut LoadContext) -> Vec<(&'a str, &'a Value)> {
        let mut entries = Vec::with_capacity(self.map.len());
        for (key, value) in self.map {
            match key.as_str() {
                Some(name) => entries.push((name, value)),
                None => ctx.report(
                    &self.path,
                    format!("ignoring entry with non-string key ({})", node_kind(key)),
                ),
            }
        }
        entries
    }
}
