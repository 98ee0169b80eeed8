//! Canonical document writer.
//!
//! Produces a YAML document from a [`Config`] in which every entry is
//! preceded by its documentation. Feeding the output back through
//! [`crate::reader::load`] reproduces every value.
//!
//! Nesting is tracked by [`IndentGuard`]: opening a section returns a guard
//! that dereferences to the writer and restores the previous depth when
//! dropped.

mod collections;
mod composite;
mod value;

use crate::config::Config;
use crate::entry::ConfigEntry;
use std::ops::{Deref, DerefMut};

pub(crate) use value::WriteValue;

const INDENT: &str = "    ";
const COMMENT_MARKER: &str = "#";

/// Render the whole configuration as document text.
pub fn serialize(config: &Config) -> String {
    let mut w = DocumentWriter::new();
    w.line("# contour terminal emulator configuration");

    w.entry("platform_plugin", &config.platform_plugin);
    w.entry("renderer", &config.renderer);
    w.entry("word_delimiters", &config.word_delimiters);
    w.entry("read_buffer_size", &config.read_buffer_size);
    w.entry("pty_buffer_size", &config.pty_buffer_size);
    w.entry("default_profile", &config.default_profile);
    w.entry("spawn_new_process", &config.spawn_new_process);
    w.entry("live_config", &config.live_config);
    w.entry("reflow_on_resize", &config.reflow_on_resize);
    w.entry("early_exit_threshold", &config.early_exit_threshold);
    w.entry("images", &config.images);
    w.entry("log_file", &config.log_file);
    w.entry("profiles", &config.profiles);
    w.entry("color_schemes", &config.color_schemes);
    w.entry("input_mapping", &config.input_mappings);

    w.finish()
}

/// Accumulates document lines at the current nesting depth.
#[derive(Debug, Default)]
pub(crate) struct DocumentWriter {
    out: String,
    depth: usize,
}

impl DocumentWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Write `text` as one line at the current depth.
    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Write `key: value` with an already rendered value.
    pub(crate) fn scalar(&mut self, key: &str, rendered: &str) {
        self.line(&format!("{}: {}", plain_or_quoted(key), rendered));
    }

    /// Open a nested mapping under `key`.
    pub(crate) fn section(&mut self, key: &str) -> IndentGuard<'_> {
        self.line(&format!("{}:", plain_or_quoted(key)));
        self.indent()
    }

    /// Increase the depth until the returned guard is dropped.
    pub(crate) fn indent(&mut self) -> IndentGuard<'_> {
        self.depth += 1;
        IndentGuard { writer: self }
    }

    /// Write a documentation template as comment lines.
    ///
    /// Documented entries are separated by a blank line, except directly
    /// below the line that opened their section.
    pub(crate) fn documentation(&mut self, template: &str) {
        if template.is_empty() {
            return;
        }
        if !self.out.is_empty() && !self.out.ends_with(":\n") {
            self.out.push('\n');
        }
        let text = template.replace(crate::entry::COMMENT_PLACEHOLDER, COMMENT_MARKER);
        for line in text.lines() {
            self.line(line);
        }
    }

    /// Write a documented entry.
    pub(crate) fn entry<T: WriteValue>(&mut self, key: &str, entry: &ConfigEntry<T>) {
        self.documentation(entry.documentation());
        entry.value().write_value(key, self);
    }

    /// Write an undocumented member of a composite.
    pub(crate) fn field<T: WriteValue>(&mut self, key: &str, value: &T) {
        value.write_value(key, self);
    }
}

/// Scoped nesting level of a [`DocumentWriter`].
pub(crate) struct IndentGuard<'a> {
    writer: &'a mut DocumentWriter,
}

impl Deref for IndentGuard<'_> {
    type Target = DocumentWriter;

    fn deref(&self) -> &DocumentWriter {
        self.writer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut DocumentWriter {
        self.writer
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.writer.depth -= 1;
    }
}

// ============================================================================
// Scalar Rendering
// ============================================================================

/// Double-quoted, escaped string scalar.
pub(crate) fn quote(s: &str) -> String {
    let quoted = serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"));
    let mut out = String::with_capacity(quoted.len());
    for c in quoted.chars() {
        match c {
            // Characters YAML 1.1 parsers treat as line breaks.
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if !is_yaml_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out
}

/// The YAML printable set; anything else must be escaped.
fn is_yaml_printable(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{7E}'
            | '\u{85}'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn escape_code_point(c: char) -> String {
    match u32::from(c) {
        n @ 0..=0xFF => format!("\\x{n:02x}"),
        n @ 0x100..=0xFFFF => format!("\\u{n:04x}"),
        n => format!("\\U{n:08x}"),
    }
}

/// Words a YAML parser would not read back as a plain string key.
const RESERVED_WORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "y", "n"];

/// Key or enum name, quoted unless it is a plain identifier.
pub(crate) fn plain_or_quoted(key: &str) -> String {
    let plain = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !RESERVED_WORDS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(key));

    if plain { key.to_string() } else { quote(key) }
}
