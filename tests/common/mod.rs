//! Shared integration test helpers for contour.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` below keeps files that use only some helpers quiet.

#![allow(dead_code)]

use contour::config::{Config, Diagnostics};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Load a document that is expected to be free of problems.
pub fn load_clean(document: &str) -> Config {
    let (config, diagnostics) = contour::config::load(document);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics: {diagnostics:?}"
    );
    config
}

/// Load a document, returning the paths of all reported problems.
pub fn load_with_paths(document: &str) -> (Config, Vec<String>) {
    let (config, diagnostics) = contour::config::load(document);
    (config, paths(&diagnostics))
}

pub fn paths(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|d| d.path.clone()).collect()
}

/// Write `document` as `contour.yml` inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn document_on_disk(document: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("contour.yml");
    fs::write(&path, document).expect("Failed to write config");
    (dir, path)
}
