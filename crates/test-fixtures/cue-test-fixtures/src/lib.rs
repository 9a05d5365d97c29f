//! Shared fixture loader for integration tests: resolves named
//! stored-timeline documents from the repository's `fixtures/` directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    timelines: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

/// Raw JSON text of a named stored-timeline fixture.
pub fn timeline_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .timelines
        .get(name)
        .ok_or_else(|| anyhow!("unknown timeline fixture '{name}'"))?;
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
}

/// Names of all timeline fixtures in the manifest, sorted.
pub fn timeline_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.timelines.keys().cloned().collect();
    names.sort();
    names
}
