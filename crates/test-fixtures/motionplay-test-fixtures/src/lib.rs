use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    results: HashMap<String, ResultEntry>,
}

/// A recorded service response and the slug it was requested with.
#[derive(Debug, Deserialize)]
struct ResultEntry {
    slug: String,
    path: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup(name: &str) -> Result<&'static ResultEntry> {
    MANIFEST
        .results
        .get(name)
        .ok_or_else(|| anyhow!("unknown result fixture '{name}'"))
}

pub mod results {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.results.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Slug the recorded response was requested with.
    pub fn slug(name: &str) -> Result<String> {
        Ok(lookup(name)?.slug.clone())
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(&lookup(name)?.path)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        super::load_json(&lookup(name)?.path)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(&lookup(name)?.path))
    }
}
