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
    sliders: HashMap<String, SliderEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SliderEntry {
    config: String,
    item_count: usize,
    viewport_width: f32,
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

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Slider option documents plus the mount conditions they were written for.
pub mod sliders {
    use super::*;

    /// Item count and viewport width a fixture expects to be mounted with.
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub struct Mount {
        pub item_count: usize,
        pub viewport_width: f32,
    }

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.sliders.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.sliders, "slider", name)?;
        read_to_string(&entry.config)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.sliders, "slider", name)?;
        super::load_json(&entry.config)
    }

    pub fn mount(name: &str) -> Result<Mount> {
        let entry = lookup(&MANIFEST.sliders, "slider", name)?;
        Ok(Mount {
            item_count: entry.item_count,
            viewport_width: entry.viewport_width,
        })
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.sliders, "slider", name)?;
        Ok(resolve_path(&entry.config))
    }
}
