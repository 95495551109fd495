//! Version manifest reading and rewriting.
//!
//! The project manifest is a JSON object with a top-level `version` string.
//! Optional per-component documents live one directory level below a components
//! directory and carry their version at `driver_type.version`. Documents are
//! written back with 2-space indentation, key order preserved, and a trailing
//! newline.

use crate::error::{ReleaseError, Result};
use semver::Version;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

fn load(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseError::manifest(format!("cannot read {}: {}", path.display(), e))
    })?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(ReleaseError::manifest(format!(
            "{} is not a JSON object",
            path.display()
        ))),
    }
}

fn store(path: &Path, doc: Map<String, Value>) -> Result<()> {
    let mut content = serde_json::to_string_pretty(&Value::Object(doc))?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Reads the `version` field of a manifest.
///
/// # Returns
/// * `Ok(Some(String))` - The version text
/// * `Ok(None)` - No version field, or an empty one
/// * `Err` - Unreadable file, invalid JSON, or a non-string version
pub fn read_version(path: &Path) -> Result<Option<String>> {
    let doc = load(path)?;
    match doc.get("version") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(v)) if v.trim().is_empty() => Ok(None),
        Some(Value::String(v)) => Ok(Some(v.clone())),
        Some(other) => Err(ReleaseError::invalid_version(format!(
            "{} has a non-string version: {}",
            path.display(),
            other
        ))),
    }
}

/// Sets the top-level `version` field, keeping everything else as it was
pub fn write_version(path: &Path, version: &Version) -> Result<()> {
    let mut doc = load(path)?;
    doc.insert("version".to_string(), Value::String(version.to_string()));
    store(path, doc)
}

/// Sets `driver_type.version` in a component document
pub fn write_component_version(path: &Path, version: &Version) -> Result<()> {
    let mut doc = load(path)?;
    let driver_type = doc
        .get_mut("driver_type")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            ReleaseError::manifest(format!(
                "{} has no driver_type object",
                path.display()
            ))
        })?;
    driver_type.insert("version".to_string(), Value::String(version.to_string()));
    store(path, doc)
}

/// Finds component documents named `document` one level below `dir`.
///
/// A missing directory yields no documents. Results are sorted by path.
pub fn discover_components(dir: &Path, document: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let candidate = entry?.path().join(document);
        if candidate.is_file() {
            found.push(candidate);
        }
    }
    found.sort();
    Ok(found)
}

/// Rewrites every component document under `dir` to `version`.
///
/// The documents are independent, so each is rewritten on its own scoped
/// thread; all of them finish before this returns. The first failure (in path
/// order) is reported.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The documents that were rewritten
/// * `Err` - If any document could not be rewritten
pub fn bump_components(dir: &Path, document: &str, version: &Version) -> Result<Vec<PathBuf>> {
    let documents = discover_components(dir, document)?;

    let results: Vec<Result<()>> = thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|path| scope.spawn(move || write_component_version(path, version)))
            .collect();

        handles
            .into_iter()
            .zip(&documents)
            .map(|(handle, path)| {
                handle.join().unwrap_or_else(|_| {
                    Err(ReleaseError::manifest(format!(
                        "rewriting {} panicked",
                        path.display()
                    )))
                })
            })
            .collect()
    });

    results.into_iter().collect::<Result<Vec<()>>>()?;
    log::debug!("rewrote {} component manifests", documents.len());
    Ok(documents)
}
