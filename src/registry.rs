//! Dependency metadata resolution.
//!
//! Two inputs feed the engine's boot configuration: the project's own
//! package description (`elm-package.json`) and the package registry. The
//! registry is resolved from a local cache under the user cache directory;
//! when the cache is absent the run continues with an empty registry and a
//! logged warning instead of failing.

use crate::engine::protocol::{PackageMetadata, Registry};
use std::fs;
use std::path::{Path, PathBuf};

pub const PACKAGE_FILE: &str = "elm-package.json";

/// Read the project package description, falling back to defaults when the
/// file is absent or malformed.
pub fn load_package_metadata(root: &Path) -> PackageMetadata {
    let path = root.join(PACKAGE_FILE);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => {
            log::debug!("no {} found, using defaults", path.display());
            return PackageMetadata::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(metadata) => metadata,
        Err(err) => {
            log::warn!("ignoring malformed {}: {err}", path.display());
            PackageMetadata::default()
        }
    }
}

/// Resolve the package registry. Asynchronous, attempted exactly once.
pub async fn resolve_registry() -> Registry {
    let Some(path) = registry_cache_path() else {
        log::warn!("no cache directory available, continuing with an empty registry");
        return Registry::default();
    };
    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => parse_registry(&raw, &path),
        Err(_) => {
            log::warn!(
                "registry cache missing at {}, continuing with an empty registry",
                path.display()
            );
            Registry::default()
        }
    }
}

fn registry_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("elmscan").join("registry.json"))
}

fn parse_registry(raw: &str, path: &Path) -> Registry {
    match serde_json::from_str(raw) {
        Ok(registry) => registry,
        Err(err) => {
            log::warn!("ignoring malformed registry cache {}: {err}", path.display());
            Registry::default()
        }
    }
}
